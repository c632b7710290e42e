//! Programmatic Leaflet map composition: load tabular and GeoJSON data,
//! classify it into presentation attributes, compose named layers with
//! legends and a toggle control, and serialize the scene once to a single
//! self-contained HTML file.
//!
//! The pipeline is staged: load, then classify, then compose, then
//! serialize. See [`guide`] for the full walkthrough.

#![forbid(unsafe_code)]

pub mod classify;
pub mod dsl;
pub mod error;
pub mod geojson;
pub mod guide;
pub mod html;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod table;

pub use classify::{Division, MarkerColor, PopulationBracket};
pub use dsl::{LayerBuilder, SceneBuilder};
pub use error::{MapfolioError, MapfolioResult};
pub use geojson::{Feature, FeatureCollection};
pub use html::{render_page, write_html};
pub use model::{
    Item, LatLng, Layer, Legend, LegendAnchor, LegendEntry, Marker, Popup, Scene, TileSource,
    Viewport,
};
pub use pipeline::{build_arena_scene, build_base_scene};
pub use render::{POPUP_MAX_WIDTH, arena_markers, arena_popup, population_overlay};
pub use table::Table;
