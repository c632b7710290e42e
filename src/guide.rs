//! # Mapfolio guide (v0.1.0)
//!
//! This module is a standalone walkthrough of mapfolio's architecture and
//! public API. If you are looking for copy/paste commands, start with the
//! repository `README.md`. If you are implementing new features, start here.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Scene`](crate::Scene): the root container holding tiles, viewport,
//!   layers, legends, and the layer-control flag
//! - [`Layer`](crate::Layer): a named, toggleable group of renderables
//! - [`Marker`](crate::Marker) / [`Item`](crate::Item): the renderables,
//!   either point markers with popups or a styled GeoJSON overlay
//! - [`Legend`](crate::Legend): a static panel overlaid on the page,
//!   explaining a color-to-category mapping
//! - [`Division`](crate::Division) / [`PopulationBracket`](crate::PopulationBracket):
//!   the classifiers that turn data fields into presentation values
//!
//! The pipeline is explicitly staged:
//!
//! 1. Load inputs: [`Table::load`](crate::Table::load),
//!    [`FeatureCollection::load`](crate::FeatureCollection::load)
//! 2. Classify and render: [`arena_markers`](crate::arena_markers),
//!    [`population_overlay`](crate::population_overlay)
//! 3. Compose: [`SceneBuilder`](crate::SceneBuilder) /
//!    [`LayerBuilder`](crate::LayerBuilder)
//! 4. Serialize once: [`render_page`](crate::render_page) or
//!    [`write_html`](crate::write_html)
//!
//! Convenience wrappers for the whole chain live in
//! [`build_base_scene`](crate::build_base_scene) and
//! [`build_arena_scene`](crate::build_arena_scene).
//!
//! ---
//!
//! ## IO at the edges (and why)
//!
//! Classification and composition are deterministic and testable, so they
//! never touch the filesystem. IO happens in exactly three places: the two
//! loaders and the final [`write_html`](crate::write_html). Everything in
//! between operates on owned values, which is why every stage can be
//! exercised in unit tests without fixtures on disk.
//!
//! The scene is serialized exactly once. There is no incremental mutation of
//! an emitted artifact; change the scene, render again.
//!
//! ---
//!
//! ## Classifier contract
//!
//! [`Division`](crate::Division) is an exhaustive lookup: the six known
//! labels map to fixed [`MarkerColor`](crate::MarkerColor)s, and anything
//! else is a [`Classify`](crate::MapfolioError::Classify) error. There is no
//! fallback color; bad labels fail the run before any output exists.
//!
//! [`PopulationBracket::classify`](crate::PopulationBracket::classify) is an
//! ordered threshold rule with boundaries at 5,000,000 and 10,000,000:
//! values below 5M are `Low`, values in `[5M, 10M)` are `Mid`, and 10M and
//! up are `High`. Each bracket carries the fill color the choropleth and the
//! population legend share.
//!
//! ---
//!
//! ## Building a scene (Rust DSL)
//!
//! JSON round-trips via Serde, but for programmatic usage prefer the
//! builders:
//!
//! ```rust
//! use mapfolio::{
//!     LatLng, LayerBuilder, Marker, MarkerColor, Popup, SceneBuilder, Viewport, render_page,
//! };
//!
//! # fn main() -> mapfolio::MapfolioResult<()> {
//! let scene = SceneBuilder::new(Viewport {
//!     center: LatLng::new(38.58, -96.09),
//!     zoom: 5,
//!     min_zoom: Some(5),
//! })
//! .title("demo")
//! .layer(
//!     LayerBuilder::new("Arenas")
//!         .marker(Marker {
//!             at: LatLng::new(42.366303, -71.062228),
//!             color: MarkerColor::Red,
//!             popup: Some(Popup {
//!                 html: "<b>TD Garden</b>".to_string(),
//!                 max_width: 235,
//!             }),
//!         })
//!         .build()?,
//! )?
//! .layer_control(true)
//! .build()?;
//!
//! let page = render_page(&scene)?;
//! assert!(page.contains("var SCENE = {"));
//! # Ok(())
//! # }
//! ```
//!
//! Notes:
//!
//! - [`Scene::validate`](crate::Scene::validate) is called by the builder
//!   and again by the writer, so an invalid scene never reaches a file.
//! - Layer names key the toggle control and must be unique; the base tile
//!   layer is deliberately not part of the control.
//!
//! ---
//!
//! ## The artifact
//!
//! The output is one self-contained HTML file. Leaflet and Font Awesome are
//! referenced from their CDNs; the scene itself is embedded as a JSON
//! payload that a small static bootstrap script walks. All data-dependent
//! decisions (colors, fills, popup markup, legend rows) are made in Rust
//! before serialization; the script only instantiates what the payload
//! describes.
