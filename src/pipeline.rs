use std::path::Path;

use crate::{
    dsl::{LayerBuilder, SceneBuilder},
    error::MapfolioResult,
    geojson::FeatureCollection,
    model::{LatLng, Legend, Scene, Viewport},
    render::{arena_markers, population_overlay},
    table::Table,
};

/// A bare scene: tiles and viewport only, no overlays.
pub fn build_base_scene(center: LatLng, zoom: u8) -> MapfolioResult<Scene> {
    SceneBuilder::new(Viewport {
        center,
        zoom,
        min_zoom: None,
    })
    .title("Map")
    .build()
}

/// The full arena pipeline: load both inputs, classify, and compose the
/// two-layer scene with its legends and toggle control.
#[tracing::instrument]
pub fn build_arena_scene(arenas: &Path, states: &Path) -> MapfolioResult<Scene> {
    let table = Table::load(arenas)?;
    let boundaries = FeatureCollection::load(states)?;

    let markers = arena_markers(&table)?;
    let choropleth = population_overlay(&boundaries)?;

    SceneBuilder::new(Viewport {
        center: LatLng::new(38.58, -96.09),
        zoom: 5,
        min_zoom: Some(5),
    })
    .title("NBA Arenas")
    .layer(LayerBuilder::new("NBA Arenas").markers(markers).build()?)?
    .layer(LayerBuilder::new("Population").geojson(choropleth).build()?)?
    .legend(Legend::divisions())?
    .legend(Legend::population())?
    .layer_control(true)
    .build()
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;

    const ARENAS: &str = "\
LAT,LON,TEAM,ARENA,CAPACITY,OPENED,DIVISION
42.366303,-71.062228,Celtics,TD Garden,18624,1995,Atlantic
34.043017,-118.267254,Lakers,Staples Center,18997,1999,Pacific
45.531553,-122.666756,Trail Blazers,Moda Center,19441,1995,Northwest
";

    const STATES: &str = r#"{"type": "FeatureCollection", "features": [
        {"type": "Feature", "properties": {"name": "A", "population": 4500000},
         "geometry": {"type": "Polygon", "coordinates": []}},
        {"type": "Feature", "properties": {"name": "B", "population": 7000000},
         "geometry": {"type": "Polygon", "coordinates": []}}
    ]}"#;

    fn write_inputs(dir: &str) -> (PathBuf, PathBuf) {
        let dir = PathBuf::from("target").join(dir);
        fs::create_dir_all(&dir).unwrap();
        let arenas = dir.join("arenas.txt");
        let states = dir.join("states.json");
        fs::write(&arenas, ARENAS).unwrap();
        fs::write(&states, STATES).unwrap();
        (arenas, states)
    }

    #[test]
    fn base_scene_has_no_overlays() {
        let scene = build_base_scene(LatLng::new(41.947521, -87.673645), 6).unwrap();
        assert!(scene.layers.is_empty());
        assert!(scene.legends.is_empty());
        assert!(!scene.layer_control);
        assert_eq!(scene.viewport.zoom, 6);
    }

    #[test]
    fn arena_scene_composes_layers_and_legends() {
        let (arenas, states) = write_inputs("pipeline_arena_scene");
        let scene = build_arena_scene(&arenas, &states).unwrap();
        let names: Vec<_> = scene.layers.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["NBA Arenas", "Population"]);
        assert_eq!(scene.layers[0].markers().count(), 3);
        assert_eq!(scene.legends.len(), 2);
        assert!(scene.layer_control);
        assert_eq!(scene.viewport.min_zoom, Some(5));
    }

    #[test]
    fn missing_input_file_is_an_error() {
        let err = build_arena_scene(
            Path::new("target/pipeline_missing/none.txt"),
            Path::new("target/pipeline_missing/none.json"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("none.txt"));
    }
}
