use crate::{
    error::{MapfolioError, MapfolioResult},
    geojson::FeatureCollection,
    model::{Item, Layer, Legend, Marker, Scene, TileSource, Viewport},
};

pub struct SceneBuilder {
    title: String,
    tiles: TileSource,
    viewport: Viewport,
    layers: Vec<Layer>,
    legends: Vec<Legend>,
    layer_control: bool,
}

impl SceneBuilder {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            title: "mapfolio".to_owned(),
            tiles: TileSource::carto_light(),
            viewport,
            layers: Vec::new(),
            legends: Vec::new(),
            layer_control: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn tiles(mut self, tiles: TileSource) -> Self {
        self.tiles = tiles;
        self
    }

    pub fn layer(mut self, layer: Layer) -> MapfolioResult<Self> {
        if self.layers.iter().any(|l| l.name == layer.name) {
            return Err(MapfolioError::validation(format!(
                "duplicate layer name '{}'",
                layer.name
            )));
        }
        self.layers.push(layer);
        Ok(self)
    }

    pub fn legend(mut self, legend: Legend) -> MapfolioResult<Self> {
        if self.legends.len() == 2 {
            return Err(MapfolioError::validation(
                "at most 2 legends can be attached",
            ));
        }
        self.legends.push(legend);
        Ok(self)
    }

    pub fn layer_control(mut self, on: bool) -> Self {
        self.layer_control = on;
        self
    }

    pub fn build(self) -> MapfolioResult<Scene> {
        let scene = Scene {
            title: self.title,
            tiles: self.tiles,
            viewport: self.viewport,
            layers: self.layers,
            legends: self.legends,
            layer_control: self.layer_control,
        };
        scene.validate()?;
        Ok(scene)
    }
}

pub struct LayerBuilder {
    name: String,
    show: bool,
    items: Vec<Item>,
}

impl LayerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            show: true,
            items: Vec::new(),
        }
    }

    pub fn show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.items.push(Item::Marker(marker));
        self
    }

    pub fn markers(mut self, markers: impl IntoIterator<Item = Marker>) -> Self {
        self.items.extend(markers.into_iter().map(Item::Marker));
        self
    }

    pub fn geojson(mut self, collection: FeatureCollection) -> Self {
        self.items.push(Item::GeoJson(collection));
        self
    }

    pub fn build(self) -> MapfolioResult<Layer> {
        if self.name.trim().is_empty() {
            return Err(MapfolioError::validation("layer name must be non-empty"));
        }
        Ok(Layer {
            name: self.name,
            show: self.show,
            items: self.items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::MarkerColor;
    use crate::model::LatLng;

    fn viewport() -> Viewport {
        Viewport {
            center: LatLng::new(38.58, -96.09),
            zoom: 5,
            min_zoom: Some(5),
        }
    }

    fn marker(lat: f64, lng: f64) -> Marker {
        Marker {
            at: LatLng::new(lat, lng),
            color: MarkerColor::Red,
            popup: None,
        }
    }

    #[test]
    fn builders_assemble_a_scene() {
        let layer = LayerBuilder::new("NBA Arenas")
            .marker(marker(42.3, -71.0))
            .marker(marker(40.7, -74.0))
            .build()
            .unwrap();
        let scene = SceneBuilder::new(viewport())
            .title("arenas")
            .layer(layer)
            .unwrap()
            .legend(Legend::divisions())
            .unwrap()
            .layer_control(true)
            .build()
            .unwrap();
        assert_eq!(scene.layers.len(), 1);
        assert_eq!(scene.layers[0].markers().count(), 2);
        assert!(scene.layer_control);
    }

    #[test]
    fn duplicate_layer_name_is_rejected() {
        let a = LayerBuilder::new("Population").build().unwrap();
        let b = LayerBuilder::new("Population").build().unwrap();
        let Err(err) = SceneBuilder::new(viewport()).layer(a).unwrap().layer(b) else {
            panic!("duplicate layer name accepted");
        };
        assert!(err.to_string().contains("duplicate layer name"));
    }

    #[test]
    fn third_legend_is_rejected() {
        let builder = SceneBuilder::new(viewport())
            .legend(Legend::divisions())
            .unwrap()
            .legend(Legend::population())
            .unwrap();
        let Err(err) = builder.legend(Legend::divisions()) else {
            panic!("third legend accepted");
        };
        assert!(err.to_string().contains("at most 2 legends"));
    }

    #[test]
    fn empty_layer_name_is_rejected() {
        assert!(LayerBuilder::new(" ").build().is_err());
    }

    #[test]
    fn build_runs_scene_validation() {
        let mut viewport = viewport();
        viewport.center.lat = 120.0;
        assert!(SceneBuilder::new(viewport).build().is_err());
    }
}
