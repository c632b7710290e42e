use std::collections::BTreeSet;

use crate::{
    classify::{Division, MarkerColor, PopulationBracket},
    error::{MapfolioError, MapfolioResult},
    geojson::FeatureCollection,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LatLng {
    pub lat: f64, // degrees, [-90, 90]
    pub lng: f64, // degrees, [-180, 180]
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> LatLng {
        LatLng { lat, lng }
    }
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: u8,             // initial Leaflet zoom level
    pub min_zoom: Option<u8>, // limits how far out the map can zoom
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TileSource {
    pub name: String,
    pub url: String, // {s}/{z}/{x}/{y} template
    pub attribution: String,
    pub subdomains: String, // empty when the template has no {s}
    pub max_zoom: u8,
}

impl TileSource {
    /// Bright, keyless CARTO basemap.
    pub fn carto_light() -> TileSource {
        TileSource {
            name: "CARTO light".to_owned(),
            url: "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png".to_owned(),
            attribution: "&copy; OpenStreetMap contributors &copy; CARTO".to_owned(),
            subdomains: "abcd".to_owned(),
            max_zoom: 20,
        }
    }

    pub fn osm() -> TileSource {
        TileSource {
            name: "OpenStreetMap".to_owned(),
            url: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_owned(),
            attribution: "&copy; OpenStreetMap contributors".to_owned(),
            subdomains: String::new(),
            max_zoom: 19,
        }
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Popup {
    pub html: String, // pre-escaped markup
    pub max_width: u32,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Marker {
    pub at: LatLng,
    pub color: MarkerColor,
    pub popup: Option<Popup>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum Item {
    Marker(Marker),
    GeoJson(FeatureCollection),
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Layer {
    pub name: String, // keys the toggle control, unique per scene
    pub show: bool,   // initial visibility
    pub items: Vec<Item>,
}

impl Layer {
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.items.iter().filter_map(|item| match item {
            Item::Marker(marker) => Some(marker),
            Item::GeoJson(_) => None,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LegendAnchor {
    BottomLeft,
    BottomRight,
}

impl LegendAnchor {
    pub fn css(self) -> &'static str {
        match self {
            LegendAnchor::BottomLeft => "bottom: 15px; left: 15px",
            LegendAnchor::BottomRight => "bottom: 20px; right: 15px",
        }
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub icon: String, // font-awesome classes for the swatch
    pub color_css: String,
}

/// Static legend fragment overlaid on the rendered scene.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Legend {
    pub title: String,
    pub anchor: LegendAnchor,
    pub width_px: u32,
    pub height_px: u32,
    pub font_px: u32,
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    /// Division legend. Entries come straight off the classifier table, so
    /// every marker color the classifier can produce is covered.
    pub fn divisions() -> Legend {
        Legend {
            title: "NBA Arenas by Division".to_owned(),
            anchor: LegendAnchor::BottomRight,
            width_px: 220,
            height_px: 270,
            font_px: 14,
            entries: Division::ALL
                .into_iter()
                .map(|division| LegendEntry {
                    label: division.label().to_owned(),
                    icon: "fa fa-map-marker fa-lg".to_owned(),
                    color_css: division.color().css().to_owned(),
                })
                .collect(),
        }
    }

    /// Population legend, high bracket first. Swatches use the bracket
    /// fills, so the legend always matches the choropleth.
    pub fn population() -> Legend {
        let brackets = [
            PopulationBracket::High,
            PopulationBracket::Mid,
            PopulationBracket::Low,
        ];
        Legend {
            title: "States by Population".to_owned(),
            anchor: LegendAnchor::BottomLeft,
            width_px: 175,
            height_px: 190,
            font_px: 15,
            entries: brackets
                .into_iter()
                .map(|bracket| LegendEntry {
                    label: bracket.label().to_owned(),
                    icon: "fa fa-area-chart fa-2x".to_owned(),
                    color_css: bracket.fill().to_owned(),
                })
                .collect(),
        }
    }

    pub fn covers(&self, color_css: &str) -> bool {
        self.entries.iter().any(|entry| entry.color_css == color_css)
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    pub title: String,
    pub tiles: TileSource,
    pub viewport: Viewport,
    pub layers: Vec<Layer>,   // draw order
    pub legends: Vec<Legend>, // at most 2
    pub layer_control: bool,  // toggle widget; base tiles stay out of it
}

impl Scene {
    pub fn validate(&self) -> MapfolioResult<()> {
        validate_lat_lng(self.viewport.center, "viewport center")?;
        if let Some(min_zoom) = self.viewport.min_zoom {
            if min_zoom > self.viewport.zoom {
                return Err(MapfolioError::validation(format!(
                    "min_zoom {} exceeds zoom {}",
                    min_zoom, self.viewport.zoom
                )));
            }
        }
        if self.viewport.zoom > self.tiles.max_zoom {
            return Err(MapfolioError::validation(format!(
                "zoom {} exceeds tile source max zoom {}",
                self.viewport.zoom, self.tiles.max_zoom
            )));
        }

        let mut seen = BTreeSet::new();
        for layer in &self.layers {
            if layer.name.trim().is_empty() {
                return Err(MapfolioError::validation("layer name must be non-empty"));
            }
            if !seen.insert(layer.name.as_str()) {
                return Err(MapfolioError::validation(format!(
                    "duplicate layer name '{}'",
                    layer.name
                )));
            }
            for (index, item) in layer.items.iter().enumerate() {
                if let Item::Marker(marker) = item {
                    validate_lat_lng(
                        marker.at,
                        &format!("marker {} in layer '{}'", index, layer.name),
                    )?;
                    if let Some(popup) = &marker.popup {
                        if popup.max_width == 0 {
                            return Err(MapfolioError::validation(format!(
                                "marker {} in layer '{}': popup max_width must be > 0",
                                index, layer.name
                            )));
                        }
                    }
                }
            }
        }

        if self.legends.len() > 2 {
            return Err(MapfolioError::validation(format!(
                "{} legends attached, at most 2 are supported",
                self.legends.len()
            )));
        }
        for legend in &self.legends {
            if legend.title.trim().is_empty() {
                return Err(MapfolioError::validation("legend title must be non-empty"));
            }
            if legend.entries.is_empty() {
                return Err(MapfolioError::validation(format!(
                    "legend '{}' has no entries",
                    legend.title
                )));
            }
        }

        Ok(())
    }
}

fn validate_lat_lng(at: LatLng, what: &str) -> MapfolioResult<()> {
    if !at.lat.is_finite() || !(-90.0..=90.0).contains(&at.lat) {
        return Err(MapfolioError::validation(format!(
            "{what}: latitude {} out of range",
            at.lat
        )));
    }
    if !at.lng.is_finite() || !(-180.0..=180.0).contains(&at.lng) {
        return Err(MapfolioError::validation(format!(
            "{what}: longitude {} out of range",
            at.lng
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic_scene() -> Scene {
        Scene {
            title: "test map".to_owned(),
            tiles: TileSource::carto_light(),
            viewport: Viewport {
                center: LatLng::new(38.58, -96.09),
                zoom: 5,
                min_zoom: Some(5),
            },
            layers: vec![Layer {
                name: "NBA Arenas".to_owned(),
                show: true,
                items: vec![Item::Marker(Marker {
                    at: LatLng::new(42.366303, -71.062228),
                    color: MarkerColor::Red,
                    popup: Some(Popup {
                        html: "<b>TD Garden</b>".to_owned(),
                        max_width: 235,
                    }),
                })],
            }],
            legends: vec![Legend::divisions()],
            layer_control: true,
        }
    }

    #[test]
    fn validate_accepts_basic_scene() {
        basic_scene().validate().unwrap();
    }

    #[test]
    fn validate_rejects_center_off_globe() {
        let mut scene = basic_scene();
        scene.viewport.center.lat = 91.0;
        let err = scene.validate().unwrap_err();
        assert!(err.to_string().contains("latitude 91 out of range"));
    }

    #[test]
    fn validate_rejects_min_zoom_above_zoom() {
        let mut scene = basic_scene();
        scene.viewport.min_zoom = Some(9);
        assert!(scene.validate().is_err());
    }

    #[test]
    fn validate_rejects_zoom_beyond_tiles() {
        let mut scene = basic_scene();
        scene.viewport.zoom = 21;
        scene.viewport.min_zoom = None;
        assert!(scene.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_layer_name() {
        let mut scene = basic_scene();
        scene.layers[0].name = "  ".to_owned();
        assert!(scene.validate().is_err());
    }

    #[test]
    fn validate_rejects_duplicate_layer_names() {
        let mut scene = basic_scene();
        let copy = scene.layers[0].clone();
        scene.layers.push(copy);
        let err = scene.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate layer name 'NBA Arenas'"));
    }

    #[test]
    fn validate_rejects_marker_off_globe() {
        let mut scene = basic_scene();
        if let Item::Marker(marker) = &mut scene.layers[0].items[0] {
            marker.at.lng = -200.0;
        }
        let err = scene.validate().unwrap_err();
        assert!(err.to_string().contains("longitude -200 out of range"));
    }

    #[test]
    fn validate_rejects_zero_popup_width() {
        let mut scene = basic_scene();
        if let Item::Marker(marker) = &mut scene.layers[0].items[0] {
            marker.popup = Some(Popup {
                html: String::new(),
                max_width: 0,
            });
        }
        assert!(scene.validate().is_err());
    }

    #[test]
    fn validate_rejects_third_legend() {
        let mut scene = basic_scene();
        scene.legends = vec![
            Legend::divisions(),
            Legend::population(),
            Legend::divisions(),
        ];
        assert!(scene.validate().is_err());
    }

    #[test]
    fn divisions_legend_covers_every_marker_color() {
        let legend = Legend::divisions();
        for division in Division::ALL {
            assert!(
                legend.covers(division.color().css()),
                "{} missing",
                division.label()
            );
        }
    }

    #[test]
    fn population_legend_covers_every_bracket_fill() {
        let legend = Legend::population();
        for bracket in PopulationBracket::ALL {
            assert!(legend.covers(bracket.fill()), "{} missing", bracket.label());
        }
    }

    #[test]
    fn legend_geometry_matches_fixed_panels() {
        let divisions = Legend::divisions();
        assert_eq!(divisions.anchor, LegendAnchor::BottomRight);
        assert_eq!((divisions.width_px, divisions.height_px), (220, 270));
        let population = Legend::population();
        assert_eq!(population.anchor, LegendAnchor::BottomLeft);
        assert_eq!((population.width_px, population.height_px), (175, 190));
    }
}
