use std::fs;
use std::path::Path;

use anyhow::Context;
use serde_json::Value;

use crate::error::{MapfolioError, MapfolioResult};

/// GeoJSON feature collection. Geometry is carried opaquely; only
/// `properties` is inspected.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<Feature>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub properties: serde_json::Map<String, Value>,
    pub geometry: Value,
}

impl FeatureCollection {
    pub fn load(path: impl AsRef<Path>) -> MapfolioResult<FeatureCollection> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading geojson {}", path.display()))?;
        let collection = Self::from_json(&text)?;
        tracing::debug!(
            features = collection.features.len(),
            path = %path.display(),
            "loaded geojson"
        );
        Ok(collection)
    }

    pub fn from_json(text: &str) -> MapfolioResult<FeatureCollection> {
        // Boundary files in the wild often start with a UTF-8 BOM.
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        serde_json::from_str(text)
            .map_err(|err| MapfolioError::data(format!("invalid geojson: {err}")))
    }
}

impl Feature {
    pub fn name(&self) -> Option<&str> {
        self.properties.get("name").and_then(Value::as_str)
    }

    /// Numeric `population` property, if present and numeric.
    pub fn population(&self) -> Option<f64> {
        self.properties.get("population").and_then(Value::as_f64)
    }
}
