//! Serializes a [`Scene`](crate::model::Scene) into a single HTML page.
//!
//! The page is a static template with three placeholders: the title, the
//! legend fragments, and the scene payload. A small bootstrap script walks
//! the payload and builds the Leaflet objects; everything data-dependent is
//! decided in Rust beforehand.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde_json::json;

use crate::{
    error::{MapfolioError, MapfolioResult},
    model::{Item, Layer, Legend, Scene},
    render::escape_html,
};

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>__TITLE__</title>
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css" crossorigin="anonymous">
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css" crossorigin="anonymous">
  <style>
    html, body { margin: 0; height: 100%; }
    #map { position: absolute; inset: 0; }
    .mapfolio-pin { text-shadow: 0 0 2px #fff; }
  </style>
</head>
<body>
<div id="map"></div>
__LEGENDS__
<script src="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js" crossorigin="anonymous"></script>
<script>
var SCENE = __SCENE__;

var mapOptions = { center: SCENE.view.center, zoom: SCENE.view.zoom };
if (SCENE.view.minZoom !== null) { mapOptions.minZoom = SCENE.view.minZoom; }
var map = L.map('map', mapOptions);

var tileOptions = {
  maxZoom: SCENE.tiles.maxZoom,
  attribution: SCENE.tiles.attribution
};
if (SCENE.tiles.subdomains) { tileOptions.subdomains = SCENE.tiles.subdomains; }
L.tileLayer(SCENE.tiles.url, tileOptions).addTo(map);

var overlays = {};
SCENE.layers.forEach(function (entry) {
  var group = L.featureGroup();
  entry.items.forEach(function (item) {
    if (item.kind === 'marker') {
      var marker = L.marker([item.lat, item.lng], {
        icon: L.divIcon({
          className: 'mapfolio-pin',
          html: '<i class="fa fa-map-marker fa-2x" style="color:' + item.color + '"></i>',
          iconSize: [24, 32],
          iconAnchor: [12, 28],
          popupAnchor: [0, -24]
        })
      });
      if (item.popup) {
        marker.bindPopup(item.popup.html, { maxWidth: item.popup.maxWidth });
      }
      group.addLayer(marker);
    } else if (item.kind === 'geojson') {
      group.addLayer(L.geoJSON(item.data, {
        style: function (feature) {
          return { fillColor: feature.properties.fillColor };
        }
      }));
    }
  });
  if (entry.show) { group.addTo(map); }
  overlays[entry.name] = group;
});

if (SCENE.layerControl) {
  L.control.layers(null, overlays).addTo(map);
}
</script>
</body>
</html>
"##;

/// Renders the full page. Validates the scene first, so an invalid scene
/// never reaches the artifact.
pub fn render_page(scene: &Scene) -> MapfolioResult<String> {
    scene.validate()?;
    let payload = serde_json::to_string(&scene_payload(scene))
        .map_err(|err| MapfolioError::data(format!("encoding scene payload: {err}")))?;
    // Keep '</' out of the inline script block.
    let payload = payload.replace("</", "<\\/");
    let legends = scene
        .legends
        .iter()
        .map(legend_fragment)
        .collect::<Vec<_>>()
        .join("\n");
    Ok(PAGE_TEMPLATE
        .replace("__TITLE__", &escape_html(&scene.title))
        .replace("__LEGENDS__", &legends)
        .replace("__SCENE__", &payload))
}

/// Writes the rendered page to `path`, creating parent directories.
#[tracing::instrument(skip(scene))]
pub fn write_html(scene: &Scene, path: &Path) -> MapfolioResult<()> {
    let page = render_page(scene)?;
    ensure_parent_dir(path)?;
    fs::write(path, &page).with_context(|| format!("writing '{}'", path.display()))?;
    tracing::info!(bytes = page.len(), "wrote scene");
    Ok(())
}

pub fn ensure_parent_dir(path: &Path) -> MapfolioResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

fn scene_payload(scene: &Scene) -> serde_json::Value {
    json!({
        "tiles": {
            "url": scene.tiles.url,
            "attribution": scene.tiles.attribution,
            "subdomains": scene.tiles.subdomains,
            "maxZoom": scene.tiles.max_zoom,
        },
        "view": {
            "center": [scene.viewport.center.lat, scene.viewport.center.lng],
            "zoom": scene.viewport.zoom,
            "minZoom": scene.viewport.min_zoom,
        },
        "layerControl": scene.layer_control,
        "layers": scene.layers.iter().map(layer_payload).collect::<Vec<_>>(),
    })
}

fn layer_payload(layer: &Layer) -> serde_json::Value {
    json!({
        "name": layer.name,
        "show": layer.show,
        "items": layer.items.iter().map(item_payload).collect::<Vec<_>>(),
    })
}

fn item_payload(item: &Item) -> serde_json::Value {
    match item {
        Item::Marker(marker) => json!({
            "kind": "marker",
            "lat": marker.at.lat,
            "lng": marker.at.lng,
            "color": marker.color.css(),
            "popup": marker.popup.as_ref().map(|popup| json!({
                "html": popup.html,
                "maxWidth": popup.max_width,
            })),
        }),
        Item::GeoJson(collection) => json!({
            "kind": "geojson",
            "data": collection,
        }),
    }
}

// Fixed panel overlaid on the map, one row per entry.
fn legend_fragment(legend: &Legend) -> String {
    let mut rows = String::new();
    for entry in &legend.entries {
        rows.push_str(&format!(
            "    &nbsp; {} &nbsp; <i class=\"{}\" style=\"color: {}\"></i><br><br>\n",
            escape_html(&entry.label),
            escape_html(&entry.icon),
            escape_html(&entry.color_css),
        ));
    }
    format!(
        r#"<div style="position: fixed; {anchor}; width: {width}px; height: {height}px;
border: 2px solid; z-index: 9999; font-size: {font}px;">
    <p style="text-align: center; margin-top: 5px; font-weight: bold">{title}</p>
{rows}</div>"#,
        anchor = legend.anchor.css(),
        width = legend.width_px,
        height = legend.height_px,
        font = legend.font_px,
        title = escape_html(&legend.title),
    )
}
