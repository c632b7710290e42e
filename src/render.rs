use serde_json::Value;

use crate::{
    classify::{Division, PopulationBracket},
    error::{MapfolioError, MapfolioResult},
    geojson::FeatureCollection,
    model::{LatLng, Marker, Popup},
    table::Table,
};

pub const POPUP_MAX_WIDTH: u32 = 235;

/// Arena popup rendered from the fixed template. Field values are
/// HTML-escaped before substitution.
pub fn arena_popup(arena: &str, team: &str, capacity: &str, opened: &str) -> Popup {
    let html = format!(
        r#"<div style="text-align: center">
<h3 style="color: #4D9078">{arena}</h3>
<h4 style="color: #f78154">{team}</h4>
<h5 style="color: #666">Max Capacity of {capacity}</h5>
<h5 style="color: #666">Opened in {opened}</h5>
</div>"#,
        arena = escape_html(arena),
        team = escape_html(team),
        capacity = escape_html(capacity),
        opened = escape_html(opened),
    );
    Popup {
        html,
        max_width: POPUP_MAX_WIDTH,
    }
}

/// One marker per table row, in row order, colored by division.
pub fn arena_markers(table: &Table) -> MapfolioResult<Vec<Marker>> {
    let lat = table.column_f64("LAT")?;
    let lon = table.column_f64("LON")?;
    let team = table.column("TEAM")?;
    let arena = table.column("ARENA")?;
    let capacity = table.column("CAPACITY")?;
    let opened = table.column("OPENED")?;
    let division = table.column("DIVISION")?;

    let mut markers = Vec::with_capacity(table.len());
    for index in 0..table.len() {
        let color = division[index].parse::<Division>()?.color();
        markers.push(Marker {
            at: LatLng::new(lat[index], lon[index]),
            color,
            popup: Some(arena_popup(
                &arena[index],
                &team[index],
                &capacity[index],
                &opened[index],
            )),
        });
    }
    tracing::debug!(markers = markers.len(), "built arena markers");
    Ok(markers)
}

/// Copies the collection and stamps each feature's `fillColor` property
/// with the bracket fill for its population.
pub fn population_overlay(collection: &FeatureCollection) -> MapfolioResult<FeatureCollection> {
    let mut styled = collection.clone();
    for (index, feature) in styled.features.iter_mut().enumerate() {
        let population = feature.population().ok_or_else(|| {
            MapfolioError::data(format!(
                "feature {index} ('{}') has no numeric population property",
                feature.name().unwrap_or("unnamed")
            ))
        })?;
        let fill = PopulationBracket::classify(population).fill();
        feature
            .properties
            .insert("fillColor".to_owned(), Value::String(fill.to_owned()));
    }
    tracing::debug!(features = styled.features.len(), "styled population overlay");
    Ok(styled)
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
