//! Interactive choropleth document: a self-contained Leaflet page with the
//! merged GeoJSON embedded.

use std::path::Path;

use anyhow::{Context, Result};
use geojson::{Feature, FeatureCollection, JsonObject};
use tracing::info;

use choro_geometry::WorldAtlas;

use crate::color::{ColorMap, MISSING_COLOR};
use crate::merge::Merged;

/// Builds the merged feature collection: each feature carries its canonical
/// code, display name, metric value, and a precomputed fill color.
pub fn merged_feature_collection(
    world: &WorldAtlas,
    merged: &Merged,
    colormap: ColorMap,
) -> FeatureCollection {
    let mut features = Vec::with_capacity(world.features.len());
    for (feature, value) in world.features.iter().zip(&merged.per_feature) {
        let fill = match (value, merged.range) {
            (Some(v), Some(range)) => colormap.sample(range.normalize(*v)).to_hex(),
            _ => MISSING_COLOR.to_hex(),
        };
        let mut properties = JsonObject::new();
        properties.insert(
            "iso_a3".to_string(),
            match feature.iso_a3 {
                Some(code) => serde_json::Value::String(code.to_string()),
                None => serde_json::Value::Null,
            },
        );
        properties.insert(
            "name".to_string(),
            match &feature.name {
                Some(name) => serde_json::Value::String(name.clone()),
                None => serde_json::Value::Null,
            },
        );
        properties.insert(
            "value".to_string(),
            match value {
                Some(v) => serde_json::json!(v),
                None => serde_json::Value::Null,
            },
        );
        properties.insert("fill".to_string(), serde_json::Value::String(fill));
        features.push(Feature {
            bbox: None,
            geometry: Some(feature.geometry.clone()),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        });
    }
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Writes the interactive HTML map.
pub fn write_interactive_map(
    world: &WorldAtlas,
    merged: &Merged,
    value_label: &str,
    colormap: ColorMap,
    out_html: &Path,
) -> Result<()> {
    let collection = merged_feature_collection(world, merged, colormap);
    let geojson_text = serde_json::to_string(&collection).context("serialize merged geojson")?;
    let legend = match merged.range {
        Some(range) => format!(
            "<div class=\"legend\"><b>{label}</b><br/>{min:.4} &ndash; {max:.4}</div>",
            label = html_escape(value_label),
            min = range.min,
            max = range.max,
        ),
        None => String::new(),
    };
    let document = format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8"/>
<title>{title}</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css"/>
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>
  html, body, #map {{ height: 100%; margin: 0; }}
  .legend {{ position: absolute; bottom: 20px; right: 20px; z-index: 1000;
            background: rgba(255,255,255,0.9); padding: 8px 12px;
            font: 13px sans-serif; border-radius: 4px; }}
</style>
</head>
<body>
<div id="map"></div>
{legend}
<script>
var map = L.map('map').setView([10, 0], 2);
L.tileLayer('https://{{s}}.basemaps.cartocdn.com/light_all/{{z}}/{{x}}/{{y}}.png', {{
  attribution: '&copy; OpenStreetMap contributors &copy; CARTO'
}}).addTo(map);
var merged = {geojson_text};
L.geoJSON(merged, {{
  style: function (feature) {{
    return {{
      fillColor: feature.properties.fill,
      fillOpacity: 0.8,
      color: '#999',
      weight: 0.5
    }};
  }},
  onEachFeature: function (feature, layer) {{
    var name = feature.properties.name || feature.properties.iso_a3 || 'unknown';
    var value = feature.properties.value;
    layer.bindTooltip(name + ': ' + (value === null ? 'no data' : value));
  }}
}}).addTo(map);
</script>
</body>
</html>
"#,
        title = html_escape(value_label),
    );
    if let Some(parent) = out_html.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir: {}", parent.display()))?;
    }
    std::fs::write(out_html, document)
        .with_context(|| format!("write html: {}", out_html.display()))?;
    info!(path = %out_html.display(), "interactive map written");
    Ok(())
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use choro_model::{Iso3, MetricMap};

    use crate::merge::merge;

    use super::*;

    fn world() -> WorldAtlas {
        WorldAtlas::from_geojson(
            r#"{
                "type": "FeatureCollection",
                "features": [
                    {
                        "type": "Feature",
                        "properties": {"ADMIN": "France", "ISO_A3": "FRA"},
                        "geometry": {"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]]}
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn merged_features_carry_value_and_fill() {
        let metric: MetricMap = [(Iso3::parse("FRA").unwrap(), Some(2.5))]
            .into_iter()
            .collect();
        let world = world();
        let merged = merge(&metric, &world);
        let collection = merged_feature_collection(&world, &merged, ColorMap::YlOrRd);
        assert_eq!(collection.features.len(), 1);
        let properties = collection.features[0].properties.as_ref().unwrap();
        assert_eq!(properties["iso_a3"], "FRA");
        assert_eq!(properties["value"], 2.5);
        assert!(properties["fill"].as_str().unwrap().starts_with('#'));
    }

    #[test]
    fn document_embeds_geojson_and_legend() {
        let metric: MetricMap = [(Iso3::parse("FRA").unwrap(), Some(2.5))]
            .into_iter()
            .collect();
        let world = world();
        let merged = merge(&metric, &world);
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("map.html");
        write_interactive_map(&world, &merged, "value", ColorMap::YlOrRd, &out).unwrap();
        let content = std::fs::read_to_string(&out).unwrap();
        assert!(content.contains("FeatureCollection"));
        assert!(content.contains("legend"));
        assert!(content.contains("leaflet"));
    }
}
