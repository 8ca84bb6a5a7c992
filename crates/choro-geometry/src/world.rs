//! The world atlas: geometry features with normalized canonical codes.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use geojson::{FeatureCollection, GeoJson};
use tracing::{debug, info};

use choro_model::{ChoroError, Iso3, Result};
use choro_resolve::{normalize_name, select_iso_column};

/// Property names tried, in order, for a feature's display name.
const NAME_PROPERTIES: [&str; 4] = ["ADMIN", "NAME", "NAME_LONG", "name"];

/// One territory polygon with its derived canonical code.
///
/// `iso_a3` is `None` when the selected ISO column held a sentinel for this
/// feature; such territories are still rendered, with the missing fill.
#[derive(Debug, Clone)]
pub struct WorldFeature {
    pub iso_a3: Option<Iso3>,
    pub name: Option<String>,
    pub geometry: geojson::Geometry,
}

/// The parsed geometry dataset after ISO column selection.
#[derive(Debug)]
pub struct WorldAtlas {
    pub features: Vec<WorldFeature>,
    /// The property name the codes were taken from.
    pub iso_column: String,
}

fn property_as_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Collects property names in first-appearance order plus every string
/// sample per property. Order matters: it is the tie-break order for
/// column selection.
fn collect_columns(collection: &FeatureCollection) -> (Vec<String>, BTreeMap<String, Vec<String>>) {
    let mut order: Vec<String> = Vec::new();
    let mut samples: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for feature in &collection.features {
        let Some(properties) = &feature.properties else {
            continue;
        };
        for (key, value) in properties {
            if !samples.contains_key(key) {
                order.push(key.clone());
            }
            let entry = samples.entry(key.clone()).or_default();
            if let Some(text) = property_as_string(value) {
                entry.push(text);
            }
        }
    }
    (order, samples)
}

impl WorldAtlas {
    /// Builds the atlas from GeoJSON text: picks the ISO column by validity
    /// score, then normalizes each feature's code (sentinels become `None`).
    pub fn from_geojson(text: &str) -> Result<Self> {
        let geojson = GeoJson::from_str(text).map_err(|error| ChoroError::GeometryParse {
            message: error.to_string(),
        })?;
        let collection =
            FeatureCollection::try_from(geojson).map_err(|error| ChoroError::GeometryParse {
                message: error.to_string(),
            })?;

        let (columns, samples) = collect_columns(&collection);
        let Some(iso_column) = select_iso_column(&columns, &samples) else {
            return Err(ChoroError::NoGeometryIsoColumn {
                properties: columns,
            });
        };
        let iso_column = iso_column.to_string();
        debug!(column = %iso_column, "selected geometry ISO column");

        let mut features = Vec::with_capacity(collection.features.len());
        for feature in collection.features {
            let Some(geometry) = feature.geometry else {
                continue;
            };
            let properties = feature.properties.unwrap_or_default();
            let iso_a3 = properties
                .get(&iso_column)
                .and_then(property_as_string)
                .and_then(|code| Iso3::parse(&code));
            let name = NAME_PROPERTIES
                .iter()
                .find_map(|key| properties.get(*key).and_then(property_as_string));
            features.push(WorldFeature {
                iso_a3,
                name,
                geometry,
            });
        }
        info!(
            features = features.len(),
            column = %iso_column,
            "geometry dataset loaded"
        );
        Ok(Self {
            features,
            iso_column,
        })
    }

    /// Normalized feature names mapped to canonical codes, for name-based
    /// metric resolution against the geometry's own universe.
    pub fn name_keys(&self) -> BTreeMap<String, Iso3> {
        let mut keys = BTreeMap::new();
        for feature in &self.features {
            let (Some(name), Some(code)) = (&feature.name, feature.iso_a3) else {
                continue;
            };
            let key = normalize_name(name);
            if !key.is_empty() {
                keys.insert(key, code);
            }
        }
        keys
    }

    /// The set of canonical codes present in the geometry.
    pub fn code_set(&self) -> BTreeSet<Iso3> {
        self.features.iter().filter_map(|f| f.iso_a3).collect()
    }
}
