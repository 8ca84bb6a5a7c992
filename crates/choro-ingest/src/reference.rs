//! Reference population/area tables keyed by normalized country name.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use tracing::info;

use choro_resolve::normalize_name;

use crate::quantity::{parse_count, parse_quantity};
use crate::table::read_csv_table;

const COUNTRY_HEADERS: [&str; 2] = ["Country", "country"];
const POPULATION_HEADERS: [&str; 2] = ["Population 2024", "Population"];
const AREA_HEADERS: [&str; 2] = ["Area (km2)", "Area"];

/// A reference attribute map: normalized country name to numeric value.
/// Built once per run, queried many times; rows with an unusable value are
/// simply absent.
pub type ReferenceMap = BTreeMap<String, f64>;

fn load_reference(
    path: &Path,
    value_headers: &[&str],
    parse: fn(&str) -> Option<f64>,
) -> Result<ReferenceMap> {
    let table = read_csv_table(path)?;
    let country_idx = COUNTRY_HEADERS
        .iter()
        .find_map(|name| table.column_index(name));
    let value_idx = value_headers
        .iter()
        .find_map(|name| table.column_index(name));
    let (Some(country_idx), Some(value_idx)) = (country_idx, value_idx) else {
        anyhow::bail!(
            "reference table {} lacks country/value headers (found: {})",
            path.display(),
            table.headers.join(", ")
        );
    };

    let mut map = ReferenceMap::new();
    for row in &table.rows {
        let name = normalize_name(table.cell(row, country_idx));
        if name.is_empty() {
            continue;
        }
        let Some(value) = parse(table.cell(row, value_idx)) else {
            continue;
        };
        map.insert(name, value);
    }
    info!(path = %path.display(), entries = map.len(), "reference table loaded");
    Ok(map)
}

/// Loads a population reference table (`Country` + `Population` columns,
/// integer values with thousands separators).
pub fn load_population_map(path: &Path) -> Result<ReferenceMap> {
    load_reference(path, &POPULATION_HEADERS, parse_count)
}

/// Loads an area reference table (`Country` + `Area` columns, values with
/// `K`/`M` suffixes or a leading `<`).
pub fn load_area_map(path: &Path) -> Result<ReferenceMap> {
    load_reference(path, &AREA_HEADERS, parse_quantity)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write");
        file
    }

    #[test]
    fn population_map_strips_separators() {
        let file = write_temp("Country,Population 2024\nFrance,\"68,170,000\"\nNowhere,n/a\n");
        let map = load_population_map(file.path()).unwrap();
        assert_eq!(map.get("france"), Some(&68_170_000.0));
        assert!(!map.contains_key("nowhere"));
    }

    #[test]
    fn area_map_understands_suffixes() {
        let file = write_temp("Country,Area (km2)\nFrance,551.7K\nMonaco,< 1\n");
        let map = load_area_map(file.path()).unwrap();
        assert_eq!(map.get("france"), Some(&551_700.0));
        assert_eq!(map.get("monaco"), Some(&1.0));
    }

    #[test]
    fn missing_headers_fail() {
        let file = write_temp("Nation,People\nFrance,1\n");
        assert!(load_population_map(file.path()).is_err());
    }
}
