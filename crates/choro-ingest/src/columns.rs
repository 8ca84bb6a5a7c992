//! Header auto-detection for metric tables.
//!
//! Pure functions over header lists; matching is case-insensitive against
//! fixed recognized label sets.

use choro_model::{ChoroError, Result};

use crate::table::CsvTable;

pub const COUNTRY_LABELS: [&str; 4] = ["country", "country_name", "name", "nation"];
pub const VALUE_LABELS: [&str; 4] = ["value", "val", "metric", "score"];
pub const ISO_LABELS: [&str; 7] = [
    "iso",
    "iso3",
    "iso_a3",
    "country_iso",
    "country_iso3",
    "country_iso_a3",
    "country_iso_code",
];

/// Detected or caller-supplied column positions for one metric table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetectedColumns {
    pub country: Option<usize>,
    pub value: Option<usize>,
    pub iso: Option<usize>,
}

fn first_match(headers: &[String], labels: &[&str]) -> Option<usize> {
    headers.iter().position(|header| {
        labels
            .iter()
            .any(|label| header.eq_ignore_ascii_case(label))
    })
}

/// Auto-detects country/value/ISO columns from the recognized header names.
pub fn auto_detect_columns(headers: &[String]) -> DetectedColumns {
    DetectedColumns {
        country: first_match(headers, &COUNTRY_LABELS),
        value: first_match(headers, &VALUE_LABELS),
        iso: first_match(headers, &ISO_LABELS),
    }
}

/// Combines explicit column names with auto-detection; explicit names win.
///
/// An explicit name that is not present in the table is a configuration
/// error: auto-detection never substitutes for a name the caller asked for
/// by mistake.
pub fn resolve_columns(
    table: &CsvTable,
    country: Option<&str>,
    value: Option<&str>,
    iso: Option<&str>,
) -> Result<DetectedColumns> {
    let detected = auto_detect_columns(&table.headers);
    Ok(DetectedColumns {
        country: explicit_or_detected(table, country, detected.country)?,
        value: explicit_or_detected(table, value, detected.value)?,
        iso: explicit_or_detected(table, iso, detected.iso)?,
    })
}

fn explicit_or_detected(
    table: &CsvTable,
    requested: Option<&str>,
    detected: Option<usize>,
) -> Result<Option<usize>> {
    let Some(name) = requested else {
        return Ok(detected);
    };
    match table.column_index(name) {
        Some(index) => Ok(Some(index)),
        None => Err(ChoroError::MissingColumn {
            requested: name.to_string(),
            available: table.headers.clone(),
        }),
    }
}
