//! Track-length derivations: per-capita and per-area normalization of the
//! headerless three-field source table.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use choro_model::RawCountryRecord;
use choro_resolve::{CodeOutcome, Resolver};

use crate::quantity::parse_quantity;
use crate::reference::ReferenceMap;
use crate::table::read_positional_rows;

/// Scale factor applied to km-per-person values to keep them legible.
pub const PER_CAPITA_SCALE: f64 = 1000.0;

/// One output row of a derivation run. The ISO field falls back to the raw
/// source code when numeric expansion fails, preserving it for downstream
/// inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedRow {
    pub country: String,
    pub iso: String,
    pub value: f64,
}

/// Result of a derivation over the whole table: the surviving rows plus the
/// original names of every skipped country.
#[derive(Debug, Default)]
pub struct Derivation {
    pub rows: Vec<DerivedRow>,
    pub unmatched: Vec<String>,
}

/// Reads the positional track table: country name, ISO code (numeric or
/// alpha), quantity string. Rows with fewer than three fields are ignored.
pub fn read_track_table(path: &Path) -> Result<Vec<RawCountryRecord>> {
    let rows = read_positional_rows(path)?;
    Ok(rows
        .into_iter()
        .filter(|row| row.len() >= 3)
        .map(|row| RawCountryRecord {
            name: row[0].clone(),
            iso_code: row[1].clone(),
            metric: row[2].clone(),
        })
        .collect())
}

/// Divides each track length by the matching reference value, scaling the
/// result. Rows with no reference match, a zero reference value, or an
/// unparseable track quantity are skipped and reported via `unmatched`.
pub fn derive_ratio(
    records: &[RawCountryRecord],
    reference: &ReferenceMap,
    resolver: &Resolver,
    scale: f64,
) -> Derivation {
    let mut derivation = Derivation::default();
    for record in records {
        let Some(track) = parse_quantity(&record.metric) else {
            derivation.unmatched.push(record.name.clone());
            continue;
        };
        let denominator = resolver
            .match_reference_key(&record.name, reference)
            .map(|(_, value, _)| *value);
        let Some(denominator) = denominator.filter(|v| *v != 0.0) else {
            derivation.unmatched.push(record.name.clone());
            continue;
        };
        let iso = match resolver.canonical_code(&record.iso_code) {
            CodeOutcome::Resolved(code) => code.to_string(),
            _ => record.iso_code.clone(),
        };
        derivation.rows.push(DerivedRow {
            country: record.name.clone(),
            iso,
            value: track / denominator * scale,
        });
    }
    info!(
        derived = derivation.rows.len(),
        unmatched = derivation.unmatched.len(),
        "derivation complete"
    );
    derivation
}

/// km of track per person, scaled by [`PER_CAPITA_SCALE`].
pub fn derive_per_capita(
    records: &[RawCountryRecord],
    population: &ReferenceMap,
    resolver: &Resolver,
) -> Derivation {
    derive_ratio(records, population, resolver, PER_CAPITA_SCALE)
}

/// km of track per km² of country area.
pub fn derive_per_area(
    records: &[RawCountryRecord],
    area: &ReferenceMap,
    resolver: &Resolver,
) -> Derivation {
    derive_ratio(records, area, resolver, 1.0)
}

#[cfg(test)]
mod tests {
    use choro_standards::{AliasTable, IsoRegistry};

    use super::*;

    fn record(name: &str, iso: &str, metric: &str) -> RawCountryRecord {
        RawCountryRecord {
            name: name.to_string(),
            iso_code: iso.to_string(),
            metric: metric.to_string(),
        }
    }

    #[test]
    fn per_capita_scales_and_expands_numeric_codes() {
        let registry = IsoRegistry::new();
        let aliases = AliasTable::new();
        let resolver = Resolver::new(&registry, &aliases);
        let population: ReferenceMap =
            [("france".to_string(), 68_000_000.0)].into_iter().collect();
        let records = vec![record("France", "250", "29,901")];
        let derived = derive_per_capita(&records, &population, &resolver);
        assert_eq!(derived.rows.len(), 1);
        let row = &derived.rows[0];
        assert_eq!(row.iso, "FRA");
        let expected = 29_901.0 / 68_000_000.0 * PER_CAPITA_SCALE;
        assert!((row.value - expected).abs() < 1e-12);
    }

    #[test]
    fn unknown_countries_are_reported_not_fatal() {
        let registry = IsoRegistry::new();
        let aliases = AliasTable::new();
        let resolver = Resolver::new(&registry, &aliases);
        let population: ReferenceMap =
            [("france".to_string(), 68_000_000.0)].into_iter().collect();
        let records = vec![
            record("France", "250", "120.5"),
            record("Unknownistan", "999", "10"),
        ];
        let derived = derive_per_capita(&records, &population, &resolver);
        assert_eq!(derived.rows.len(), 1);
        assert_eq!(derived.rows[0].iso, "FRA");
        assert_eq!(derived.unmatched, vec!["Unknownistan".to_string()]);
    }

    #[test]
    fn unexpandable_codes_keep_the_raw_field() {
        let registry = IsoRegistry::new();
        let aliases = AliasTable::new();
        let resolver = Resolver::new(&registry, &aliases);
        let area: ReferenceMap = [("ruritania".to_string(), 100.0)].into_iter().collect();
        let records = vec![record("Ruritania", "999", "50")];
        let derived = derive_per_area(&records, &area, &resolver);
        assert_eq!(derived.rows[0].iso, "999");
        assert_eq!(derived.rows[0].value, 0.5);
    }

    #[test]
    fn zero_reference_values_are_skipped() {
        let registry = IsoRegistry::new();
        let aliases = AliasTable::new();
        let resolver = Resolver::new(&registry, &aliases);
        let area: ReferenceMap = [("nowhere".to_string(), 0.0)].into_iter().collect();
        let records = vec![record("Nowhere", "", "50")];
        let derived = derive_per_area(&records, &area, &resolver);
        assert!(derived.rows.is_empty());
        assert_eq!(derived.unmatched, vec!["Nowhere".to_string()]);
    }
}
