//! Metric table loading: canonical code per row plus numeric value.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use choro_model::{ChoroError, Iso3, LoadDiagnostics, MetricMap, Result};
use choro_resolve::{CodeOutcome, Resolver};

use crate::columns::resolve_columns;
use crate::quantity::parse_value;
use crate::table::CsvTable;

/// Loads a metric table into a canonical-code-keyed map.
///
/// An ISO column (explicit or detected) takes precedence over name-based
/// resolution. Without one, country names are resolved against
/// `geometry_names`, the geometry dataset's own normalized-name-to-code
/// map. A missing value column is fatal; every row-level failure is
/// counted and the row skipped.
pub fn load_metric_table(
    table: &CsvTable,
    country_col: Option<&str>,
    value_col: Option<&str>,
    iso_col: Option<&str>,
    resolver: &Resolver,
    geometry_names: &BTreeMap<String, Iso3>,
) -> Result<(MetricMap, LoadDiagnostics)> {
    let columns = resolve_columns(table, country_col, value_col, iso_col)?;
    let Some(value_idx) = columns.value else {
        return Err(ChoroError::NoValueColumn {
            available: table.headers.clone(),
        });
    };

    let mut diagnostics = LoadDiagnostics::default();
    let mut metric = MetricMap::new();

    for row in &table.rows {
        diagnostics.input_rows += 1;
        let code = match columns.iso {
            Some(iso_idx) => {
                let raw_code = table.cell(row, iso_idx);
                match resolver.canonical_code(raw_code) {
                    CodeOutcome::Resolved(code) => code,
                    CodeOutcome::NoMatch | CodeOutcome::NotACode => {
                        debug!(code = %raw_code, "ISO cell failed validation; row dropped");
                        // A code-shaped miss is terminal, but the row is
                        // reported by name when the table carries one.
                        let name = columns
                            .country
                            .map(|idx| table.cell(row, idx))
                            .filter(|name| !name.is_empty());
                        match name {
                            Some(name) => diagnostics.unresolved.push(name.to_string()),
                            None => diagnostics.dropped_codes += 1,
                        }
                        continue;
                    }
                }
            }
            None => {
                let Some(country_idx) = columns.country else {
                    return Err(ChoroError::NoCountryColumn {
                        available: table.headers.clone(),
                    });
                };
                let raw_name = table.cell(row, country_idx);
                match resolver.resolve(raw_name, "", geometry_names) {
                    Some(code) => code,
                    None => {
                        diagnostics.unresolved.push(raw_name.to_string());
                        continue;
                    }
                }
            }
        };

        let value = parse_value(table.cell(row, value_idx));
        if value.is_none() {
            diagnostics.missing_values += 1;
        }
        metric.insert(code, value);
    }

    if diagnostics.dropped_codes > 0 {
        warn!(
            dropped = diagnostics.dropped_codes,
            "rows with uninterpretable ISO codes were skipped"
        );
    }
    for name in &diagnostics.unresolved {
        warn!(country = %name, "could not resolve country to a canonical code");
    }
    if metric.is_empty() {
        return Err(ChoroError::NoUsableRecords);
    }
    info!(
        rows = diagnostics.input_rows,
        resolved = metric.len(),
        "metric table loaded"
    );
    Ok((metric, diagnostics))
}

#[cfg(test)]
mod tests {
    use choro_standards::{AliasTable, IsoRegistry};

    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> CsvTable {
        CsvTable {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    fn geometry_names() -> BTreeMap<String, Iso3> {
        [("france", "FRA"), ("germany", "DEU")]
            .into_iter()
            .map(|(name, code)| (name.to_string(), Iso3::parse(code).unwrap()))
            .collect()
    }

    #[test]
    fn iso_column_takes_precedence() {
        let registry = IsoRegistry::new();
        let aliases = AliasTable::new();
        let resolver = Resolver::new(&registry, &aliases);
        let table = table(
            &["country", "iso", "value"],
            &[
                &["not a real name", "FRA", "1.5"],
                &["Germany", "bogus", "2.0"],
            ],
        );
        let (metric, diag) =
            load_metric_table(&table, None, None, None, &resolver, &geometry_names()).unwrap();
        assert_eq!(metric.len(), 1);
        assert_eq!(metric[&Iso3::parse("FRA").unwrap()], Some(1.5));
        // The bad code is terminal but the row is reported by name.
        assert_eq!(diag.unresolved, vec!["Germany".to_string()]);
        assert_eq!(diag.dropped_codes, 0);
    }

    #[test]
    fn numeric_codes_expand_and_registry_misses_are_diagnosed() {
        let registry = IsoRegistry::new();
        let aliases = AliasTable::new();
        let resolver = Resolver::new(&registry, &aliases);
        let table = table(
            &["country", "iso", "value"],
            &[&["France", "250", "120.5"], &["Unknownistan", "999", "10"]],
        );
        let (metric, diag) =
            load_metric_table(&table, None, None, None, &resolver, &geometry_names()).unwrap();
        assert_eq!(metric.len(), 1);
        assert_eq!(metric[&Iso3::parse("FRA").unwrap()], Some(120.5));
        assert_eq!(diag.unresolved, vec!["Unknownistan".to_string()]);
    }

    #[test]
    fn names_resolve_against_geometry_keys() {
        let registry = IsoRegistry::new();
        let aliases = AliasTable::new();
        let resolver = Resolver::new(&registry, &aliases);
        let table = table(
            &["country", "value"],
            &[&["France", "120.5"], &["Atlantis", "10"]],
        );
        let (metric, diag) =
            load_metric_table(&table, None, None, None, &resolver, &geometry_names()).unwrap();
        assert_eq!(metric.len(), 1);
        assert!(metric.contains_key(&Iso3::parse("FRA").unwrap()));
        assert_eq!(diag.unresolved, vec!["Atlantis".to_string()]);
    }

    #[test]
    fn unparseable_values_become_gaps() {
        let registry = IsoRegistry::new();
        let aliases = AliasTable::new();
        let resolver = Resolver::new(&registry, &aliases);
        let table = table(&["iso", "value"], &[&["FRA", "oops"]]);
        let (metric, diag) =
            load_metric_table(&table, None, None, None, &resolver, &geometry_names()).unwrap();
        assert_eq!(metric[&Iso3::parse("FRA").unwrap()], None);
        assert_eq!(diag.missing_values, 1);
    }

    #[test]
    fn explicit_column_name_missing_from_table_is_fatal() {
        let registry = IsoRegistry::new();
        let aliases = AliasTable::new();
        let resolver = Resolver::new(&registry, &aliases);
        let table = table(&["country", "value"], &[&["France", "1"]]);
        let result = load_metric_table(
            &table,
            None,
            Some("valeu"),
            None,
            &resolver,
            &geometry_names(),
        );
        assert!(matches!(result, Err(ChoroError::MissingColumn { .. })));
    }

    #[test]
    fn missing_value_column_is_fatal() {
        let registry = IsoRegistry::new();
        let aliases = AliasTable::new();
        let resolver = Resolver::new(&registry, &aliases);
        let table = table(&["country", "amount"], &[&["France", "1"]]);
        let result =
            load_metric_table(&table, None, None, None, &resolver, &geometry_names());
        assert!(matches!(result, Err(ChoroError::NoValueColumn { .. })));
    }
}
