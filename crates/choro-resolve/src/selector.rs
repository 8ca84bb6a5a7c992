//! Geometry ISO column selection.
//!
//! Natural Earth exposes several differently named, differently populated
//! ISO-like columns across dataset versions, and some carry sentinel values
//! such as "-99". Scoring candidates by how many of their values look like
//! real alpha-3 codes is more robust than pinning a column name.

use std::collections::BTreeMap;

use tracing::debug;

use choro_model::Iso3;

/// Property names recognized as potential ISO alpha-3 columns, compared
/// case-insensitively.
pub const ISO_COLUMN_LABELS: [&str; 4] = ["iso_a3", "iso3", "iso", "adm0_a3"];

/// Number of sample values in a column that parse as valid alpha-3 codes.
/// Sentinels are rejected by `Iso3::parse`.
fn validity_score(samples: &[String]) -> usize {
    samples
        .iter()
        .filter(|value| Iso3::parse(value).is_some())
        .count()
}

/// Picks the column most likely to hold valid alpha-3 codes.
///
/// Candidates are the columns whose name matches a known ISO-like label;
/// the one with the most valid-looking sample values wins, ties broken by
/// first occurrence in `columns`. Returns `None` when there is no candidate
/// or the best candidate scores zero, which is a hard stop for the caller.
pub fn select_iso_column<'a>(
    columns: &'a [String],
    samples: &BTreeMap<String, Vec<String>>,
) -> Option<&'a str> {
    let mut best: Option<(&str, usize)> = None;
    for column in columns {
        let lower = column.to_lowercase();
        if !ISO_COLUMN_LABELS.contains(&lower.as_str()) {
            continue;
        }
        let score = samples.get(column).map_or(0, |values| validity_score(values));
        debug!(column = %column, score, "scored ISO column candidate");
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((column, score));
        }
    }
    match best {
        Some((column, score)) if score > 0 => Some(column),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(entries: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
        entries
            .iter()
            .map(|(name, values)| {
                (
                    name.to_string(),
                    values.iter().map(|v| v.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn prefers_column_with_fewest_sentinels() {
        let columns = vec!["ISO_A3".to_string(), "ADM0_A3".to_string()];
        let samples = samples(&[
            ("ISO_A3", &["-99", "-99", "FRA"][..]),
            ("ADM0_A3", &["FRA", "NOR", "ITA"][..]),
        ]);
        assert_eq!(select_iso_column(&columns, &samples), Some("ADM0_A3"));
    }

    #[test]
    fn ties_break_by_first_occurrence() {
        let columns = vec!["ADM0_A3".to_string(), "ISO_A3".to_string()];
        let samples = samples(&[
            ("ISO_A3", &["FRA", "NOR"][..]),
            ("ADM0_A3", &["ITA", "DEU"][..]),
        ]);
        assert_eq!(select_iso_column(&columns, &samples), Some("ADM0_A3"));
    }

    #[test]
    fn unrelated_columns_are_not_candidates() {
        let columns = vec!["NAME".to_string(), "POP_EST".to_string()];
        let samples = samples(&[("NAME", &["FRA"][..])]);
        assert_eq!(select_iso_column(&columns, &samples), None);
    }

    #[test]
    fn all_sentinel_candidates_mean_no_column() {
        let columns = vec!["ISO_A3".to_string()];
        let samples = samples(&[("ISO_A3", &["-99", "0", ""][..])]);
        assert_eq!(select_iso_column(&columns, &samples), None);
    }
}
