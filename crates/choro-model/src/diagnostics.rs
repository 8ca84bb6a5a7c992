//! Aggregate diagnostics carried past the row-processing boundary.
//!
//! Recoverable row-level failures are collected here and reported at the end
//! of a run; they never abort processing.

/// Outcome counters from loading a metric table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadDiagnostics {
    /// Rows read from the source table.
    pub input_rows: usize,
    /// Rows whose ISO code failed validation and that carried no country
    /// name to report under `unresolved`.
    pub dropped_codes: usize,
    /// Rows whose value cell could not be coerced to a number (kept as gaps).
    pub missing_values: usize,
    /// Original identifiers that could not be resolved to a canonical code.
    pub unresolved: Vec<String>,
}

impl LoadDiagnostics {
    /// Rows that produced a usable canonical code.
    pub fn resolved_rows(&self) -> usize {
        self.input_rows
            .saturating_sub(self.dropped_codes + self.unresolved.len())
    }
}

/// Coverage counters emitted by the merge stage so an operator can
/// sanity-check the join before inspecting the visual output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Entries in the metric map.
    pub metric_entries: usize,
    /// Geometry features in the world dataset.
    pub features: usize,
    /// Geometry features carrying a usable canonical code.
    pub coded_features: usize,
    /// Features that received a non-missing value from the join.
    pub matched: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_rows_never_underflows() {
        let diag = LoadDiagnostics {
            input_rows: 1,
            dropped_codes: 3,
            ..LoadDiagnostics::default()
        };
        assert_eq!(diag.resolved_rows(), 0);
    }
}
