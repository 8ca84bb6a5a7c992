use std::collections::BTreeMap;

use crate::iso::Iso3;

/// One input row before any resolution has been attempted.
///
/// Immutable after read; the ISO field may be numeric, alpha-2, alpha-3, or
/// empty, exactly as it appeared in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCountryRecord {
    pub name: String,
    pub iso_code: String,
    pub metric: String,
}

/// Per-country metric keyed by canonical code.
///
/// A `None` value is a preserved gap (unparseable numeric cell), distinct
/// from the key being absent entirely.
pub type MetricMap = BTreeMap<Iso3, Option<f64>>;

/// Terminal output of the merge stage: one row per geometry feature that
/// carries a canonical code. `value: None` means no metric resolved to that
/// territory, which is a valid state, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRow {
    pub iso_a3: Iso3,
    pub value: Option<f64>,
}

/// Min/max over the non-missing merged values, used for color-scale
/// normalization. Absent when every value is missing; the renderer then
/// falls back to a flat missing-color fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Computes the range over the `Some` values of an iterator.
    pub fn of(values: impl Iterator<Item = f64>) -> Option<Self> {
        let mut range: Option<ValueRange> = None;
        for value in values {
            if !value.is_finite() {
                continue;
            }
            range = Some(match range {
                None => ValueRange {
                    min: value,
                    max: value,
                },
                Some(r) => ValueRange {
                    min: r.min.min(value),
                    max: r.max.max(value),
                },
            });
        }
        range
    }

    /// Position of `value` within the range, clamped to `0.0..=1.0`.
    /// A degenerate range (min == max) maps everything to the midpoint.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.5;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}
