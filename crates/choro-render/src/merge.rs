//! Left join of geometry features onto the metric map.

use tracing::info;

use choro_geometry::WorldAtlas;
use choro_model::{MergeStats, MergedRow, MetricMap, ValueRange};

/// Join output: geometry defines the universe of plottable territories.
#[derive(Debug)]
pub struct Merged {
    /// One row per geometry feature that carries a canonical code, in
    /// feature order. Metric entries with no matching feature are dropped.
    pub rows: Vec<MergedRow>,
    /// Value per geometry feature, aligned with `WorldAtlas::features`.
    /// `None` for missing metrics and for features without a code.
    pub per_feature: Vec<Option<f64>>,
    /// Range over the non-missing values; `None` means everything is
    /// missing and the renderer uses a flat missing fill.
    pub range: Option<ValueRange>,
    pub stats: MergeStats,
}

/// Merges metric values onto geometry by canonical code.
pub fn merge(metric: &MetricMap, world: &WorldAtlas) -> Merged {
    let mut rows = Vec::new();
    let mut per_feature = Vec::with_capacity(world.features.len());
    let mut stats = MergeStats {
        metric_entries: metric.len(),
        features: world.features.len(),
        ..MergeStats::default()
    };

    for feature in &world.features {
        let value = match feature.iso_a3 {
            Some(code) => {
                stats.coded_features += 1;
                let value = metric.get(&code).copied().flatten();
                rows.push(MergedRow {
                    iso_a3: code,
                    value,
                });
                value
            }
            None => None,
        };
        if value.is_some() {
            stats.matched += 1;
        }
        per_feature.push(value);
    }

    let range = ValueRange::of(per_feature.iter().filter_map(|v| *v));
    info!(
        metric_entries = stats.metric_entries,
        features = stats.features,
        matched = stats.matched,
        "merge complete"
    );
    Merged {
        rows,
        per_feature,
        range,
        stats,
    }
}
