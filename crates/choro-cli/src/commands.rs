//! Subcommand implementations.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

use choro_geometry::load_world;
use choro_ingest::{
    Derivation, derive_per_area, derive_per_capita, load_area_map, load_metric_table,
    load_population_map, read_csv_table, read_track_table, resolve_columns,
    write_normalized_csv,
};
use choro_model::{LoadDiagnostics, MergeStats, ValueRange};
use choro_render::{
    ColorMap, SvgOptions, merge, render_svg, write_interactive_map, write_static_map,
};
use choro_resolve::Resolver;
use choro_standards::{AliasTable, IsoRegistry};

use crate::cli::{DeriveArgs, RenderArgs};

/// Outcome of a render run, for the operator summary.
pub struct RenderResult {
    pub value_label: String,
    pub diagnostics: LoadDiagnostics,
    pub stats: MergeStats,
    pub range: Option<ValueRange>,
    pub png: String,
    pub html: Option<String>,
}

pub fn run_render(args: &RenderArgs) -> Result<RenderResult> {
    // An explicit colormap drives both outputs; otherwise each map keeps
    // its own conventional default.
    let chosen = match &args.colormap {
        Some(name) => match ColorMap::parse(name) {
            Some(map) => Some(map),
            None => bail!("unknown colormap {name:?} (supported: rdylgn, ylorrd)"),
        },
        None => None,
    };
    let static_colormap = chosen.unwrap_or(ColorMap::RdYlGn);
    let interactive_colormap = chosen.unwrap_or(ColorMap::YlOrRd);

    let table = read_csv_table(&args.csv)?;
    let world = load_world(args.geometry.as_deref())?;

    let registry = IsoRegistry::new();
    let aliases = AliasTable::new();
    let resolver = Resolver::new(&registry, &aliases);
    let geometry_names = world.name_keys();

    let (metric, diagnostics) = load_metric_table(
        &table,
        args.country_col.as_deref(),
        args.value_col.as_deref(),
        args.iso_col.as_deref(),
        &resolver,
        &geometry_names,
    )?;

    let columns = resolve_columns(
        &table,
        args.country_col.as_deref(),
        args.value_col.as_deref(),
        args.iso_col.as_deref(),
    )?;
    let value_label = columns
        .value
        .and_then(|idx| table.headers.get(idx).cloned())
        .unwrap_or_else(|| "value".to_string());

    let merged = merge(&metric, &world);
    info!(
        rows = diagnostics.input_rows,
        resolved = metric.len(),
        matched = merged.stats.matched,
        "pipeline coverage"
    );

    let options = SvgOptions {
        colormap: static_colormap,
        title: args.title.clone(),
        ..SvgOptions::default()
    };
    let svg = render_svg(&world, &merged, &value_label, &options);

    let png = format!("{}.png", args.output_prefix);
    write_static_map(&svg, Path::new(&png), Some(args.watermark.as_path()))?;

    let html = if args.interactive {
        let path = format!("{}.html", args.output_prefix);
        write_interactive_map(
            &world,
            &merged,
            &value_label,
            interactive_colormap,
            Path::new(&path),
        )?;
        Some(path)
    } else {
        None
    };

    Ok(RenderResult {
        value_label,
        diagnostics,
        stats: merged.stats,
        range: merged.range,
        png,
        html,
    })
}

/// Which reference attribute a derivation divides by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeriveKind {
    PerCapita,
    PerArea,
}

/// Outcome of a derivation run.
pub struct DeriveResult {
    pub derivation: Derivation,
    pub output: String,
}

pub fn run_derive(args: &DeriveArgs, kind: DeriveKind) -> Result<DeriveResult> {
    let records = read_track_table(&args.track)?;
    let registry = IsoRegistry::new();
    let aliases = AliasTable::new();
    let resolver = Resolver::new(&registry, &aliases);

    let derivation = match kind {
        DeriveKind::PerCapita => {
            let population = load_population_map(&args.reference)?;
            derive_per_capita(&records, &population, &resolver)
        }
        DeriveKind::PerArea => {
            let area = load_area_map(&args.reference)?;
            derive_per_area(&records, &area, &resolver)
        }
    };
    if derivation.rows.is_empty() {
        bail!(
            "no usable records derived from {} against {}",
            args.track.display(),
            args.reference.display()
        );
    }
    write_normalized_csv(&args.output, &derivation.rows)
        .with_context(|| format!("write {}", args.output.display()))?;

    Ok(DeriveResult {
        derivation,
        output: args.output.display().to_string(),
    })
}
