//! Normalized metric CSV output.

use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;
use tracing::info;

use crate::derive::DerivedRow;

/// Writes the normalized `country,country_ISO,value` CSV consumed by the
/// render stage. Values are formatted with twelve fixed decimals.
pub fn write_normalized_csv(path: &Path, rows: &[DerivedRow]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir: {}", parent.display()))?;
    }
    let mut writer =
        Writer::from_path(path).with_context(|| format!("open output: {}", path.display()))?;
    writer
        .write_record(["country", "country_ISO", "value"])
        .context("write header")?;
    for row in rows {
        writer
            .write_record([
                row.country.as_str(),
                row.iso.as_str(),
                &format!("{:.12}", row.value),
            ])
            .with_context(|| format!("write row for {}", row.country))?;
    }
    writer.flush().context("flush output")?;
    info!(path = %path.display(), rows = rows.len(), "normalized metric written");
    Ok(())
}
