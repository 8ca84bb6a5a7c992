//! CLI argument definitions for choroplot.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "choroplot",
    version,
    about = "World choropleth maps from country-level CSV data",
    long_about = "Resolve country names and ISO codes from CSV data to canonical\n\
                  alpha-3 keys, merge onto Natural Earth geometry, and render\n\
                  static PNG and interactive HTML choropleth maps."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render choropleth maps from a country-level CSV.
    Render(RenderArgs),

    /// Normalize track lengths by population into the render-ready CSV.
    PerCapita(DeriveArgs),

    /// Normalize track lengths by country area into the render-ready CSV.
    PerArea(DeriveArgs),
}

#[derive(Parser)]
pub struct RenderArgs {
    /// Path to the country-level CSV file.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Country column name (auto-detected when omitted).
    #[arg(long = "country-col", value_name = "NAME")]
    pub country_col: Option<String>,

    /// ISO (alpha-3 or alpha-2) column name; preferred over names.
    #[arg(long = "iso-col", value_name = "NAME")]
    pub iso_col: Option<String>,

    /// Numeric value column to plot (auto-detected when omitted).
    #[arg(long = "value-col", value_name = "NAME")]
    pub value_col: Option<String>,

    /// Output path prefix, without extension.
    #[arg(long = "output-prefix", default_value = "outputs/choropleth")]
    pub output_prefix: String,

    /// Also generate an interactive HTML map.
    #[arg(long)]
    pub interactive: bool,

    /// Colormap for the static map (rdylgn, ylorrd).
    #[arg(long, value_name = "NAME")]
    pub colormap: Option<String>,

    /// Title template; use '{value_col}' to insert the column name.
    #[arg(long, value_name = "TEMPLATE")]
    pub title: Option<String>,

    /// Local GeoJSON geometry file (skips the Natural Earth download).
    #[arg(long, value_name = "PATH")]
    pub geometry: Option<PathBuf>,

    /// Watermark image overlaid centered on the PNG when the file exists.
    /// Relative paths (including the default) resolve against the current
    /// working directory.
    #[arg(long, default_value = "assets/watermark.png", value_name = "PATH")]
    pub watermark: PathBuf,
}

#[derive(Parser)]
pub struct DeriveArgs {
    /// Headerless track table: country, ISO code, track length.
    #[arg(value_name = "TRACK_CSV")]
    pub track: PathBuf,

    /// Reference table with Country and Population/Area columns.
    #[arg(value_name = "REFERENCE_CSV")]
    pub reference: PathBuf,

    /// Output path for the normalized metric CSV.
    #[arg(long, value_name = "PATH")]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
