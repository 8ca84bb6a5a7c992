//! choroplot command-line entry point.

use clap::Parser;

mod cli;
mod commands;
mod logging;
mod summary;

use crate::cli::{Cli, Command};
use crate::commands::{DeriveKind, run_derive, run_render};
use crate::logging::init_logging;
use crate::summary::{print_derive_summary, print_render_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    init_logging(cli.verbosity.tracing_level_filter());
    let exit_code = match cli.command {
        Command::Render(args) => match run_render(&args) {
            Ok(result) => {
                print_render_summary(&result);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::PerCapita(args) => match run_derive(&args, DeriveKind::PerCapita) {
            Ok(result) => {
                print_derive_summary(&result);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::PerArea(args) => match run_derive(&args, DeriveKind::PerArea) {
            Ok(result) => {
                print_derive_summary(&result);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}
