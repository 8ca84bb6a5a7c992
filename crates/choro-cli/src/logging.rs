//! Logging setup via `tracing` and `tracing-subscriber`.
//!
//! Level comes from the `-v`/`-q` flags; `RUST_LOG` overrides when set.
//! Output goes to stderr so the summary and diagnostics streams stay
//! separable.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_logging(level_filter: LevelFilter) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level_filter.to_string().to_lowercase();
        EnvFilter::new(format!(
            "warn,choro_cli={level},choro_geometry={level},choro_ingest={level},\
             choro_model={level},choro_render={level},choro_resolve={level},\
             choro_standards={level}",
        ))
    });
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();
    tracing_subscriber::registry().with(filter).with(layer).init();
}
