use std::path::PathBuf;

use thiserror::Error;

/// Fatal pipeline errors. Row-level problems (unparseable values, unresolved
/// country names) are never represented here; they are counted and reported
/// through [`crate::diagnostics`] instead.
#[derive(Debug, Error)]
pub enum ChoroError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("no usable value column found; available columns: {}", available.join(", "))]
    NoValueColumn { available: Vec<String> },

    #[error("requested column {requested:?} not found; available columns: {}", available.join(", "))]
    MissingColumn {
        requested: String,
        available: Vec<String>,
    },

    #[error("no usable country or ISO column found; available columns: {}", available.join(", "))]
    NoCountryColumn { available: Vec<String> },

    #[error("no ISO3-like column found in geometry dataset; properties: {}", properties.join(", "))]
    NoGeometryIsoColumn { properties: Vec<String> },

    #[error("failed to fetch geometry dataset from {url}: {message}")]
    GeometryFetch { url: String, message: String },

    #[error("failed to parse geometry dataset: {message}")]
    GeometryParse { message: String },

    #[error("no usable records remain after resolution")]
    NoUsableRecords,
}

impl ChoroError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ChoroError>;
