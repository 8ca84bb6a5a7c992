pub mod diagnostics;
pub mod error;
pub mod iso;
pub mod types;

pub use diagnostics::{LoadDiagnostics, MergeStats};
pub use error::{ChoroError, Result};
pub use iso::{Iso3, SENTINEL_CODES, is_sentinel};
pub use types::{MergedRow, MetricMap, RawCountryRecord, ValueRange};
