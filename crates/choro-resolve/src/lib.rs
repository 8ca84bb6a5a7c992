pub mod normalize;
pub mod resolver;
pub mod selector;

pub use normalize::normalize_name;
pub use resolver::{CodeOutcome, MatchKind, Resolver};
pub use selector::{ISO_COLUMN_LABELS, select_iso_column};
