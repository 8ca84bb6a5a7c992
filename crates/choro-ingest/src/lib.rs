pub mod columns;
pub mod derive;
pub mod metric;
pub mod quantity;
pub mod reference;
pub mod table;
pub mod writer;

pub use columns::{
    COUNTRY_LABELS, DetectedColumns, ISO_LABELS, VALUE_LABELS, auto_detect_columns,
    resolve_columns,
};
pub use derive::{
    Derivation, DerivedRow, PER_CAPITA_SCALE, derive_per_area, derive_per_capita,
    read_track_table,
};
pub use metric::load_metric_table;
pub use quantity::{parse_count, parse_quantity, parse_value};
pub use reference::{ReferenceMap, load_area_map, load_population_map};
pub use table::{CsvTable, read_csv_table, read_positional_rows};
pub use writer::write_normalized_csv;
