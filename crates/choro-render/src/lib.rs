pub mod color;
pub mod html;
pub mod merge;
pub mod png;
pub mod svg;

pub use color::{ColorMap, MISSING_COLOR, Rgb};
pub use html::{merged_feature_collection, write_interactive_map};
pub use merge::{Merged, merge};
pub use png::{apply_watermark, rasterize_svg, write_static_map};
pub use svg::{SvgOptions, render_svg};
