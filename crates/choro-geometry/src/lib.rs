pub mod fetch;
pub mod world;

pub use fetch::{NATURAL_EARTH_URL, load_world};
pub use world::{WorldAtlas, WorldFeature};
