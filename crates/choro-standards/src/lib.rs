#![deny(unsafe_code)]

pub mod aliases;
pub mod iso3166;
pub mod registry;

pub use crate::aliases::AliasTable;
pub use crate::iso3166::{COUNTRIES, CountryEntry};
pub use crate::registry::IsoRegistry;
