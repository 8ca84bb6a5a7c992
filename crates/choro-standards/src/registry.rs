//! Lookup indexes over the embedded ISO 3166-1 table.

use std::collections::BTreeMap;

use choro_model::Iso3;

use crate::iso3166::{COUNTRIES, CountryEntry};

/// Read-only ISO 3166-1 lookup registry.
///
/// Built once at startup and passed explicitly into resolver calls; safe to
/// share across pipeline invocations without locking.
#[derive(Debug)]
pub struct IsoRegistry {
    by_alpha2: BTreeMap<&'static str, &'static CountryEntry>,
    by_alpha3: BTreeMap<&'static str, &'static CountryEntry>,
    by_numeric: BTreeMap<&'static str, &'static CountryEntry>,
}

impl IsoRegistry {
    pub fn new() -> Self {
        let mut by_alpha2 = BTreeMap::new();
        let mut by_alpha3 = BTreeMap::new();
        let mut by_numeric = BTreeMap::new();
        for country in COUNTRIES {
            by_alpha2.insert(country.alpha2, country);
            by_alpha3.insert(country.alpha3, country);
            by_numeric.insert(country.numeric, country);
        }
        Self {
            by_alpha2,
            by_alpha3,
            by_numeric,
        }
    }

    /// Expands a two-letter code to its alpha-3 equivalent.
    pub fn alpha2_to_alpha3(&self, alpha2: &str) -> Option<Iso3> {
        let key = alpha2.trim().to_ascii_uppercase();
        self.by_alpha2
            .get(key.as_str())
            .and_then(|c| Iso3::parse(c.alpha3))
    }

    /// Looks up a numeric code. The input must already be zero-padded to
    /// three digits (see `Resolver`, which pads before calling).
    pub fn numeric_to_alpha3(&self, numeric: &str) -> Option<Iso3> {
        self.by_numeric
            .get(numeric.trim())
            .and_then(|c| Iso3::parse(c.alpha3))
    }

    /// Returns true when `code` is an assigned alpha-3 code.
    pub fn is_assigned(&self, code: Iso3) -> bool {
        self.by_alpha3.contains_key(code.as_str())
    }

    /// ISO short name for an assigned alpha-3 code.
    pub fn short_name(&self, code: Iso3) -> Option<&'static str> {
        self.by_alpha3.get(code.as_str()).map(|c| c.name)
    }

    pub fn len(&self) -> usize {
        self.by_alpha3.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_alpha3.is_empty()
    }
}

impl Default for IsoRegistry {
    fn default() -> Self {
        Self::new()
    }
}
