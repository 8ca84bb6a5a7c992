//! Layered country-identity resolution.
//!
//! The chain runs in a fixed order, first success wins:
//! raw alpha-3 passthrough, alpha-2 expansion, numeric expansion, exact
//! normalized-name match, alias lookup, substring fallback. A code of valid
//! shape that misses the registry is terminal: the name chain is only
//! consulted when no code shape applies.

use std::collections::BTreeMap;

use tracing::warn;

use choro_model::Iso3;
use choro_standards::{AliasTable, IsoRegistry};

use crate::normalize::normalize_name;

/// How a raw ISO code field was interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeOutcome {
    /// The code canonicalized to an alpha-3 value.
    Resolved(Iso3),
    /// The field looked like a code (alpha-2 or numeric) but the registry
    /// has no entry for it.
    NoMatch,
    /// The field is empty or not shaped like any known code form.
    NotACode,
}

/// Which step of the name chain produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Alias,
    /// Best-effort substring fallback; surfaced in diagnostics, never
    /// silently trusted.
    Substring,
}

/// Identity resolver over an immutable registry and alias table.
#[derive(Debug)]
pub struct Resolver<'a> {
    registry: &'a IsoRegistry,
    aliases: &'a AliasTable,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a IsoRegistry, aliases: &'a AliasTable) -> Self {
        Self { registry, aliases }
    }

    /// Canonicalizes a raw ISO code field without any reference lookup.
    ///
    /// Three alphabetic characters are accepted as already canonical;
    /// two-letter and numeric codes go through the registry. Numeric input
    /// is left-padded to three digits before lookup.
    pub fn canonical_code(&self, raw_iso: &str) -> CodeOutcome {
        let trimmed = raw_iso.trim();
        if let Some(code) = Iso3::parse(trimmed) {
            return CodeOutcome::Resolved(code);
        }
        if trimmed.len() == 2 && trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
            return match self.registry.alpha2_to_alpha3(trimmed) {
                Some(code) => CodeOutcome::Resolved(code),
                None => CodeOutcome::NoMatch,
            };
        }
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            let padded = format!("{trimmed:0>3}");
            return match self.registry.numeric_to_alpha3(&padded) {
                Some(code) => CodeOutcome::Resolved(code),
                None => CodeOutcome::NoMatch,
            };
        }
        CodeOutcome::NotACode
    }

    /// Runs the name chain against a reference key set: exact normalized
    /// match, then alias, then substring fallback.
    ///
    /// Reference keys must already be normalized. Iteration order is the
    /// map's sorted key order, which keeps the substring fallback
    /// deterministic for a given key set.
    pub fn match_reference_key<'k, V>(
        &self,
        raw_name: &str,
        reference: &'k BTreeMap<String, V>,
    ) -> Option<(&'k str, &'k V, MatchKind)> {
        let key = normalize_name(raw_name);
        if key.is_empty() {
            return None;
        }
        if let Some((found, value)) = reference.get_key_value(&key) {
            return Some((found, value, MatchKind::Exact));
        }
        if let Some(target) = self.aliases.get(&key)
            && let Some((found, value)) = reference.get_key_value(target)
        {
            return Some((found, value, MatchKind::Alias));
        }
        for (candidate, value) in reference {
            if candidate.is_empty() {
                continue;
            }
            if candidate.contains(&key) || key.contains(candidate.as_str()) {
                warn!(
                    input = %raw_name,
                    matched = %candidate,
                    "substring fallback match; review for correctness"
                );
                return Some((candidate, value, MatchKind::Substring));
            }
        }
        None
    }

    /// Full resolution of one record against a code-valued reference map
    /// (normalized geometry names to canonical codes).
    ///
    /// Returns `None` when the record stays unresolved; the caller records
    /// the raw name for diagnostic reporting and skips the row.
    pub fn resolve(
        &self,
        raw_name: &str,
        raw_iso: &str,
        reference: &BTreeMap<String, Iso3>,
    ) -> Option<Iso3> {
        match self.canonical_code(raw_iso) {
            CodeOutcome::Resolved(code) => return Some(code),
            CodeOutcome::NoMatch => return None,
            CodeOutcome::NotACode => {}
        }
        self.match_reference_key(raw_name, reference)
            .map(|(_, code, _)| *code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> BTreeMap<String, Iso3> {
        [
            ("france", "FRA"),
            ("germany", "DEU"),
            ("south korea", "KOR"),
            ("north korea", "PRK"),
            ("republic of the congo", "COG"),
        ]
        .into_iter()
        .map(|(name, code)| (name.to_string(), Iso3::parse(code).unwrap()))
        .collect()
    }

    #[test]
    fn alpha3_passes_through_uppercased() {
        let registry = IsoRegistry::new();
        let aliases = AliasTable::new();
        let resolver = Resolver::new(&registry, &aliases);
        // No reference lookup involved, even for codes the registry does
        // not know.
        assert_eq!(
            resolver.canonical_code("zzz"),
            CodeOutcome::Resolved(Iso3::parse("ZZZ").unwrap())
        );
    }

    #[test]
    fn numeric_and_alpha2_expand_via_registry() {
        let registry = IsoRegistry::new();
        let aliases = AliasTable::new();
        let resolver = Resolver::new(&registry, &aliases);
        assert_eq!(
            resolver.canonical_code("380"),
            CodeOutcome::Resolved(Iso3::parse("ITA").unwrap())
        );
        assert_eq!(
            resolver.canonical_code("84"),
            CodeOutcome::Resolved(Iso3::parse("BLZ").unwrap())
        );
        assert_eq!(
            resolver.canonical_code("fr"),
            CodeOutcome::Resolved(Iso3::parse("FRA").unwrap())
        );
        assert_eq!(resolver.canonical_code("999"), CodeOutcome::NoMatch);
        assert_eq!(resolver.canonical_code("xx"), CodeOutcome::NoMatch);
        assert_eq!(resolver.canonical_code(""), CodeOutcome::NotACode);
        assert_eq!(resolver.canonical_code("12ab"), CodeOutcome::NotACode);
    }

    #[test]
    fn name_chain_exact_then_alias_then_substring() {
        let registry = IsoRegistry::new();
        let aliases = AliasTable::new();
        let resolver = Resolver::new(&registry, &aliases);
        let reference = reference();

        let (_, code, kind) = resolver
            .match_reference_key("France", &reference)
            .unwrap();
        assert_eq!(code.as_str(), "FRA");
        assert_eq!(kind, MatchKind::Exact);

        let (_, code, kind) = resolver
            .match_reference_key("Congo", &reference)
            .unwrap();
        assert_eq!(code.as_str(), "COG");
        assert_eq!(kind, MatchKind::Alias);

        // "Korea" alone only reaches the substring step and picks the
        // first key in sorted order.
        let (key, code, kind) = resolver
            .match_reference_key("Korea", &reference)
            .unwrap();
        assert_eq!(key, "north korea");
        assert_eq!(code.as_str(), "PRK");
        assert_eq!(kind, MatchKind::Substring);

        assert!(resolver.match_reference_key("Atlantis", &reference).is_none());
    }

    #[test]
    fn shaped_code_miss_is_terminal() {
        let registry = IsoRegistry::new();
        let aliases = AliasTable::new();
        let resolver = Resolver::new(&registry, &aliases);
        let reference = reference();
        // "999" looks numeric but misses the registry; the matching name
        // is not consulted.
        assert!(resolver.resolve("France", "999", &reference).is_none());
        // An empty code falls through to the name chain.
        assert_eq!(
            resolver.resolve("France", "", &reference).unwrap().as_str(),
            "FRA"
        );
    }
}
