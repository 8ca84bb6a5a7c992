//! Numeric coercion of free-form value cells.
//!
//! All parsers here are total: anything unusable becomes `None` (a
//! preserved gap), never zero.

use std::sync::LazyLock;

use regex::Regex;

static SUFFIXED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]*\.?[0-9]+)\s*([kKmM]?)$").expect("suffixed quantity pattern")
});

/// Plain numeric coercion for a metric value column. Accepts ordinary
/// float syntax after trimming; anything else is missing.
pub fn parse_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Quantity parser for reference tables with abbreviated magnitudes.
///
/// Accepts `K`/`M` thousand/million suffixes, a leading `<` (the bound is
/// dropped and the number taken as-is), comma and thin-space thousands
/// separators. Falls back to stripping every non-digit/non-dot character;
/// an empty or all-non-numeric result is missing.
pub fn parse_quantity(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return None;
    }
    let cleaned: String = trimmed
        .chars()
        .filter(|c| !matches!(c, ',' | '\u{202f}' | '\u{2009}'))
        .collect();
    let cleaned = cleaned.replace('<', "");
    let cleaned = cleaned.trim();

    if let Some(captures) = SUFFIXED.captures(cleaned) {
        let number: f64 = captures[1].parse().ok()?;
        let multiplier = match captures[2].to_ascii_uppercase().as_str() {
            "K" => 1_000.0,
            "M" => 1_000_000.0,
            _ => 1.0,
        };
        return Some(number * multiplier);
    }

    let digits: String = cleaned
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<f64>().ok()
}

/// Integer-style count parser (populations): strips every non-digit
/// character and parses what remains.
pub fn parse_count(raw: &str) -> Option<f64> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<f64>().ok()
}
