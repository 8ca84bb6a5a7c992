//! Canonical ISO 3166-1 alpha-3 country key.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel strings used by geometry providers for "no code assigned".
pub const SENTINEL_CODES: [&str; 2] = ["-99", "0"];

/// Returns true for placeholder values that must never be treated as codes.
pub fn is_sentinel(value: &str) -> bool {
    SENTINEL_CODES.contains(&value.trim())
}

/// An ISO 3166-1 alpha-3 code, the pipeline's single country identity key.
///
/// Construction goes through [`Iso3::parse`], so a value of this type is
/// always exactly three uppercase ASCII letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iso3([u8; 3]);

impl Iso3 {
    /// Parses a raw string as an alpha-3 code: exactly three ASCII letters,
    /// uppercased. Sentinels and anything else yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if is_sentinel(trimmed) {
            return None;
        }
        let bytes = trimmed.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return None;
        }
        Some(Self([
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_uppercase(),
            bytes[2].to_ascii_uppercase(),
        ]))
    }

    pub fn as_str(&self) -> &str {
        // Always valid: constructed from ASCII letters only.
        std::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl fmt::Display for Iso3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Iso3 {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("not an alpha-3 code: {value:?}"))
    }
}

impl From<Iso3> for String {
    fn from(code: Iso3) -> Self {
        code.as_str().to_string()
    }
}
