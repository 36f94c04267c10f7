//! # country_data
//!
//! Reference data for the phone input engine:
//! - [`Iso2`]: a compact, copyable two-letter country code
//! - [`CountryRecord`]: one country's dial-code entry (dial code, priority
//!   within a shared numbering plan, optional area codes)
//! - [`all`]: the builtin table covering every ITU-assigned dial code
//!
//! The builtin table is immutable and materialized once per process. Callers
//! narrow it with [`restrict`] / [`preferred`] before handing it to the
//! dial-code registry; the registry never reaches back into this crate.

mod records;

use std::fmt;
use std::sync::LazyLock;

/// Two-letter country code (ISO 3166-1 alpha-2), stored lowercase.
///
/// This is a lightweight, copyable handle; all comparisons are on the
/// canonical lowercase form, so `Iso2::new("GB") == Iso2::new("gb")`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iso2([u8; 2]);

impl Iso2 {
    /// Parse a two-letter code. Returns `None` unless the input is exactly
    /// two ASCII letters (either case).
    pub fn new(code: &str) -> Option<Self> {
        let bytes = code.as_bytes();
        match bytes {
            [a, b] if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => {
                Some(Self([a.to_ascii_lowercase(), b.to_ascii_lowercase()]))
            }
            _ => None,
        }
    }

    /// The canonical lowercase form.
    pub fn as_str(&self) -> &str {
        // SAFETY: construction only admits ASCII letters, lowercased.
        unsafe { std::str::from_utf8_unchecked(&self.0) }
    }
}

impl fmt::Display for Iso2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Iso2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iso2({})", self.as_str())
    }
}

/// One country's entry in the dial-code reference data.
///
/// `priority` ranks countries sharing one dial code (0 = the plan's main
/// country). `area_codes` are digit suffixes appended to `dial_code` that
/// narrow a shared plan to this one country; the list is empty for countries
/// that own their dial code outright.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountryRecord {
    pub iso2: Iso2,
    pub name: String,
    pub dial_code: String,
    pub priority: u8,
    pub area_codes: Vec<String>,
}

impl CountryRecord {
    /// Convenience constructor; returns `None` when `iso2` is not a valid
    /// two-letter code.
    pub fn new(
        iso2: &str,
        name: &str,
        dial_code: &str,
        priority: u8,
        area_codes: &[&str],
    ) -> Option<Self> {
        Some(Self {
            iso2: Iso2::new(iso2)?,
            name: name.to_string(),
            dial_code: dial_code.to_string(),
            priority,
            area_codes: area_codes.iter().map(|s| s.to_string()).collect(),
        })
    }
}

static COUNTRIES: LazyLock<Vec<CountryRecord>> = LazyLock::new(|| {
    records::RAW
        .iter()
        .map(|raw| {
            CountryRecord::new(raw.0, raw.1, raw.2, raw.3, raw.4)
                .expect("builtin country table contains an invalid iso2 code")
        })
        .collect()
});

/// The builtin country table, ordered by display name.
pub fn all() -> &'static [CountryRecord] {
    &COUNTRIES
}

/// Look up one builtin record by code.
pub fn find(iso2: Iso2) -> Option<&'static CountryRecord> {
    COUNTRIES.iter().find(|c| c.iso2 == iso2)
}

/// Keep only the countries named in `allowed`, preserving source order.
///
/// Unknown entries in `allowed` simply match nothing; an empty result is the
/// caller's configuration problem to surface.
pub fn restrict(countries: &[CountryRecord], allowed: &[Iso2]) -> Vec<CountryRecord> {
    countries
        .iter()
        .filter(|c| allowed.contains(&c.iso2))
        .cloned()
        .collect()
}

/// Resolve a caller-ordered pick list against `countries`, silently skipping
/// codes that match nothing (best-effort contract: a stale preferred list
/// must not take the whole field down).
pub fn preferred(countries: &[CountryRecord], picks: &[Iso2]) -> Vec<CountryRecord> {
    picks
        .iter()
        .filter_map(|iso2| countries.iter().find(|c| c.iso2 == *iso2))
        .cloned()
        .collect()
}
