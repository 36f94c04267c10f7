//! Dial-code registry: the prefix table behind extraction and resolution.
//!
//! Built once from the active country list and read-only afterwards. Keys
//! are pure digit strings: each country's dial code, plus one key per area
//! code (dial code + suffix). A key maps to a priority-indexed candidate
//! list; slot 0 is the numbering plan's main country. Lists are sparse
//! because a restricted country subset can leave any slot empty, including
//! slot 0.
//!
//! Contract:
//! - construction is O(countries + area codes) and never runs per keystroke
//! - malformed records fail the build; lookups themselves are infallible

use std::collections::HashMap;

use country_data::{CountryRecord, Iso2};

use crate::error::ConfigError;

/// Keys never exceed this many digits; the extractor stops scanning there.
pub const MAX_KEY_DIGITS: usize = 4;

#[derive(Debug)]
pub struct DialCodeRegistry {
    slots: HashMap<String, Vec<Option<Iso2>>>,
    max_key_len: usize,
}

impl DialCodeRegistry {
    pub fn build(countries: &[CountryRecord]) -> Result<Self, ConfigError> {
        if countries.is_empty() {
            return Err(ConfigError::NoActiveCountries);
        }
        let mut registry = Self {
            slots: HashMap::new(),
            max_key_len: 0,
        };
        for country in countries {
            if country.dial_code.is_empty() {
                return Err(ConfigError::MissingDialCode { iso2: country.iso2 });
            }
            if !country.dial_code.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ConfigError::InvalidDialCode {
                    iso2: country.iso2,
                    dial_code: country.dial_code.clone(),
                });
            }
            registry.claim(country.dial_code.clone(), country.priority, country.iso2)?;
            for area in &country.area_codes {
                // Area-code keys pin a shared plan to one country, so they
                // always claim slot 0.
                let key = format!("{}{}", country.dial_code, area);
                registry.claim(key, 0, country.iso2)?;
            }
        }
        log::debug!(
            target: "phone.registry",
            "built dial-code table: {} keys, longest {}",
            registry.slots.len(),
            registry.max_key_len
        );
        Ok(registry)
    }

    fn claim(&mut self, key: String, priority: u8, iso2: Iso2) -> Result<(), ConfigError> {
        if key.len() > MAX_KEY_DIGITS {
            return Err(ConfigError::OverlongKey { iso2, key });
        }
        let list = self.slots.entry(key.clone()).or_default();
        let slot = priority as usize;
        if list.len() <= slot {
            list.resize(slot + 1, None);
        }
        if let Some(first) = list[slot] {
            return Err(ConfigError::DuplicatePriority {
                key,
                priority,
                first,
                second: iso2,
            });
        }
        list[slot] = Some(iso2);
        self.max_key_len = self.max_key_len.max(key.len());
        Ok(())
    }

    /// Whether `key` is a registered dial-code (or area-code) key.
    #[inline]
    pub fn is_key(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    /// Exact-key candidate list in priority order. Sparse: empty slots are
    /// `None`.
    pub fn candidates(&self, key: &str) -> Option<&[Option<Iso2>]> {
        self.slots.get(key).map(Vec::as_slice)
    }

    /// First country present in a key's candidate list, skipping slots a
    /// restricted subset left empty.
    pub fn first_candidate(&self, key: &str) -> Option<Iso2> {
        self.slots.get(key)?.iter().flatten().next().copied()
    }

    /// Longest registered key, in digits. The extractor uses this to stop
    /// scanning early when the active list only has short codes.
    #[inline]
    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }
}
