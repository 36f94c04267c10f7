//! Error types for registry construction and country lookups.
//!
//! Bad reference data is a caller bug and fails fast at build time; nothing
//! here is produced by ordinary typing.

use country_data::Iso2;

/// Registry construction rejected the active country list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The active country list was empty (e.g. a restriction filter matched
    /// nothing).
    NoActiveCountries,
    /// A record carried no dial code at all.
    MissingDialCode { iso2: Iso2 },
    /// A dial code contained something other than ASCII digits.
    InvalidDialCode { iso2: Iso2, dial_code: String },
    /// A dial-code + area-code key exceeded the lookup cap.
    OverlongKey { iso2: Iso2, key: String },
    /// Two records claimed the same priority slot for one key.
    DuplicatePriority {
        key: String,
        priority: u8,
        first: Iso2,
        second: Iso2,
    },
    /// The configured default country is not in the active list.
    UnknownDefaultCountry { iso2: Iso2 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoActiveCountries => write!(f, "no active countries"),
            ConfigError::MissingDialCode { iso2 } => {
                write!(f, "country {iso2} has no dial code")
            }
            ConfigError::InvalidDialCode { iso2, dial_code } => {
                write!(f, "country {iso2} has non-numeric dial code {dial_code:?}")
            }
            ConfigError::OverlongKey { iso2, key } => {
                write!(f, "country {iso2} produces overlong dial-code key {key:?}")
            }
            ConfigError::DuplicatePriority {
                key,
                priority,
                first,
                second,
            } => {
                write!(
                    f,
                    "countries {first} and {second} both claim key {key:?} at priority {priority}"
                )
            }
            ConfigError::UnknownDefaultCountry { iso2 } => {
                write!(f, "default country {iso2} is not in the active list")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// An iso2 code was passed that is not in the active country list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryNotFound(pub Iso2);

impl std::fmt::Display for CountryNotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown country: {}", self.0)
    }
}

impl std::error::Error for CountryNotFound {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_records() {
        let us = Iso2::new("us").unwrap();
        let ca = Iso2::new("ca").unwrap();
        let err = ConfigError::DuplicatePriority {
            key: "1".to_string(),
            priority: 0,
            first: us,
            second: ca,
        };
        assert_eq!(
            err.to_string(),
            "countries us and ca both claim key \"1\" at priority 0"
        );
        assert_eq!(CountryNotFound(us).to_string(), "unknown country: us");
    }
}
