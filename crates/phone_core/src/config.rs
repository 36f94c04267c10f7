//! Per-field configuration.

use country_data::Iso2;

/// Behavior switches for one field session.
///
/// Construct with struct-update syntax over [`FieldConfig::default`]; every
/// field has a sensible zero-configuration value.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Hard cap on the rendered value, in characters (not bytes). Applied
    /// after formatting, so decorative suffixes are the first to go.
    pub max_length: Option<usize>,
    /// Country selected while the field is empty. `None` falls back to the
    /// first active country.
    pub default_country: Option<Iso2>,
    /// National mode: numbers are displayed and edited without their
    /// international dial code.
    pub national_mode: bool,
    /// Restrict the active table to exactly these countries. Empty means
    /// the full table.
    pub only_countries: Vec<Iso2>,
    /// Countries a host should pin to the top of its country list.
    pub preferred_countries: Vec<Iso2>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_length: None,
            default_country: None,
            // National entry is the common case for a field with a country
            // selector next to it.
            national_mode: true,
            only_countries: Vec::new(),
            preferred_countries: Vec::new(),
        }
    }
}
