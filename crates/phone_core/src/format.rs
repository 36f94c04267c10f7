//! The external formatter seam.
//!
//! Format rule tables (which digits get which punctuation, per country) are
//! deliberately outside this crate. The pipeline talks to them through
//! [`NumberFormatter`] and treats every answer as advisory: a formatter that
//! is absent, declines, or fails simply leaves the raw text on screen.

use country_data::Iso2;

/// Rendering style for a formatted number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatStyle {
    /// Full international form, `+` and dial code included.
    #[default]
    International,
    /// National form, without the international dial code.
    National,
}

/// An external number formatter.
///
/// Implementations must be pure: same inputs, same output, no I/O. `number`
/// arrives in normalized wire form (an optional leading `+`, then digits
/// only); `None` means "no opinion" and keeps the field text unchanged.
pub trait NumberFormatter {
    fn format(&self, number: &str, country: Iso2, style: FormatStyle) -> Option<String>;
}
