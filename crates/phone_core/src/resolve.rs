//! Country resolution: which country should the current text select?
//!
//! Pure decision logic over the registry; the pipeline owns the selection
//! state and applies the returned [`Resolution`].

use country_data::Iso2;

use crate::extract;
use crate::registry::DialCodeRegistry;
use crate::text;

/// The North American Numbering Plan's shared dial code.
const NANP_DIAL_CODE: &str = "1";

/// Digit count from which a bare NANP match means the user has typed an
/// area code the table does not know.
const NANP_AREA_DIGITS: usize = 4;

/// Outcome of one resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Switch the selection to this country.
    Select(Iso2),
    /// Recognizably international, but no registered dial code: drop the
    /// selection entirely.
    Clear,
    /// Leave the selection alone.
    Keep,
}

/// Decide what `number` means for the country selection.
///
/// Policy, in order:
/// 1. `allow_update = false` short-circuits to [`Resolution::Keep`]: the
///    caller wants a formatting-only pass through the same code path.
/// 2. Empty text or a lone `+` selects the default country, whatever was
///    selected before.
/// 3. A `+` followed by digits that match no registered prefix clears the
///    selection; plusless text never changes it.
/// 4. A matched prefix keeps the current selection when it is among the
///    key's candidates, except for the NANP escape: a bare `"1"` match on a
///    number with four or more digits means an unknown area code, which
///    re-resolves to the key's first candidate.
pub fn resolve_country(
    registry: &DialCodeRegistry,
    number: &str,
    selected: Option<Iso2>,
    default_country: Iso2,
    allow_update: bool,
) -> Resolution {
    if !allow_update {
        return Resolution::Keep;
    }
    if number.is_empty() || number == "+" {
        return Resolution::Select(default_country);
    }
    let Some(found) = extract::extract_dial_code(registry, number, true) else {
        if number.starts_with('+') && text::count_digits(number) > 0 {
            log::trace!(target: "phone.resolve", "no dial code in {number:?}: clearing");
            return Resolution::Clear;
        }
        return Resolution::Keep;
    };

    let unknown_nanp =
        found.digits == NANP_DIAL_CODE && text::count_digits(number) >= NANP_AREA_DIGITS;
    let candidates = registry.candidates(&found.digits).unwrap_or(&[]);
    let already_selected = selected.is_some_and(|sel| candidates.contains(&Some(sel)));
    if already_selected && !unknown_nanp {
        return Resolution::Keep;
    }
    match registry.first_candidate(&found.digits) {
        Some(iso2) => {
            log::trace!(
                target: "phone.resolve",
                "key {:?} selects {iso2} (was {selected:?})",
                found.digits
            );
            Resolution::Select(iso2)
        }
        // a registered key always carries at least one candidate
        None => Resolution::Keep,
    }
}
