//! Dial-code extraction from raw field text.
//!
//! The scan runs over the text as typed, so the returned prefix keeps every
//! space, bracket and dash the user (or a formatter) put between the digits.

use crate::registry::{DialCodeRegistry, MAX_KEY_DIGITS};

/// A dial-code prefix found at the start of field text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialCodeMatch<'a> {
    /// The raw prefix as it appears in the text, `+` and punctuation
    /// included, ending at the last digit of the matched key.
    pub raw: &'a str,
    /// The digits of the matched key, e.g. `"1670"`.
    pub digits: String,
}

/// Scan `number` for a registered dial-code prefix.
///
/// Only `+`-prefixed text is eligible; everything else yields `None`.
/// Digits are accumulated left to right, skipping punctuation, up to the
/// registry's longest key (never more than [`MAX_KEY_DIGITS`]). With
/// `include_area_codes` the longest registered key wins; without it the scan
/// stops at the first registered key, the bare dial code, which is the form
/// dial-code rewriting needs.
pub fn extract_dial_code<'a>(
    registry: &DialCodeRegistry,
    number: &'a str,
    include_area_codes: bool,
) -> Option<DialCodeMatch<'a>> {
    if !number.starts_with('+') {
        return None;
    }
    let cap = registry.max_key_len().min(MAX_KEY_DIGITS);
    let mut digits = String::with_capacity(cap);
    // (raw end, matched digit count) of the best candidate so far
    let mut best: Option<(usize, usize)> = None;
    for (i, c) in number.char_indices() {
        if !c.is_ascii_digit() {
            continue;
        }
        digits.push(c);
        if registry.is_key(&digits) {
            best = Some((i + c.len_utf8(), digits.len()));
            if !include_area_codes {
                break;
            }
        }
        if digits.len() == cap {
            break;
        }
    }
    match best {
        Some((end, matched)) => {
            digits.truncate(matched);
            Some(DialCodeMatch {
                raw: &number[..end],
                digits,
            })
        }
        None => None,
    }
}
