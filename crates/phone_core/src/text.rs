//! UTF-8 text utilities shared by the cursor tracker and the value pipeline.
//!
//! Field text is plain UTF-8; every offset handed around the crate is a byte
//! offset that must land on a character boundary. Callers at the API edge
//! (selection offsets from a UI layer) are not trusted and get clamped here
//! first.

use std::borrow::Cow;

use memchr::memchr2;

/// Clamp an arbitrary byte index to a valid UTF-8 character boundary.
///
/// Indices beyond the string clamp to `s.len()`; an index inside a
/// multi-byte character moves back to the start of that character.
///
/// # Examples
///
/// ```
/// use phone_core::clamp_to_char_boundary;
///
/// let s = "+7 №1"; // '№' is 3 bytes
/// assert_eq!(clamp_to_char_boundary(s, 3), 3);
/// assert_eq!(clamp_to_char_boundary(s, 4), 3); // mid '№' -> start of '№'
/// assert_eq!(clamp_to_char_boundary(s, 100), s.len());
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Find the previous character boundary before `i`, or 0 at the start.
pub fn prev_char_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    if i == 0 {
        return 0;
    }
    s[..i]
        .char_indices()
        .last()
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

/// Find the next character boundary after `i`, or `s.len()` at the end.
pub fn next_char_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    if i >= s.len() {
        return s.len();
    }
    let mut it = s[i..].char_indices();
    let _ = it.next(); // the character at `i`
    it.next().map(|(idx, _)| i + idx).unwrap_or(s.len())
}

/// Filter a string down to a single line (CR and LF removed).
///
/// Pasted text is the only multi-line source a phone field ever sees, so the
/// common case is clean input; that case borrows instead of allocating.
///
/// # Examples
///
/// ```
/// use phone_core::filter_single_line;
///
/// assert_eq!(filter_single_line("+44 7400 123456"), "+44 7400 123456");
/// assert_eq!(filter_single_line("+44\r\n7400"), "+447400");
/// ```
pub fn filter_single_line(s: &str) -> Cow<'_, str> {
    if memchr2(b'\r', b'\n', s.as_bytes()).is_none() {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| *c != '\r' && *c != '\n').collect())
}

/// Count the ASCII digits in `s`.
#[inline]
pub fn count_digits(s: &str) -> usize {
    s.bytes().filter(|b| b.is_ascii_digit()).count()
}

/// Reduce field text to the wire form handed to formatters: an optional
/// leading `+` followed by the digits only, all punctuation dropped.
///
/// # Examples
///
/// ```
/// use phone_core::normalized_number;
///
/// assert_eq!(normalized_number("+1 (702) 123-4567"), "+17021234567");
/// assert_eq!(normalized_number("0661 234 567"), "0661234567");
/// ```
pub fn normalized_number(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    if s.starts_with('+') {
        out.push('+');
    }
    out.extend(s.chars().filter(|c| c.is_ascii_digit()));
    out
}

/// Truncate `s` to at most `max` characters (not bytes), in place.
pub fn truncate_chars(s: &mut String, max: usize) {
    if let Some((idx, _)) = s.char_indices().nth(max) {
        s.truncate(idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_boundary_basic() {
        let s = "+7 №1";
        assert_eq!(clamp_to_char_boundary(s, 0), 0);
        assert_eq!(clamp_to_char_boundary(s, 3), 3);
        assert_eq!(clamp_to_char_boundary(s, 4), 3);
        assert_eq!(clamp_to_char_boundary(s, 5), 3);
        assert_eq!(clamp_to_char_boundary(s, 6), 6);
        assert_eq!(clamp_to_char_boundary(s, 100), s.len());
    }

    #[test]
    fn prev_boundary_basic() {
        let s = "+7 №1";
        assert_eq!(prev_char_boundary(s, 7), 6);
        assert_eq!(prev_char_boundary(s, 6), 3);
        assert_eq!(prev_char_boundary(s, 3), 2);
        assert_eq!(prev_char_boundary(s, 0), 0);
        // mid-character index first clamps back to the character start
        assert_eq!(prev_char_boundary(s, 5), 2);
    }

    #[test]
    fn next_boundary_basic() {
        let s = "+7 №1";
        assert_eq!(next_char_boundary(s, 0), 1);
        assert_eq!(next_char_boundary(s, 3), 6);
        assert_eq!(next_char_boundary(s, 4), 6); // mid '№' -> past '№'
        assert_eq!(next_char_boundary(s, 6), 7);
        assert_eq!(next_char_boundary(s, 7), 7);
    }

    #[test]
    fn single_line_filter_borrows_when_clean() {
        let clean = "+44 7400 123456";
        assert!(matches!(filter_single_line(clean), Cow::Borrowed(_)));
        assert_eq!(filter_single_line("+44\r\n7400"), "+447400");
        assert_eq!(filter_single_line("\n\r"), "");
    }

    #[test]
    fn digit_count_ignores_punctuation() {
        // Dial-code digits count too: "+1 (702) 123-4567" is 1 + 702 + 1234567.
        assert_eq!(count_digits("+1 (702) 123-4567"), 11);
        assert_eq!(count_digits("+1"), 1);
        assert_eq!(count_digits("+"), 0);
        assert_eq!(count_digits(""), 0);
    }

    #[test]
    fn normalized_number_keeps_leading_plus_only() {
        assert_eq!(normalized_number("+1 (702) 123-4567"), "+17021234567");
        assert_eq!(normalized_number("(0702) 123+456"), "0702123456");
        assert_eq!(normalized_number(""), "");
        assert_eq!(normalized_number("+"), "+");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        let mut s = "+7 №№№".to_string();
        truncate_chars(&mut s, 4);
        assert_eq!(s, "+7 №");
        let mut short = "+44".to_string();
        truncate_chars(&mut short, 10);
        assert_eq!(short, "+44");
    }
}
