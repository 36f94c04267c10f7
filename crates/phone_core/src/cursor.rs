//! Caret tracking across reformats.
//!
//! A reformat rewrites punctuation wholesale, so the caret cannot survive as
//! a plain byte offset. It survives as a digit anchor instead: formatting
//! never adds or removes digits, so the number of digits to the right of the
//! caret is the same before and after the rewrite.
//!
//! Two strategies live behind [`CaretPlacement`]: the digit anchor, and a
//! trailing fallback for hosts that cannot position a caret precisely.
//! The pipeline picks one at construction and never switches.

use crate::text::{clamp_to_char_boundary, prev_char_boundary};

/// Everything a placement strategy may consult: the field and selection as
/// they were before the edit, the rendered text after it, and the typed
/// character when the edit was an insertion.
#[derive(Debug, Clone, Copy)]
pub struct CaretRequest<'a> {
    pub pre_text: &'a str,
    pub pre_start: usize,
    pub pre_end: usize,
    pub post_text: &'a str,
    /// `Some` for a typed character; `None` for delete, cut and paste.
    pub inserted: Option<char>,
}

pub trait CaretPlacement {
    /// Byte offset into `post_text` where the caret should land.
    ///
    /// The result is always a character boundary; the incoming selection
    /// offsets are clamped, not trusted.
    fn place(&self, request: &CaretRequest<'_>) -> usize;
}

/// Count the digits of `text` at or after `from`.
fn digits_on_right(text: &str, from: usize) -> usize {
    let from = clamp_to_char_boundary(text, from);
    text[from..].bytes().filter(|b| b.is_ascii_digit()).count()
}

/// Offset immediately left of the k-th digit counted from the end of
/// `text`. `k == 0` anchors at the end; fewer than `k` digits anchor at 0
/// (digits were truncated away).
fn anchor_for_digits_on_right(text: &str, k: usize) -> usize {
    if k == 0 {
        return text.len();
    }
    let mut remaining = k;
    for (i, b) in text.bytes().enumerate().rev() {
        if b.is_ascii_digit() {
            remaining -= 1;
            if remaining == 0 {
                return i;
            }
        }
    }
    0
}

/// The up-to-two characters immediately left of `at` in `text`.
fn left_context(text: &str, at: usize) -> &str {
    let end = clamp_to_char_boundary(text, at);
    let mut start = end;
    for _ in 0..2 {
        start = prev_char_boundary(text, start);
    }
    &text[start..end]
}

/// Walk left from `candidate` until the position rests immediately right of
/// a digit, or until the two characters ending there reproduce `context`
/// (what preceded the selection before the edit). 0 when nothing matches.
fn settle_after_removal(post_text: &str, candidate: usize, context: &str) -> usize {
    let mut at = clamp_to_char_boundary(post_text, candidate);
    while at > 0 {
        if post_text.as_bytes()[at - 1].is_ascii_digit() {
            return at;
        }
        if !context.is_empty() && post_text[..at].ends_with(context) {
            return at;
        }
        at = prev_char_boundary(post_text, at);
    }
    0
}

/// Precise placement: anchor the caret by the count of digits to its right.
///
/// For an insertion the anchor is used as-is. For a removal (backspace,
/// delete, cut, paste) the anchor is only a first guess, because punctuation
/// around the removal point may have been redistributed; the caret then
/// settles leftwards onto the nearest position that either rests right of a
/// digit or reproduces the characters that preceded the selection.
#[derive(Debug, Default, Clone, Copy)]
pub struct DigitAnchoredCaret;

impl CaretPlacement for DigitAnchoredCaret {
    fn place(&self, request: &CaretRequest<'_>) -> usize {
        let pre_end = clamp_to_char_boundary(request.pre_text, request.pre_end);
        let pre_start = clamp_to_char_boundary(request.pre_text, request.pre_start.min(pre_end));
        let on_right = digits_on_right(request.pre_text, pre_end);
        let candidate = anchor_for_digits_on_right(request.post_text, on_right);
        match request.inserted {
            Some(_) => candidate,
            None => {
                let context = left_context(request.pre_text, pre_start);
                settle_after_removal(request.post_text, candidate, context)
            }
        }
    }
}

/// Best-effort fallback: the caret always lands at the end of the field.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrailingCaret;

impl CaretPlacement for TrailingCaret {
    fn place(&self, request: &CaretRequest<'_>) -> usize {
        request.post_text.len()
    }
}
