//! The value pipeline: single entry point for every field mutation.
//!
//! Every way the field can change — typed character, backspace, delete,
//! cut, paste, programmatic set, country pick, mode switch, auto-detection
//! result — funnels through one sequence: splice the edit, resolve the
//! country, format, truncate, place the caret. Programmatic mutations run
//! the same sequence minus the caret.
//!
//! Invariants:
//! - `SelectionState` is only mutated here, never by callers
//! - the registry is built once per session and never rebuilt
//! - outputs are written back verbatim by the host; the session's own copy
//!   of the text tracks exactly what the host shows

use country_data::{CountryRecord, Iso2};

use crate::config::FieldConfig;
use crate::cursor::{CaretPlacement, CaretRequest};
use crate::error::{ConfigError, CountryNotFound};
use crate::event::{EditEvent, EditKind};
use crate::extract;
use crate::format::{FormatStyle, NumberFormatter};
use crate::registry::DialCodeRegistry;
use crate::resolve::{self, Resolution};
use crate::state::SelectionState;
use crate::text;

/// What one pipeline pass produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyOutcome {
    /// The new field text, ready to display.
    pub text: String,
    /// Caret byte offset into `text`; `None` for programmatic mutations,
    /// which have no live caret to preserve.
    pub cursor: Option<usize>,
    /// Whether the selected country changed during this pass.
    pub country_changed: bool,
}

/// One managed input field: active country table, selection, current text,
/// and the collaborators chosen at construction.
pub struct FieldSession {
    config: FieldConfig,
    active: Vec<CountryRecord>,
    registry: DialCodeRegistry,
    default_country: Iso2,
    selection: SelectionState,
    text: String,
    formatter: Option<Box<dyn NumberFormatter>>,
    caret: Box<dyn CaretPlacement>,
}

impl FieldSession {
    /// Build a session from reference data and configuration.
    ///
    /// The country list is narrowed by `only_countries` before the registry
    /// is built, so restriction errors (empty result, broken records,
    /// unknown default) surface here and not mid-keystroke. The new session
    /// starts empty with its initial selection already resolved.
    pub fn new(
        config: FieldConfig,
        countries: &[CountryRecord],
        formatter: Option<Box<dyn NumberFormatter>>,
        caret: Box<dyn CaretPlacement>,
    ) -> Result<Self, ConfigError> {
        let active = if config.only_countries.is_empty() {
            countries.to_vec()
        } else {
            country_data::restrict(countries, &config.only_countries)
        };
        let registry = DialCodeRegistry::build(&active)?;
        // The build above rejects an empty list, so `active[0]` exists.
        let default_country = match config.default_country {
            Some(iso2) => {
                if !active.iter().any(|c| c.iso2 == iso2) {
                    return Err(ConfigError::UnknownDefaultCountry { iso2 });
                }
                iso2
            }
            None => active[0].iso2,
        };
        let mut session = Self {
            config,
            active,
            registry,
            default_country,
            selection: SelectionState::default(),
            text: String::new(),
            formatter,
            caret,
        };
        // Initial selection follows the same policy as any later empty pass.
        session.update_selection("", true);
        Ok(session)
    }

    /// The current field text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The currently selected country, if any.
    pub fn selected_country(&self) -> Option<Iso2> {
        self.selection.country
    }

    /// Selection state including the user-override flag.
    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    /// The country an empty field resolves to.
    pub fn default_country(&self) -> Iso2 {
        self.default_country
    }

    pub fn national_mode(&self) -> bool {
        self.config.national_mode
    }

    /// The active country table (restricted or full), in source order.
    pub fn active_countries(&self) -> &[CountryRecord] {
        &self.active
    }

    /// The configured preferred countries resolved against the active
    /// table, in configured order; unknown entries are skipped.
    pub fn preferred_countries(&self) -> Vec<CountryRecord> {
        country_data::preferred(&self.active, &self.config.preferred_countries)
    }

    /// Apply one live edit. The single entry point for typed characters,
    /// deletions, cuts and pastes.
    pub fn apply(&mut self, event: &EditEvent) -> ApplyOutcome {
        let pre_text = event.text.as_str();
        let pre_end = text::clamp_to_char_boundary(pre_text, event.selection_end);
        let pre_start = text::clamp_to_char_boundary(pre_text, event.selection_start.min(pre_end));
        let (candidate, inserted) = splice(pre_text, pre_start, pre_end, &event.kind);
        let country_changed = self.update_selection(&candidate, true);
        let display = self.finish(&candidate);
        let cursor = self.caret.place(&CaretRequest {
            pre_text,
            pre_start,
            pre_end,
            post_text: &display,
            inserted,
        });
        log::trace!(
            target: "phone.pipeline",
            "{:?} -> {display:?} (caret {cursor})",
            event.kind
        );
        ApplyOutcome {
            text: display,
            cursor: Some(cursor),
            country_changed,
        }
    }

    /// Replace the field text programmatically.
    pub fn set_number(&mut self, number: &str) -> ApplyOutcome {
        let country_changed = self.update_selection(number, true);
        let display = self.finish(number);
        ApplyOutcome {
            text: display,
            cursor: None,
            country_changed,
        }
    }

    /// Explicit user pick of a country.
    ///
    /// In international mode the text's dial-code prefix is rewritten to
    /// the new country; in national mode the digits stay untouched and only
    /// formatting is recomputed. Either way the resolver runs with
    /// detection suppressed: the pick itself is the resolution.
    pub fn select_country(&mut self, iso2: Iso2) -> Result<ApplyOutcome, CountryNotFound> {
        let record = self
            .active
            .iter()
            .find(|c| c.iso2 == iso2)
            .ok_or(CountryNotFound(iso2))?;
        let dial_code = record.dial_code.clone();
        let country_changed = self.selection.country != Some(iso2);
        self.selection.country = Some(iso2);
        self.selection.user_override = true;
        log::debug!(target: "phone.pipeline", "user selected {iso2}");
        let candidate = if self.config.national_mode {
            self.text.clone()
        } else {
            self.rewrite_dial_code(&self.text, &dial_code)
        };
        self.update_selection(&candidate, false);
        let display = self.finish(&candidate);
        Ok(ApplyOutcome {
            text: display,
            cursor: None,
            country_changed,
        })
    }

    /// Toggle national mode and reformat the existing text.
    pub fn set_national_mode(&mut self, national_mode: bool) -> ApplyOutcome {
        self.config.national_mode = national_mode;
        let candidate = self.text.clone();
        let country_changed = self.update_selection(&candidate, true);
        let display = self.finish(&candidate);
        ApplyOutcome {
            text: display,
            cursor: None,
            country_changed,
        }
    }

    /// Fold in one auto-detection result.
    ///
    /// Ignored after an explicit user pick, and never allowed to override a
    /// country the typed text already implies; it always becomes the new
    /// default for future empty passes, and an empty field adopts it right
    /// away. `None` means nothing visible changed.
    pub fn apply_detected_country(&mut self, iso2: Iso2) -> Option<ApplyOutcome> {
        if self.selection.user_override {
            log::debug!(target: "phone.pipeline", "detected {iso2} ignored: user already chose");
            return None;
        }
        if !self.active.iter().any(|c| c.iso2 == iso2) {
            log::debug!(target: "phone.pipeline", "detected {iso2} ignored: not in active table");
            return None;
        }
        self.default_country = iso2;
        if !self.text.is_empty() {
            return None;
        }
        let country_changed = self.update_selection("", true);
        let display = self.finish("");
        Some(ApplyOutcome {
            text: display,
            cursor: None,
            country_changed,
        })
    }

    /// Run resolution for `number` and fold the outcome into the selection.
    /// Returns whether the selected country changed.
    fn update_selection(&mut self, number: &str, allow_update: bool) -> bool {
        let resolution = resolve::resolve_country(
            &self.registry,
            number,
            self.selection.country,
            self.default_country,
            allow_update,
        );
        let new = match resolution {
            Resolution::Select(iso2) => Some(iso2),
            Resolution::Clear => None,
            Resolution::Keep => return false,
        };
        if new == self.selection.country {
            return false;
        }
        log::debug!(
            target: "phone.pipeline",
            "selection {:?} -> {new:?} for {number:?}",
            self.selection.country
        );
        self.selection.country = new;
        true
    }

    /// Format, truncate, and store the candidate text. Returns the display
    /// text.
    fn finish(&mut self, candidate: &str) -> String {
        let mut display = self.render(candidate);
        if let Some(max) = self.config.max_length {
            text::truncate_chars(&mut display, max);
        }
        self.text = display.clone();
        display
    }

    /// Ask the formatter to render `candidate`; fall back to the raw text
    /// when there is no formatter, no selected country, or no opinion.
    fn render(&self, candidate: &str) -> String {
        let Some(country) = self.selection.country else {
            return candidate.to_string();
        };
        let Some(formatter) = self.formatter.as_deref() else {
            return candidate.to_string();
        };
        let style = if self.config.national_mode {
            FormatStyle::National
        } else {
            FormatStyle::International
        };
        match formatter.format(&text::normalized_number(candidate), country, style) {
            Some(display) => display,
            None => candidate.to_string(),
        }
    }

    /// Rewrite the text's dial-code prefix for a newly picked country:
    /// replace a recognized `+old` prefix, drop an unrecognizable one
    /// (there is no way to tell where it ends), prefix plusless digits, or
    /// seed an empty field.
    fn rewrite_dial_code(&self, current: &str, dial_code: &str) -> String {
        let prefix = format!("+{dial_code}");
        if current.starts_with('+') {
            match extract::extract_dial_code(&self.registry, current, false) {
                Some(found) => format!("{prefix}{}", &current[found.raw.len()..]),
                None => prefix,
            }
        } else if current.is_empty() {
            prefix
        } else {
            format!("{prefix}{current}")
        }
    }
}

/// Derive the candidate text for an edit. Returns the new text plus the
/// typed character when the edit was an insertion. Offsets must already be
/// clamped.
fn splice(text_before: &str, start: usize, end: usize, kind: &EditKind) -> (String, Option<char>) {
    match kind {
        EditKind::Insert(c) => {
            let mut buf = [0u8; 4];
            let inserted = c.encode_utf8(&mut buf);
            (spliced(text_before, start, end, inserted), Some(*c))
        }
        EditKind::Backspace => {
            let start = if start == end {
                text::prev_char_boundary(text_before, start)
            } else {
                start
            };
            (spliced(text_before, start, end, ""), None)
        }
        EditKind::DeleteForward => {
            let end = if start == end {
                text::next_char_boundary(text_before, end)
            } else {
                end
            };
            (spliced(text_before, start, end, ""), None)
        }
        EditKind::Cut => (spliced(text_before, start, end, ""), None),
        EditKind::Paste(raw) => {
            let clean = text::filter_single_line(raw);
            (spliced(text_before, start, end, &clean), None)
        }
    }
}

fn spliced(text_before: &str, start: usize, end: usize, insert: &str) -> String {
    let mut out = String::with_capacity(text_before.len() - (end - start) + insert.len());
    out.push_str(&text_before[..start]);
    out.push_str(insert);
    out.push_str(&text_before[end..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::DigitAnchoredCaret;

    fn iso2(code: &str) -> Iso2 {
        Iso2::new(code).unwrap()
    }

    fn countries() -> Vec<CountryRecord> {
        vec![
            CountryRecord::new("us", "United States", "1", 0, &[]).unwrap(),
            CountryRecord::new("ca", "Canada", "1", 1, &["416", "204"]).unwrap(),
            CountryRecord::new("gb", "United Kingdom", "44", 0, &[]).unwrap(),
            CountryRecord::new("de", "Germany", "49", 0, &[]).unwrap(),
        ]
    }

    fn intl_config() -> FieldConfig {
        FieldConfig {
            national_mode: false,
            ..FieldConfig::default()
        }
    }

    fn session(config: FieldConfig) -> FieldSession {
        FieldSession::new(config, &countries(), None, Box::new(DigitAnchoredCaret)).unwrap()
    }

    /// Space-groups digits in threes; drops the `+` in national style.
    struct GroupFormatter;

    impl NumberFormatter for GroupFormatter {
        fn format(&self, number: &str, _country: Iso2, style: FormatStyle) -> Option<String> {
            let digits = number.strip_prefix('+').unwrap_or(number);
            if digits.is_empty() {
                return None;
            }
            let mut out = String::new();
            if style == FormatStyle::International && number.starts_with('+') {
                out.push('+');
            }
            for (i, c) in digits.chars().enumerate() {
                if i > 0 && i % 3 == 0 {
                    out.push(' ');
                }
                out.push(c);
            }
            Some(out)
        }
    }

    fn formatted_session(config: FieldConfig) -> FieldSession {
        FieldSession::new(
            config,
            &countries(),
            Some(Box::new(GroupFormatter)),
            Box::new(DigitAnchoredCaret),
        )
        .unwrap()
    }

    /// Type `input` one character at a time, tracking text and caret the
    /// way a host would.
    fn type_through(session: &mut FieldSession, input: &str) -> ApplyOutcome {
        let mut outcome = ApplyOutcome {
            text: session.text().to_string(),
            cursor: Some(session.text().len()),
            country_changed: false,
        };
        for c in input.chars() {
            let caret = outcome.cursor.unwrap_or(outcome.text.len());
            let event = EditEvent::at_caret(&outcome.text, caret, EditKind::Insert(c));
            outcome = session.apply(&event);
        }
        outcome
    }

    #[test]
    fn new_session_selects_the_first_active_country() {
        let s = session(intl_config());
        assert_eq!(s.selected_country(), Some(iso2("us")));
        assert_eq!(s.default_country(), iso2("us"));
        assert_eq!(s.text(), "");
    }

    #[test]
    fn configured_default_country_wins() {
        let s = session(FieldConfig {
            default_country: Some(iso2("de")),
            ..intl_config()
        });
        assert_eq!(s.selected_country(), Some(iso2("de")));
    }

    #[test]
    fn unknown_default_country_fails_construction() {
        let err = FieldSession::new(
            FieldConfig {
                default_country: Some(iso2("fr")),
                ..intl_config()
            },
            &countries(),
            None,
            Box::new(DigitAnchoredCaret),
        )
        .err()
        .unwrap();
        assert_eq!(err, ConfigError::UnknownDefaultCountry { iso2: iso2("fr") });
    }

    #[test]
    fn restriction_narrows_the_table_before_building() {
        let s = session(FieldConfig {
            only_countries: vec![iso2("ca")],
            ..intl_config()
        });
        assert_eq!(s.active_countries().len(), 1);
        assert_eq!(s.selected_country(), Some(iso2("ca")));
        // Key "1" still resolves: Canada fills priority slot 1.
        let mut s = s;
        let out = s.set_number("+1 2");
        assert!(!out.country_changed);
        assert_eq!(s.selected_country(), Some(iso2("ca")));
    }

    #[test]
    fn restriction_matching_nothing_is_a_config_error() {
        let err = FieldSession::new(
            FieldConfig {
                only_countries: vec![iso2("zz")],
                ..intl_config()
            },
            &countries(),
            None,
            Box::new(DigitAnchoredCaret),
        )
        .err()
        .unwrap();
        assert_eq!(err, ConfigError::NoActiveCountries);
    }

    #[test]
    fn typing_a_dial_code_switches_the_country() {
        let mut s = session(intl_config());
        let out = type_through(&mut s, "+44 20");
        assert_eq!(out.text, "+44 20");
        assert_eq!(s.selected_country(), Some(iso2("gb")));
        assert_eq!(out.cursor, Some(6));
    }

    #[test]
    fn typing_an_unknown_dial_code_clears_the_selection() {
        let mut s = session(intl_config());
        let out = type_through(&mut s, "+9");
        assert!(out.country_changed);
        assert_eq!(s.selected_country(), None);
        // More unknown digits keep it cleared without another change.
        let out = type_through(&mut s, "9");
        assert!(!out.country_changed);
        // Deleting back to the bare plus restores the default.
        let event = EditEvent::at_caret("+99", 3, EditKind::Backspace);
        s.apply(&event);
        let event = EditEvent::at_caret("+9", 2, EditKind::Backspace);
        let out = s.apply(&event);
        assert!(out.country_changed);
        assert_eq!(s.selected_country(), Some(iso2("us")));
    }

    #[test]
    fn insert_replaces_the_selection() {
        let mut s = session(intl_config());
        s.set_number("+44 20");
        let event = EditEvent::over_selection("+44 20", 4, 6, EditKind::Insert('7'));
        let out = s.apply(&event);
        assert_eq!(out.text, "+44 7");
        assert_eq!(out.cursor, Some(5));
    }

    #[test]
    fn paste_is_reduced_to_a_single_line() {
        let mut s = session(intl_config());
        let event = EditEvent::at_caret("", 0, EditKind::Paste("+44\r\n20 7946".to_string()));
        let out = s.apply(&event);
        assert_eq!(out.text, "+4420 7946");
        assert_eq!(s.selected_country(), Some(iso2("gb")));
        assert_eq!(out.cursor, Some(out.text.len()));
    }

    #[test]
    fn cut_runs_resolution_like_any_other_edit() {
        let mut s = session(intl_config());
        s.set_number("+44 20");
        // Cut "44 20": only "+" remains, which re-selects the default.
        let event = EditEvent::over_selection("+44 20", 1, 6, EditKind::Cut);
        let out = s.apply(&event);
        assert_eq!(out.text, "+");
        assert!(out.country_changed);
        assert_eq!(s.selected_country(), Some(iso2("us")));
    }

    #[test]
    fn formatter_output_is_displayed_and_caret_follows_digits() {
        let mut s = formatted_session(intl_config());
        let out = type_through(&mut s, "+44207");
        // "+44207" normalized and grouped in threes.
        assert_eq!(out.text, "+442 07");
        assert_eq!(out.cursor, Some(out.text.len()));
    }

    #[test]
    fn formatter_is_skipped_without_a_selected_country() {
        let mut s = formatted_session(intl_config());
        let out = type_through(&mut s, "+99 1");
        assert_eq!(s.selected_country(), None);
        // Raw passthrough: no grouping.
        assert_eq!(out.text, "+99 1");
    }

    #[test]
    fn applying_the_own_output_again_is_idempotent() {
        let mut s = formatted_session(intl_config());
        let out = type_through(&mut s, "+16045551234");
        let again = s.set_number(&out.text);
        assert_eq!(again.text, out.text);
        assert!(!again.country_changed);
    }

    #[test]
    fn max_length_truncates_after_formatting() {
        let mut s = formatted_session(FieldConfig {
            max_length: Some(6),
            ..intl_config()
        });
        let out = type_through(&mut s, "+44207946");
        assert_eq!(out.text, "+442 0");
        assert_eq!(out.text.chars().count(), 6);
        assert_eq!(out.cursor, Some(6));
    }

    #[test]
    fn set_number_returns_no_cursor() {
        let mut s = session(intl_config());
        let out = s.set_number("+49 30 1234");
        assert_eq!(out.cursor, None);
        assert!(out.country_changed);
        assert_eq!(s.selected_country(), Some(iso2("de")));
        assert_eq!(s.text(), "+49 30 1234");
    }

    #[test]
    fn select_country_rewrites_the_dial_code_in_international_mode() {
        let mut s = session(intl_config());
        s.set_number("+1 416 555");
        let out = s.select_country(iso2("gb")).unwrap();
        assert_eq!(out.text, "+44 416 555");
        assert_eq!(out.cursor, None);
        assert!(out.country_changed);
        assert_eq!(s.selected_country(), Some(iso2("gb")));
        assert!(s.selection().user_override);
    }

    #[test]
    fn select_country_seeds_an_empty_international_field() {
        let mut s = session(intl_config());
        let out = s.select_country(iso2("de")).unwrap();
        assert_eq!(out.text, "+49");
    }

    #[test]
    fn select_country_replaces_an_unrecognizable_prefix_entirely() {
        let mut s = session(intl_config());
        s.set_number("+999 123");
        let out = s.select_country(iso2("gb")).unwrap();
        // No way to tell where "+999" ends, so the digits go too.
        assert_eq!(out.text, "+44");
    }

    #[test]
    fn select_country_prefixes_plusless_text_in_international_mode() {
        let mut s = session(intl_config());
        s.set_number("0161 496 0000");
        let out = s.select_country(iso2("gb")).unwrap();
        assert_eq!(out.text, "+440161 496 0000");
    }

    #[test]
    fn select_country_leaves_national_text_alone() {
        let mut s = session(FieldConfig::default());
        s.set_number("0161 496 0000");
        let out = s.select_country(iso2("gb")).unwrap();
        assert_eq!(out.text, "0161 496 0000");
        assert_eq!(s.selected_country(), Some(iso2("gb")));
    }

    #[test]
    fn select_country_rejects_unknown_codes() {
        let mut s = session(intl_config());
        assert_eq!(
            s.select_country(iso2("fr")).unwrap_err(),
            CountryNotFound(iso2("fr"))
        );
    }

    #[test]
    fn typing_a_dial_code_still_wins_over_a_user_pick() {
        let mut s = session(intl_config());
        s.select_country(iso2("gb")).unwrap();
        assert_eq!(s.text(), "+44");
        // Replace the whole text with a German number.
        let event = EditEvent::over_selection("+44", 0, 3, EditKind::Paste("+49 30".to_string()));
        let out = s.apply(&event);
        assert!(out.country_changed);
        assert_eq!(s.selected_country(), Some(iso2("de")));
    }

    #[test]
    fn mode_switch_reformats_the_existing_text() {
        let mut s = formatted_session(intl_config());
        s.set_number("+4420794");
        assert_eq!(s.text(), "+442 079 4");
        let out = s.set_national_mode(true);
        // National style drops the "+".
        assert_eq!(out.text, "442 079 4");
        assert_eq!(out.cursor, None);
    }

    #[test]
    fn detected_country_updates_an_empty_field() {
        let mut s = session(intl_config());
        let out = s.apply_detected_country(iso2("de")).unwrap();
        assert!(out.country_changed);
        assert_eq!(s.selected_country(), Some(iso2("de")));
        assert_eq!(s.default_country(), iso2("de"));
    }

    #[test]
    fn detected_country_never_overrides_typed_text() {
        let mut s = session(intl_config());
        type_through(&mut s, "+44 20");
        assert_eq!(s.apply_detected_country(iso2("de")), None);
        assert_eq!(s.selected_country(), Some(iso2("gb")));
        // It still becomes the default for the next empty pass.
        assert_eq!(s.default_country(), iso2("de"));
    }

    #[test]
    fn detected_country_is_ignored_after_a_user_pick() {
        let mut s = session(intl_config());
        s.select_country(iso2("gb")).unwrap();
        assert_eq!(s.apply_detected_country(iso2("de")), None);
        assert_eq!(s.selected_country(), Some(iso2("gb")));
        assert_eq!(s.default_country(), iso2("us"));
    }

    #[test]
    fn detected_country_outside_the_active_table_is_ignored() {
        let mut s = session(FieldConfig {
            only_countries: vec![iso2("us"), iso2("ca")],
            ..intl_config()
        });
        assert_eq!(s.apply_detected_country(iso2("gb")), None);
        assert_eq!(s.default_country(), iso2("us"));
    }

    #[test]
    fn preferred_countries_resolve_in_configured_order() {
        let s = session(FieldConfig {
            preferred_countries: vec![iso2("gb"), iso2("zz"), iso2("us")],
            ..intl_config()
        });
        let preferred = s.preferred_countries();
        assert_eq!(preferred.len(), 2);
        assert_eq!(preferred[0].iso2, iso2("gb"));
        assert_eq!(preferred[1].iso2, iso2("us"));
    }

    #[test]
    fn out_of_range_selection_offsets_are_clamped() {
        let mut s = session(intl_config());
        let event = EditEvent {
            text: "+44".to_string(),
            selection_start: 100,
            selection_end: 200,
            kind: EditKind::Insert('2'),
        };
        let out = s.apply(&event);
        assert_eq!(out.text, "+442");
        assert_eq!(out.cursor, Some(4));
    }
}
