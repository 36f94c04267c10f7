#![no_main]

use libfuzzer_sys::fuzz_target;
use phone_core::{DigitAnchoredCaret, EditEvent, EditKind, FieldConfig, FieldSession};

const MAX_CHARS: usize = 32;

fuzz_target!(|data: &[u8]| {
    let Some((&op, rest)) = data.split_first() else {
        return;
    };
    let Some((&start, rest)) = rest.split_first() else {
        return;
    };
    let Some((&end, rest)) = rest.split_first() else {
        return;
    };
    let text = String::from_utf8_lossy(rest).into_owned();

    let config = FieldConfig {
        national_mode: false,
        max_length: Some(MAX_CHARS),
        ..FieldConfig::default()
    };
    let Ok(mut session) = FieldSession::new(
        config,
        country_data::all(),
        None,
        Box::new(DigitAnchoredCaret),
    ) else {
        return;
    };

    let kind = match op % 5 {
        0 => EditKind::Insert(char::from(op)),
        1 => EditKind::Backspace,
        2 => EditKind::DeleteForward,
        3 => EditKind::Cut,
        _ => EditKind::Paste(text.clone()),
    };
    let event = EditEvent {
        text,
        selection_start: start as usize,
        selection_end: end as usize,
        kind,
    };
    let outcome = session.apply(&event);

    // Caret lands on a boundary of the rendered text, which respects the
    // configured length cap.
    if let Some(cursor) = outcome.cursor {
        assert!(cursor <= outcome.text.len());
        assert!(outcome.text.is_char_boundary(cursor));
    }
    assert!(outcome.text.chars().count() <= MAX_CHARS);
    assert_eq!(outcome.text, session.text());
});
