#![no_main]

use std::sync::OnceLock;

use libfuzzer_sys::fuzz_target;
use phone_core::{DialCodeRegistry, MAX_KEY_DIGITS, extract_dial_code, resolve_country};

static REGISTRY: OnceLock<DialCodeRegistry> = OnceLock::new();

fn registry() -> &'static DialCodeRegistry {
    REGISTRY.get_or_init(|| {
        DialCodeRegistry::build(country_data::all()).expect("builtin table should build")
    })
}

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let registry = registry();

    for include_area_codes in [false, true] {
        if let Some(found) = extract_dial_code(registry, &text, include_area_codes) {
            assert!(text.starts_with('+'));
            assert!(found.raw.len() <= text.len());
            assert!(text.starts_with(found.raw));
            assert!(!found.digits.is_empty());
            assert!(found.digits.len() <= MAX_KEY_DIGITS);
            assert!(found.digits.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    let us = country_data::Iso2::new("us").expect("us is a valid code");
    let _ = resolve_country(registry, &text, Some(us), us, true);
    let _ = resolve_country(registry, &text, None, us, false);
});
