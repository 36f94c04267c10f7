use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use phone_core::{
    DialCodeRegistry, DigitAnchoredCaret, EditEvent, EditKind, FieldConfig, FieldSession,
    FormatStyle, NumberFormatter, extract_dial_code, resolve_country,
};

const SAMPLE_INPUTS: &[&str] = &[
    "+1 (416) 555-0199",
    "+44 20 7946 0958",
    "+49 30 901820",
    "+999 12 34",
    "0661 123 456",
];

struct GroupedFormatter;

impl NumberFormatter for GroupedFormatter {
    fn format(
        &self,
        number: &str,
        _country: country_data::Iso2,
        style: FormatStyle,
    ) -> Option<String> {
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

fn full_registry() -> DialCodeRegistry {
    DialCodeRegistry::build(country_data::all()).expect("builtin table should build")
}

fn intl_session() -> FieldSession {
    let config = FieldConfig {
        national_mode: false,
        ..FieldConfig::default()
    };
    FieldSession::new(
        config,
        country_data::all(),
        Some(Box::new(GroupedFormatter)),
        Box::new(DigitAnchoredCaret),
    )
    .expect("builtin table should build")
}

fn bench_registry_build(c: &mut Criterion) {
    let countries = country_data::all();
    c.bench_function("bench_registry_build", |b| {
        b.iter(|| {
            let registry = DialCodeRegistry::build(black_box(countries));
            black_box(registry.is_ok());
        });
    });
}

fn bench_extract_dial_code(c: &mut Criterion) {
    let registry = full_registry();
    c.bench_function("bench_extract_dial_code", |b| {
        b.iter(|| {
            for input in SAMPLE_INPUTS {
                black_box(extract_dial_code(&registry, black_box(input), true));
            }
        });
    });
}

fn bench_resolve_nanp(c: &mut Criterion) {
    let registry = full_registry();
    let us = country_data::Iso2::new("us").unwrap();
    c.bench_function("bench_resolve_nanp", |b| {
        b.iter(|| {
            black_box(resolve_country(
                &registry,
                black_box("+1 (416) 555-0199"),
                Some(us),
                us,
                true,
            ));
        });
    });
}

fn bench_typing_storm(c: &mut Criterion) {
    // Every keystroke of a full international number, caret tracking and
    // reformatting included.
    c.bench_function("bench_typing_storm", |b| {
        b.iter_batched(
            intl_session,
            |mut session| {
                let mut text = String::new();
                let mut caret = 0usize;
                for ch in "+1 (416) 555-0199".chars() {
                    let event = EditEvent::at_caret(&text, caret, EditKind::Insert(ch));
                    let outcome = session.apply(&event);
                    caret = outcome.cursor.unwrap_or(outcome.text.len());
                    text = outcome.text;
                }
                black_box(text);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_registry_build,
    bench_extract_dial_code,
    bench_resolve_nanp,
    bench_typing_storm
);
criterion_main!(benches);
