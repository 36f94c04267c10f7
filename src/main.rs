//! Line-oriented shell around a [`FieldSession`].
//!
//! Reads commands from stdin, sends them through the value pipeline, and
//! prints the field back with a caret marker. Useful for poking at dial-code
//! resolution and caret behaviour without wiring a real UI.

use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::mpsc::Receiver;

use country_data::Iso2;
use detect::AutoCountryService;
use phone_core::{
    ApplyOutcome, DigitAnchoredCaret, EditEvent, EditKind, FieldConfig, FieldSession, FormatStyle,
    NumberFormatter,
};
use serde::Deserialize;

/// Shell configuration, read from a TOML file passed via `--config`.
#[derive(Debug, Default, Deserialize)]
struct ShellConfig {
    default_country: Option<String>,
    national_mode: Option<bool>,
    #[serde(default)]
    only_countries: Vec<String>,
    #[serde(default)]
    preferred_countries: Vec<String>,
    max_length: Option<usize>,
    /// Attach the demo grouping formatter (on unless disabled).
    formatted: Option<bool>,
}

/// Demo formatter: digits in groups of three, `+` kept only in
/// international style. Stands in for a real formatting library.
struct GroupedFormatter;

impl NumberFormatter for GroupedFormatter {
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

struct Shell {
    session: FieldSession,
    service: AutoCountryService,
    detect_rx: Receiver<Iso2>,
    text: String,
    caret: usize,
    selection: Option<(usize, usize)>,
}

impl Shell {
    fn new(config: ShellConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let field_config = FieldConfig {
            max_length: config.max_length,
            default_country: config
                .default_country
                .as_deref()
                .map(parse_iso2)
                .transpose()?,
            national_mode: config.national_mode.unwrap_or(true),
            only_countries: parse_iso2_list(&config.only_countries)?,
            preferred_countries: parse_iso2_list(&config.preferred_countries)?,
        };
        let formatter: Option<Box<dyn NumberFormatter>> = if config.formatted.unwrap_or(true) {
            Some(Box::new(GroupedFormatter))
        } else {
            None
        };
        let session = FieldSession::new(
            field_config,
            country_data::all(),
            formatter,
            Box::new(DigitAnchoredCaret),
        )?;
        let mut service = AutoCountryService::new();
        let detect_rx = service.subscribe();
        service.begin();
        Ok(Self {
            session,
            service,
            detect_rx,
            text: String::new(),
            caret: 0,
            selection: None,
        })
    }

    fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        println!(
            "telshell: {} countries active, default {}, {} mode",
            self.session.active_countries().len(),
            self.session.default_country(),
            mode_name(self.session.national_mode()),
        );
        println!("type 'help' for commands");
        let stdin = io::stdin();
        prompt()?;
        for line in stdin.lock().lines() {
            let line = line?;
            if !self.handle(line.trim()) {
                return Ok(());
            }
            self.drain_detection();
            prompt()?;
        }
        Ok(())
    }

    /// Dispatch one command line. Returns `false` on quit.
    fn handle(&mut self, line: &str) -> bool {
        let (cmd, rest) = match line.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest),
            None => (line, ""),
        };
        match cmd {
            "" => {}
            "type" => {
                for c in rest.chars() {
                    self.edit(EditKind::Insert(c));
                }
                self.show();
            }
            "back" => {
                self.repeat(rest, EditKind::Backspace);
                self.show();
            }
            "del" => {
                self.repeat(rest, EditKind::DeleteForward);
                self.show();
            }
            "cut" => {
                self.edit(EditKind::Cut);
                self.show();
            }
            "paste" => {
                self.edit(EditKind::Paste(rest.to_string()));
                self.show();
            }
            "sel" => self.set_selection(rest),
            "country" => self.pick_country(rest),
            "mode" => self.switch_mode(rest),
            "set" => {
                let outcome = self.session.set_number(rest);
                self.absorb(outcome);
                self.show();
            }
            "detect" => self.simulate_detection(rest),
            "show" => self.show(),
            "countries" => self.list_countries(),
            "help" => print_help(),
            "quit" | "exit" => return false,
            other => println!("unknown command '{other}' (try 'help')"),
        }
        true
    }

    fn edit(&mut self, kind: EditKind) {
        let event = match self.selection.take() {
            Some((start, end)) => EditEvent::over_selection(&self.text, start, end, kind),
            None => EditEvent::at_caret(&self.text, self.caret, kind),
        };
        let outcome = self.session.apply(&event);
        self.absorb(outcome);
    }

    fn repeat(&mut self, rest: &str, kind: EditKind) {
        let count = match rest.trim() {
            "" => 1,
            raw => match raw.parse::<usize>() {
                Ok(n) => n,
                Err(_) => {
                    println!("expected a count, got '{raw}'");
                    return;
                }
            },
        };
        for _ in 0..count {
            self.edit(kind.clone());
        }
    }

    /// Write an outcome back the way a widget would.
    fn absorb(&mut self, outcome: ApplyOutcome) {
        if outcome.country_changed {
            match self.session.selected_country() {
                Some(iso2) => println!("country -> {}", describe(iso2)),
                None => println!("country -> (none)"),
            }
        }
        self.caret = outcome.cursor.unwrap_or(outcome.text.len());
        self.text = outcome.text;
    }

    fn set_selection(&mut self, rest: &str) {
        let mut parts = rest.split_whitespace();
        match (
            parts.next().and_then(|p| p.parse::<usize>().ok()),
            parts.next().and_then(|p| p.parse::<usize>().ok()),
        ) {
            (Some(start), Some(end)) => {
                self.selection = Some((start, end));
                println!("selection {start}..{end} (consumed by the next edit)");
            }
            _ => println!("usage: sel <start> <end>"),
        }
    }

    fn pick_country(&mut self, rest: &str) {
        let iso2 = match parse_iso2(rest.trim()) {
            Ok(iso2) => iso2,
            Err(err) => {
                println!("{err}");
                return;
            }
        };
        match self.session.select_country(iso2) {
            Ok(outcome) => {
                self.absorb(outcome);
                self.show();
            }
            Err(err) => println!("{err}"),
        }
    }

    fn switch_mode(&mut self, rest: &str) {
        let national = match rest.trim() {
            "national" => true,
            "international" => false,
            other => {
                println!("expected 'national' or 'international', got '{other}'");
                return;
            }
        };
        let outcome = self.session.set_national_mode(national);
        self.absorb(outcome);
        self.show();
    }

    /// Pretend the host's country lookup came back with `rest`.
    fn simulate_detection(&mut self, rest: &str) {
        match parse_iso2(rest.trim()) {
            Ok(iso2) => self.service.complete(iso2),
            Err(err) => println!("{err}"),
        }
    }

    /// Apply any detection results that arrived since the last command.
    fn drain_detection(&mut self) {
        while let Ok(iso2) = self.detect_rx.try_recv() {
            match self.session.apply_detected_country(iso2) {
                Some(outcome) => {
                    self.absorb(outcome);
                    println!("detected country {iso2} applied");
                    self.show();
                }
                None => println!("detected country {iso2} noted"),
            }
        }
    }

    fn show(&self) {
        println!("  text   |{}|", self.text);
        let column = self.text[..self.caret].chars().count();
        println!("  caret   {}^", " ".repeat(column));
        if let Some((start, end)) = self.selection {
            println!("  sel     {start}..{end}");
        }
        let country = match self.session.selected_country() {
            Some(iso2) => describe(iso2),
            None => "(none)".to_string(),
        };
        let suffix = if self.session.selection().user_override {
            " (your pick)"
        } else {
            ""
        };
        println!("  country {country}{suffix}");
        println!("  mode    {}", mode_name(self.session.national_mode()));
    }

    fn list_countries(&self) {
        let preferred = self.session.preferred_countries();
        if !preferred.is_empty() {
            println!("preferred:");
            for record in &preferred {
                println!("  {}  +{}  {}", record.iso2, record.dial_code, record.name);
            }
        }
        println!(
            "{} countries active",
            self.session.active_countries().len()
        );
    }
}

fn mode_name(national: bool) -> &'static str {
    if national { "national" } else { "international" }
}

/// Label a code with its builtin display name, e.g. "gb (United Kingdom)".
fn describe(iso2: Iso2) -> String {
    match country_data::find(iso2) {
        Some(record) => format!("{iso2} ({})", record.name),
        None => iso2.to_string(),
    }
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

fn parse_iso2(raw: &str) -> Result<Iso2, String> {
    Iso2::new(raw).ok_or_else(|| format!("invalid country code '{raw}'"))
}

fn parse_iso2_list(raw: &[String]) -> Result<Vec<Iso2>, String> {
    raw.iter().map(|s| parse_iso2(s)).collect()
}

fn print_help() {
    println!("commands:");
    println!("  type <chars>           type characters at the caret");
    println!("  back [n]               backspace n times (default 1)");
    println!("  del [n]                delete forward n times (default 1)");
    println!("  sel <start> <end>      select a byte range for the next edit");
    println!("  cut                    cut the selection");
    println!("  paste <text>           paste text at the caret or over the selection");
    println!("  set <number>           replace the field text programmatically");
    println!("  country <iso2>         pick a country by hand");
    println!("  mode national|international");
    println!("  detect <iso2>          simulate the host country lookup completing");
    println!("  countries              list preferred countries and the active count");
    println!("  show                   print the field state");
    println!("  quit");
}

fn print_usage() {
    println!("usage: telshell [--config <path>]");
    println!();
    println!("Reads commands from stdin and drives an international phone");
    println!("number field. The optional TOML config accepts default_country,");
    println!("national_mode, only_countries, preferred_countries, max_length");
    println!("and formatted.");
}

fn parse_args(
    mut args: impl Iterator<Item = String>,
) -> Result<Option<PathBuf>, Box<dyn std::error::Error>> {
    let mut config = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => match args.next() {
                Some(path) => config = Some(PathBuf::from(path)),
                None => return Err("--config needs a path".into()),
            },
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => return Err(format!("unknown argument '{other}'").into()),
        }
    }
    Ok(config)
}

fn load_config(path: &Path) -> Result<ShellConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let config_path = parse_args(env::args().skip(1))?;
    let shell_config = match config_path {
        Some(path) => load_config(&path)?,
        None => ShellConfig::default(),
    };
    Shell::new(shell_config)?.run()
}
