//! # phone_core
//!
//! UI-agnostic processing core for an international phone number field.
//!
//! This crate provides the moving parts behind a phone input with a country
//! selector:
//! - [`FieldSession`]: The value pipeline every mutation funnels through
//! - [`DialCodeRegistry`]: Dial codes and area-code keys indexed for
//!   longest-prefix lookup
//! - [`extract_dial_code`]: Pulls the dial-code prefix out of raw input
//! - [`resolve_country`]: Decides which country the current text implies
//! - [`DigitAnchoredCaret`]: Keeps the caret in place across reformats by
//!   counting digits, not bytes
//!
//! ## Design Principles
//!
//! This crate is intentionally UI-agnostic and does not depend on:
//! - Any widget toolkit or DOM layer
//! - Network or geo-IP lookups (see the `detect` crate)
//! - A concrete formatting library; hosts plug one in via [`NumberFormatter`]
//!
//! All offsets in the public API are byte offsets into UTF-8 strings and are
//! clamped to character boundaries on the way in.
//!
//! ```
//! use phone_core::{DigitAnchoredCaret, EditEvent, EditKind, FieldConfig, FieldSession};
//!
//! let config = FieldConfig {
//!     national_mode: false,
//!     ..FieldConfig::default()
//! };
//! let mut field = FieldSession::new(
//!     config,
//!     country_data::all(),
//!     None,
//!     Box::new(DigitAnchoredCaret),
//! )?;
//!
//! for c in "+44 20".chars() {
//!     let caret = field.text().len();
//!     let event = EditEvent::at_caret(field.text(), caret, EditKind::Insert(c));
//!     field.apply(&event);
//! }
//! assert_eq!(field.text(), "+44 20");
//! assert_eq!(field.selected_country(), country_data::Iso2::new("gb"));
//! # Ok::<(), phone_core::ConfigError>(())
//! ```

mod config;
mod cursor;
mod error;
mod event;
mod extract;
mod format;
mod pipeline;
mod registry;
mod resolve;
mod state;
mod text;

pub use config::FieldConfig;
pub use cursor::{CaretPlacement, CaretRequest, DigitAnchoredCaret, TrailingCaret};
pub use error::{ConfigError, CountryNotFound};
pub use event::{EditEvent, EditKind};
pub use extract::{DialCodeMatch, extract_dial_code};
pub use format::{FormatStyle, NumberFormatter};
pub use pipeline::{ApplyOutcome, FieldSession};
pub use registry::{DialCodeRegistry, MAX_KEY_DIGITS};
pub use resolve::{Resolution, resolve_country};
pub use state::SelectionState;

// Re-export text utilities for hosts that need to mirror the pipeline's
// boundary handling in their own widgets.
pub use text::{clamp_to_char_boundary, filter_single_line, normalized_number};
