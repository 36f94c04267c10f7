//! Selection state for one managed field.

use country_data::Iso2;

/// Which country the field currently attributes its number to.
///
/// `user_override` records that the user picked the country explicitly; an
/// explicit pick outranks auto-detection for the rest of the session, while
/// dial codes typed into the field outrank both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub country: Option<Iso2>,
    pub user_override: bool,
}
