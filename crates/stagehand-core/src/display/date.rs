//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

/// A wrapper around [`Date`] that formats as `DD.MM.YYYY` via `Display`.
///
/// This is the inverse of [`crate::dates::parse_date`]: a date parsed from
/// user input displays as the exact string the user typed, so dates
/// round-trip unchanged into the exported document.
pub struct DisplayDate<'a>(pub &'a Date);

impl fmt::Display for DisplayDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%d.%m.%Y"))
    }
}
