//! Strict parsing and formatting of user-entered dates.
//!
//! The conversation accepts exactly one date shape, `DD.MM.YYYY`: two-digit
//! day, two-digit month, four-digit year, dot separators. Anything else is
//! rejected, including otherwise-parseable variants like `1.1.2025` or
//! `2025-01-01`, so that the rendered document always shows dates in the
//! same form the user typed them.

use jiff::civil::Date;

use crate::error::{Result, StagehandError};

/// Parses a `DD.MM.YYYY` string into a calendar-validated [`Date`].
///
/// # Errors
///
/// Returns [`StagehandError::InvalidDate`] when the input does not match the
/// pattern exactly or names a day that does not exist in the given month
/// (e.g. `31.02.2024`).
pub fn parse_date(input: &str) -> Result<Date> {
    let bytes = input.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[2] == b'.'
        && bytes[5] == b'.'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
    if !shape_ok {
        return Err(StagehandError::invalid_date(
            input,
            "expected DD.MM.YYYY",
        ));
    }

    // The shape check guarantees these slices are pure ASCII digits.
    let day: i8 = input[0..2].parse().map_err(|_| {
        StagehandError::invalid_date(input, "day out of range")
    })?;
    let month: i8 = input[3..5].parse().map_err(|_| {
        StagehandError::invalid_date(input, "month out of range")
    })?;
    let year: i16 = input[6..10].parse().map_err(|_| {
        StagehandError::invalid_date(input, "year out of range")
    })?;

    Date::new(year, month, day)
        .map_err(|e| StagehandError::invalid_date(input, e.to_string()))
}

/// Formats a [`Date`] back into the `DD.MM.YYYY` form used in documents.
pub fn format_date(date: Date) -> String {
    date.strftime("%d.%m.%Y").to_string()
}
