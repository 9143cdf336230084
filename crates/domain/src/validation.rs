// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono_tz::Tz;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const BOOKING_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Parses a `YYYY-MM-DD` booking date.
///
/// # Arguments
///
/// * `value` - The date string as typed or passed on the command line
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if the string is not a calendar date
/// in `YYYY-MM-DD` form.
pub fn parse_booking_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), BOOKING_DATE_FORMAT).map_err(|err| DomainError::InvalidDate {
        value: value.to_string(),
        reason: err.to_string(),
    })
}

/// Formats a booking date as `YYYY-MM-DD`, the form the availability
/// procedure expects.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if the year cannot be written with four
/// digits.
pub fn format_booking_date(date: Date) -> Result<String, DomainError> {
    date.format(BOOKING_DATE_FORMAT)
        .map_err(|err| DomainError::InvalidDate {
            value: date.to_string(),
            reason: err.to_string(),
        })
}

/// Parses an IANA timezone name used for display.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimezone` if the name is unknown.
pub fn parse_timezone(name: &str) -> Result<Tz, DomainError> {
    name.parse::<Tz>()
        .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
}
