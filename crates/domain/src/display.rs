// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Display formatting for dates and slot times.
//!
//! Slot instants arrive as UTC-or-offset timestamps; they are shown as
//! wall-clock times in the salon's timezone. No other timezone arithmetic
//! happens on the client.

use crate::error::DomainError;
use crate::types::AvailableSlot;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use time::{Date, OffsetDateTime};

/// Timezone used for display when none is configured.
pub const DEFAULT_DISPLAY_TIMEZONE: &str = "America/Argentina/Buenos_Aires";

const WEEKDAYS: [&str; 7] = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Formats an instant as a 24-hour `HH:MM` wall-clock time in `tz`.
///
/// # Errors
///
/// Returns `DomainError::TimestampOutOfRange` if the instant cannot be
/// represented by the display calendar.
pub fn format_slot_time(instant: OffsetDateTime, tz: Tz) -> Result<String, DomainError> {
    let utc: DateTime<Utc> = DateTime::from_timestamp(instant.unix_timestamp(), instant.nanosecond())
        .ok_or_else(|| DomainError::TimestampOutOfRange(instant.to_string()))?;
    Ok(utc.with_timezone(&tz).format("%H:%M").to_string())
}

/// Formats a slot as `HH:MM - HH:MM` in `tz`.
///
/// # Errors
///
/// Returns `DomainError::TimestampOutOfRange` if either end cannot be displayed.
pub fn format_slot_range(slot: &AvailableSlot, tz: Tz) -> Result<String, DomainError> {
    Ok(format!(
        "{} - {}",
        format_slot_time(slot.start_time, tz)?,
        format_slot_time(slot.end_time, tz)?
    ))
}

/// Formats a date in the long Spanish form, e.g. `lunes, 1 de junio de 2025`.
#[must_use]
pub fn format_long_date(date: Date) -> String {
    let weekday: &str = WEEKDAYS[usize::from(date.weekday().number_days_from_monday())];
    let month: &str = MONTHS[usize::from(u8::from(date.month())) - 1];
    format!("{weekday}, {} de {month} de {}", date.day(), date.year())
}
