// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A booking date string could not be parsed.
    InvalidDate {
        /// The rejected input.
        value: String,
        /// The parser's explanation.
        reason: String,
    },
    /// A booking date falls outside the bookable window.
    DateOutOfRange {
        /// The rejected date.
        date: time::Date,
        /// The earliest bookable date.
        min: time::Date,
        /// The latest bookable date.
        max: time::Date,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// A slot does not end after it starts.
    InvalidSlot {
        /// Slot start (RFC 3339).
        start_time: String,
        /// Slot end (RFC 3339).
        end_time: String,
    },
    /// A timestamp cannot be represented for display.
    TimestampOutOfRange(String),
    /// Unknown IANA timezone name.
    InvalidTimezone(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { value, reason } => {
                write!(f, "Invalid booking date '{value}': {reason}")
            }
            Self::DateOutOfRange { date, min, max } => {
                write!(
                    f,
                    "Booking date {date} is outside the bookable range {min} to {max}"
                )
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::InvalidSlot {
                start_time,
                end_time,
            } => {
                write!(
                    f,
                    "Slot must end after it starts (start: {start_time}, end: {end_time})"
                )
            }
            Self::TimestampOutOfRange(value) => {
                write!(f, "Timestamp {value} cannot be displayed")
            }
            Self::InvalidTimezone(name) => write!(f, "Invalid timezone: {name}"),
        }
    }
}

impl std::error::Error for DomainError {}
