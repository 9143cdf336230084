// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The range of dates a visitor may book.
//!
//! ## Invariants
//!
//! - The window starts today, from the local clock
//! - The window ends three calendar months after today
//! - When the target month is shorter than today's day of month, the end is
//!   clamped to the last day of the target month (Jan 31 + 3 months = Apr 30)
//! - Both ends are inclusive

use crate::error::DomainError;
use time::{Date, Month, OffsetDateTime};

/// How far ahead bookings may be made, in calendar months.
pub const BOOKING_HORIZON_MONTHS: u8 = 3;

/// Inclusive range of bookable dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
    min: Date,
    max: Date,
}

impl BookingWindow {
    /// Builds the window that opens on `today`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmeticOverflow` if the end date cannot
    /// be represented.
    pub fn starting(today: Date) -> Result<Self, DomainError> {
        let max: Date = add_months(today, BOOKING_HORIZON_MONTHS)?;
        Ok(Self { min: today, max })
    }

    /// Builds the window from the local clock, falling back to UTC when the
    /// local offset cannot be determined.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmeticOverflow` if the end date cannot
    /// be represented.
    pub fn from_local_clock() -> Result<Self, DomainError> {
        let now: OffsetDateTime =
            OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        Self::starting(now.date())
    }

    /// Earliest bookable date.
    #[must_use]
    pub const fn min(&self) -> Date {
        self.min
    }

    /// Latest bookable date.
    #[must_use]
    pub const fn max(&self) -> Date {
        self.max
    }

    /// Whether `date` can be booked.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.min <= date && date <= self.max
    }

    /// Checks that `date` can be booked.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateOutOfRange` if the date lies outside the window.
    pub fn validate(&self, date: Date) -> Result<(), DomainError> {
        if !self.contains(date) {
            return Err(DomainError::DateOutOfRange {
                date,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

fn add_months(date: Date, months: u8) -> Result<Date, DomainError> {
    let overflow = || DomainError::DateArithmeticOverflow {
        operation: format!("adding {months} months to {date}"),
    };

    let zero_based: i32 = i32::from(u8::from(date.month())) - 1 + i32::from(months);
    let year: i32 = date.year() + zero_based.div_euclid(12);
    let month_number: u8 = u8::try_from(zero_based.rem_euclid(12) + 1).map_err(|_| overflow())?;
    let month: Month = Month::try_from(month_number).map_err(|_| overflow())?;

    // Walk back from the original day until the target month accepts it.
    let mut day: u8 = date.day();
    loop {
        match Date::from_calendar_date(year, month, day) {
            Ok(result) => return Ok(result),
            Err(_) if day > 28 => day -= 1,
            Err(_) => return Err(overflow()),
        }
    }
}
