// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod booking_window;
mod display;
mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use booking_window::{BOOKING_HORIZON_MONTHS, BookingWindow};
pub use display::{DEFAULT_DISPLAY_TIMEZONE, format_long_date, format_slot_range, format_slot_time};
pub use error::DomainError;
pub use types::{
    AvailableSlot, Professional, ProfessionalChoice, ProfessionalId, Service, ServiceId,
};
pub use validation::{format_booking_date, parse_booking_date, parse_timezone};
