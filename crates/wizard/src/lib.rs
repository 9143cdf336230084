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
#![allow(clippy::multiple_crate_versions)]

//! Runtime for the booking wizard.
//!
//! [`BookingWizard`] is the single writer of the selection state. Every
//! selection goes through `salon_booking::apply`; the fetches a transition
//! asks for run as spawned tasks that report back over a channel, and their
//! results are applied one at a time by [`BookingWizard::next_event`].

mod error;
mod events;
mod fetch;
mod session;
mod view;

#[cfg(test)]
mod tests;

pub use error::WizardError;
pub use events::{WizardEvent, WizardEventBroadcaster};
pub use fetch::run_fetch;
pub use session::BookingWizard;
pub use view::{CollectionView, collection_view, empty_guidance};
