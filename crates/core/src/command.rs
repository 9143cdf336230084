// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::fetch::{Collection, FetchFailure, FetchTicket, FetchedItems};
use salon_booking_domain::{AvailableSlot, ProfessionalChoice, Service};
use time::Date;

/// A command represents visitor or fetch-completion intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load the service catalog.
    LoadServices,
    /// Pick a service. Clears everything downstream.
    SelectService {
        /// The chosen service.
        service: Service,
    },
    /// Pick a professional or no preference. Clears the slot.
    SelectProfessional {
        /// The visitor's choice.
        choice: ProfessionalChoice,
    },
    /// Pick a date. Clears the slot.
    SelectDate {
        /// The chosen date.
        date: Date,
    },
    /// Pick a slot from the loaded availability.
    SelectSlot {
        /// The chosen slot.
        slot: AvailableSlot,
    },
    /// Re-issue the fetch for a collection from the current selections.
    Retry {
        /// The collection to refetch.
        collection: Collection,
    },
    /// Report the result of a fetch issued earlier.
    Resolve {
        /// The ticket the fetch was issued with.
        ticket: FetchTicket,
        /// The fetched items or the failure.
        outcome: Result<FetchedItems, FetchFailure>,
    },
}

impl Command {
    /// Short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LoadServices => "LoadServices",
            Self::SelectService { .. } => "SelectService",
            Self::SelectProfessional { .. } => "SelectProfessional",
            Self::SelectDate { .. } => "SelectDate",
            Self::SelectSlot { .. } => "SelectSlot",
            Self::Retry { .. } => "Retry",
            Self::Resolve { .. } => "Resolve",
        }
    }
}
