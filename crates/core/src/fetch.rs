// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use salon_booking_domain::{AvailableSlot, Professional, ProfessionalId, Service, ServiceId};
use time::Date;

/// A remotely fetched collection held by the selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Active services, loaded once per session.
    Services,
    /// Professionals offering the selected service.
    Professionals,
    /// Available slots for the selected service, professional, and date.
    Slots,
}

impl Collection {
    /// Returns the string representation of this collection.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Services => "services",
            Self::Professionals => "professionals",
            Self::Slots => "slots",
        }
    }

    /// The message shown to the visitor when a fetch of this collection fails.
    #[must_use]
    pub const fn failure_message(&self) -> &'static str {
        match self {
            Self::Services => "No pudimos cargar los servicios. Por favor, intentá de nuevo.",
            Self::Professionals => {
                "No pudimos cargar los profesionales. Por favor, intentá de nuevo."
            }
            Self::Slots => "No pudimos cargar los horarios. Por favor, intentá de nuevo.",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one issued fetch.
///
/// A result is applied only while its generation is still the collection's
/// current generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    /// The collection the fetch fills.
    pub collection: Collection,
    /// The collection generation at issue time.
    pub generation: u64,
}

/// What to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchKind {
    /// Active services ordered by name.
    Services,
    /// Active professionals offering a service, ordered by name.
    Professionals {
        /// The selected service.
        service_id: ServiceId,
    },
    /// Availability for a service on a date.
    Slots {
        /// The selected service.
        service_id: ServiceId,
        /// The chosen professional; `None` asks for any professional.
        professional_id: Option<ProfessionalId>,
        /// The selected date.
        date: Date,
    },
}

/// A fetch the caller must perform and report back with [`crate::Command::Resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Ticket to hand back with the result.
    pub ticket: FetchTicket,
    /// The request parameters.
    pub kind: FetchKind,
}

/// Items returned by a successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchedItems {
    /// Result of a services fetch.
    Services(Vec<Service>),
    /// Result of a professionals fetch.
    Professionals(Vec<Professional>),
    /// Result of a slots fetch.
    Slots(Vec<AvailableSlot>),
}

impl FetchedItems {
    /// The collection these items belong to.
    #[must_use]
    pub const fn collection(&self) -> Collection {
        match self {
            Self::Services(_) => Collection::Services,
            Self::Professionals(_) => Collection::Professionals,
            Self::Slots(_) => Collection::Slots,
        }
    }
}

/// A failed fetch. The detail is for logs; the visitor sees
/// [`Collection::failure_message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    /// Transport or remote error text.
    pub detail: String,
}

impl FetchFailure {
    /// Creates a new `FetchFailure`.
    #[must_use]
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
