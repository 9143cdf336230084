// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::fetch::Collection;
use salon_booking_domain::DomainError;

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The step requires a selected service.
    ServiceNotSelected,
    /// The step requires a selected date.
    DateNotSelected,
    /// The chosen professional is not among those offering the service.
    ProfessionalNotOffered {
        /// The rejected professional identifier.
        professional_id: String,
    },
    /// The chosen slot is not among the loaded availability.
    SlotNotOffered {
        /// The rejected slot start.
        start_time: String,
    },
    /// A retry was requested for a collection whose inputs are not selected.
    NothingToRetry(Collection),
    /// A fetch result does not match the collection on its ticket.
    MismatchedFetchResult {
        /// The collection on the ticket.
        expected: Collection,
        /// The collection the items belong to.
        actual: Collection,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::ServiceNotSelected => write!(f, "A service must be selected first"),
            Self::DateNotSelected => write!(f, "A date must be selected first"),
            Self::ProfessionalNotOffered { professional_id } => {
                write!(
                    f,
                    "Professional '{professional_id}' does not offer the selected service"
                )
            }
            Self::SlotNotOffered { start_time } => {
                write!(f, "Slot starting at {start_time} is not available")
            }
            Self::NothingToRetry(collection) => {
                write!(f, "Cannot retry {collection}: its selections are not set")
            }
            Self::MismatchedFetchResult { expected, actual } => {
                write!(
                    f,
                    "Fetch result for {actual} delivered on a {expected} ticket"
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
