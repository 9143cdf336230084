// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::SelectionState;
use salon_booking_domain::{AvailableSlot, ProfessionalChoice, Service};
use time::Date;

/// A finished selection handed to the host application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// The selected service.
    pub service: Service,
    /// The professional choice; `NoPreference` when any professional will do.
    pub professional: ProfessionalChoice,
    /// The selected date.
    pub date: Date,
    /// The selected slot.
    pub slot: AvailableSlot,
}

/// Signals a completed selection once per stable combination.
///
/// Feed it every state produced by [`crate::apply`]. It fires when the state
/// first becomes complete or when a complete state changes to a different
/// complete combination. Once any of service, date, or slot is cleared it
/// forgets the last combination, so choosing the same values again fires again.
#[derive(Debug, Clone, Default)]
pub struct CompletionNotifier {
    last: Option<Completion>,
}

impl CompletionNotifier {
    /// Creates a notifier that has not fired yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Observes a state and returns the completion to announce, if any.
    pub fn observe(&mut self, state: &SelectionState) -> Option<Completion> {
        let Some(completion) = state.completion() else {
            self.last = None;
            return None;
        };

        if self.last.as_ref() == Some(&completion) {
            return None;
        }

        self.last = Some(completion.clone());
        Some(completion)
    }

    /// The most recently announced completion that is still current.
    #[must_use]
    pub const fn last(&self) -> Option<&Completion> {
        self.last.as_ref()
    }
}
