// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::WizardError;
use crate::events::{WizardEvent, WizardEventBroadcaster};
use crate::fetch::run_fetch;
use crate::view::{CollectionView, collection_view};
use salon_booking::{
    Collection, Command, Completion, CompletionNotifier, FetchFailure, FetchRequest, FetchTicket,
    FetchedItems, SelectionState, TransitionResult, apply,
};
use salon_booking_client::BookingCatalog;
use salon_booking_domain::{
    AvailableSlot, BookingWindow, Professional, ProfessionalChoice, Service,
};
use time::Date;
use tokio::sync::broadcast;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// A finished fetch on its way back to the session.
#[derive(Debug)]
struct FetchOutcome {
    ticket: FetchTicket,
    outcome: Result<FetchedItems, FetchFailure>,
}

/// One visitor's pass through the booking wizard.
///
/// The session owns the selection state and is its only writer. Fetches run
/// as spawned tasks that never touch the state; their outcomes are applied in
/// completion order by [`Self::next_event`], and results for superseded
/// requests are dropped there. A fetch that panics resolves as a failure.
/// Dropping the session aborts the fetches still in flight.
///
/// Methods that issue fetches must be called from within a tokio runtime.
pub struct BookingWizard {
    state: SelectionState,
    notifier: CompletionNotifier,
    catalog: BookingCatalog,
    fetches: JoinSet<FetchOutcome>,
    events: WizardEventBroadcaster,
}

impl BookingWizard {
    /// Creates a session with nothing selected.
    ///
    /// # Arguments
    ///
    /// * `catalog` - Source of services, professionals, and availability
    /// * `window` - The bookable date range for this session
    #[must_use]
    pub fn new(catalog: BookingCatalog, window: BookingWindow) -> Self {
        Self {
            state: SelectionState::new(window),
            notifier: CompletionNotifier::new(),
            catalog,
            fetches: JoinSet::new(),
            events: WizardEventBroadcaster::new(),
        }
    }

    /// The current selection state.
    #[must_use]
    pub const fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Number of fetches whose outcome has not been applied yet.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.fetches.len()
    }

    /// The last announced completion that is still current.
    #[must_use]
    pub const fn completion(&self) -> Option<&Completion> {
        self.notifier.last()
    }

    /// Subscribes to this session's events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<WizardEvent> {
        self.events.subscribe()
    }

    /// Loads the service catalog.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::Rejected` if the state machine refuses the command.
    pub fn start(&mut self) -> Result<(), WizardError> {
        self.submit(Command::LoadServices).map(|_| ())
    }

    /// Selects a service, clearing everything downstream of it.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::Rejected` if the state machine refuses the selection.
    pub fn select_service(&mut self, service: Service) -> Result<Option<Completion>, WizardError> {
        self.submit(Command::SelectService { service })
    }

    /// Answers the professional step.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::Rejected` if no service is selected or the
    /// professional is not offered for it.
    pub fn select_professional(
        &mut self,
        choice: ProfessionalChoice,
    ) -> Result<Option<Completion>, WizardError> {
        self.submit(Command::SelectProfessional { choice })
    }

    /// Selects a date.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::Rejected` if no service is selected or the date
    /// is outside the booking window.
    pub fn select_date(&mut self, date: Date) -> Result<Option<Completion>, WizardError> {
        self.submit(Command::SelectDate { date })
    }

    /// Selects one of the loaded slots.
    ///
    /// # Returns
    ///
    /// The completion, when this selection finishes the wizard with a new
    /// combination.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::Rejected` if the slot is not among the loaded ones.
    pub fn select_slot(&mut self, slot: AvailableSlot) -> Result<Option<Completion>, WizardError> {
        self.submit(Command::SelectSlot { slot })
    }

    /// Re-issues the last fetch of `collection` from the current selections.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::Rejected` if the selections the collection
    /// depends on are not set.
    pub fn retry(&mut self, collection: Collection) -> Result<(), WizardError> {
        self.submit(Command::Retry { collection }).map(|_| ())
    }

    /// Waits for the next fetch outcome and applies it.
    ///
    /// # Returns
    ///
    /// `None` when no fetch is in flight.
    ///
    /// # Errors
    ///
    /// Returns a `WizardError` if a fetch task was cancelled or the outcome
    /// does not match its ticket.
    pub async fn next_event(&mut self) -> Result<Option<WizardEvent>, WizardError> {
        let Some(joined) = self.fetches.join_next().await else {
            return Ok(None);
        };
        let FetchOutcome { ticket, outcome } = joined?;

        if let Err(failure) = &outcome {
            warn!(
                collection = %ticket.collection,
                generation = ticket.generation,
                detail = %failure.detail,
                "Fetch failed"
            );
        }

        let result: TransitionResult = apply(&self.state, Command::Resolve { ticket, outcome })?;
        let event: WizardEvent = if result.discarded {
            debug!(
                collection = %ticket.collection,
                generation = ticket.generation,
                "Discarded superseded fetch result"
            );
            WizardEvent::FetchDiscarded { ticket }
        } else {
            WizardEvent::CollectionUpdated {
                collection: ticket.collection,
            }
        };
        self.commit(result);
        self.events.broadcast(&event);
        Ok(Some(event))
    }

    /// Applies outcomes until no fetch is in flight.
    ///
    /// # Returns
    ///
    /// The events produced, in order.
    ///
    /// # Errors
    ///
    /// Returns the first `WizardError` raised by [`Self::next_event`].
    pub async fn settle(&mut self) -> Result<Vec<WizardEvent>, WizardError> {
        let mut events: Vec<WizardEvent> = Vec::new();
        while let Some(event) = self.next_event().await? {
            events.push(event);
        }
        Ok(events)
    }

    /// What the service step should display.
    #[must_use]
    pub fn services_view(&self) -> CollectionView<'_, Service> {
        let requested: bool = self.state.services().generation() > 0;
        collection_view(Collection::Services, self.state.services(), requested)
    }

    /// What the professional step should display.
    #[must_use]
    pub fn professionals_view(&self) -> CollectionView<'_, Professional> {
        let requested: bool = self.state.service().is_some();
        collection_view(
            Collection::Professionals,
            self.state.professionals(),
            requested,
        )
    }

    /// What the slot step should display.
    #[must_use]
    pub fn slots_view(&self) -> CollectionView<'_, AvailableSlot> {
        let requested: bool = self.state.service().is_some() && self.state.date().is_some();
        collection_view(Collection::Slots, self.state.slots(), requested)
    }

    fn submit(&mut self, command: Command) -> Result<Option<Completion>, WizardError> {
        let name: &str = command.name();
        let result: TransitionResult = apply(&self.state, command)?;
        debug!(command = name, fetches = result.fetches.len(), "Applied command");
        Ok(self.commit(result))
    }

    /// Installs a new state, dispatches its fetches, and reports completion.
    fn commit(&mut self, result: TransitionResult) -> Option<Completion> {
        let TransitionResult {
            new_state,
            fetches,
            discarded: _,
        } = result;
        self.state = new_state;
        for fetch in fetches {
            self.dispatch(fetch);
        }

        let completion: Option<Completion> = self.notifier.observe(&self.state);
        if let Some(completion) = &completion {
            info!(
                service = %completion.service.name,
                professional = completion.professional.label(),
                date = %completion.date,
                "Booking selection completed"
            );
            self.events
                .broadcast(&WizardEvent::Completed(completion.clone()));
        }
        completion
    }

    fn dispatch(&mut self, fetch: FetchRequest) {
        let FetchRequest { ticket, kind } = fetch;
        debug!(
            collection = %ticket.collection,
            generation = ticket.generation,
            "Dispatching fetch"
        );

        let catalog: BookingCatalog = self.catalog.clone();
        self.fetches.spawn(async move {
            // The inner task isolates a panicking fetch so its ticket still resolves.
            let fetch = tokio::spawn(async move { run_fetch(&catalog, kind).await });
            let outcome: Result<FetchedItems, FetchFailure> = match fetch.await {
                Ok(result) => result.map_err(|err| FetchFailure::new(err.to_string())),
                Err(err) => Err(FetchFailure::new(format!("Fetch task failed: {err}"))),
            };
            FetchOutcome { ticket, outcome }
        });
    }
}
