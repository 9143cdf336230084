// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::completion::Completion;
use crate::fetch::{Collection, FetchRequest};
use salon_booking_domain::{
    AvailableSlot, BookingWindow, Professional, ProfessionalChoice, Service,
};
use time::Date;

/// One remotely fetched collection: its items plus loading and error flags.
///
/// The generation counter advances every time a fetch is issued or the
/// collection is cleared, so results from earlier fetches can be recognized
/// and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionState<T> {
    items: Vec<T>,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl<T> CollectionState<T> {
    /// Creates an empty, idle collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            generation: 0,
        }
    }

    /// The loaded items. Empty while loading, after an error, or when the
    /// remote side returned nothing.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// The visitor-facing error message of the last failed fetch.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The current fetch generation.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Marks a new fetch as issued and returns its generation.
    pub(crate) fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.items.clear();
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Drops items and flags and invalidates any fetch in flight.
    pub(crate) fn clear(&mut self) {
        self.generation += 1;
        self.items.clear();
        self.loading = false;
        self.error = None;
    }

    /// Whether a result carrying `generation` may still be applied.
    pub(crate) const fn accepts(&self, generation: u64) -> bool {
        self.loading && self.generation == generation
    }

    pub(crate) fn succeed(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    pub(crate) fn fail(&mut self, message: &str) {
        self.items.clear();
        self.loading = false;
        self.error = Some(message.to_string());
    }
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The booking wizard's selections and the collections that depend on them.
///
/// Selections are ordered service → professional / date → slot. A `None`
/// selection means the step has not been answered yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    window: BookingWindow,
    pub(crate) service: Option<Service>,
    pub(crate) professional: Option<ProfessionalChoice>,
    pub(crate) date: Option<Date>,
    pub(crate) slot: Option<AvailableSlot>,
    pub(crate) services: CollectionState<Service>,
    pub(crate) professionals: CollectionState<Professional>,
    pub(crate) slots: CollectionState<AvailableSlot>,
}

impl SelectionState {
    /// Creates a fresh wizard state accepting dates within `window`.
    ///
    /// # Arguments
    ///
    /// * `window` - The bookable date range for this session
    #[must_use]
    pub const fn new(window: BookingWindow) -> Self {
        Self {
            window,
            service: None,
            professional: None,
            date: None,
            slot: None,
            services: CollectionState::new(),
            professionals: CollectionState::new(),
            slots: CollectionState::new(),
        }
    }

    /// The bookable date range.
    #[must_use]
    pub const fn window(&self) -> &BookingWindow {
        &self.window
    }

    /// The selected service.
    #[must_use]
    pub const fn service(&self) -> Option<&Service> {
        self.service.as_ref()
    }

    /// The professional choice, if the step has been answered.
    #[must_use]
    pub const fn professional(&self) -> Option<&ProfessionalChoice> {
        self.professional.as_ref()
    }

    /// The selected date.
    #[must_use]
    pub const fn date(&self) -> Option<Date> {
        self.date
    }

    /// The selected slot.
    #[must_use]
    pub const fn slot(&self) -> Option<&AvailableSlot> {
        self.slot.as_ref()
    }

    /// The service catalog.
    #[must_use]
    pub const fn services(&self) -> &CollectionState<Service> {
        &self.services
    }

    /// Professionals offering the selected service.
    #[must_use]
    pub const fn professionals(&self) -> &CollectionState<Professional> {
        &self.professionals
    }

    /// Availability for the current selections.
    #[must_use]
    pub const fn slots(&self) -> &CollectionState<AvailableSlot> {
        &self.slots
    }

    /// Loading flag of a collection.
    #[must_use]
    pub const fn is_loading(&self, collection: Collection) -> bool {
        match collection {
            Collection::Services => self.services.is_loading(),
            Collection::Professionals => self.professionals.is_loading(),
            Collection::Slots => self.slots.is_loading(),
        }
    }

    /// Error message of a collection.
    #[must_use]
    pub fn error(&self, collection: Collection) -> Option<&str> {
        match collection {
            Collection::Services => self.services.error(),
            Collection::Professionals => self.professionals.error(),
            Collection::Slots => self.slots.error(),
        }
    }

    /// The finished selection, present iff service, date, and slot are set.
    ///
    /// An unanswered professional step is reported as no preference.
    #[must_use]
    pub fn completion(&self) -> Option<Completion> {
        match (&self.service, self.date, &self.slot) {
            (Some(service), Some(date), Some(slot)) => Some(Completion {
                service: service.clone(),
                professional: self
                    .professional
                    .clone()
                    .unwrap_or(ProfessionalChoice::NoPreference),
                date,
                slot: *slot,
            }),
            _ => None,
        }
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: SelectionState,
    /// Fetches the caller must now perform, in dependency order.
    pub fetches: Vec<FetchRequest>,
    /// Set when a `Resolve` carried a superseded ticket and was dropped.
    pub discarded: bool,
}
