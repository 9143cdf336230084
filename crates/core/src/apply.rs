// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::fetch::{Collection, FetchFailure, FetchKind, FetchRequest, FetchTicket, FetchedItems};
use crate::state::{SelectionState, TransitionResult};
use salon_booking_domain::{AvailableSlot, ProfessionalChoice, Service};
use time::Date;

/// Applies a command to the current state, producing a new state and the
/// fetches the caller must perform.
///
/// Cascade rules:
///
/// | Changed      | Cleared                               | Fetched       |
/// |--------------|---------------------------------------|---------------|
/// | service      | professional, date, slot, both lists  | professionals |
/// | professional | slot, slot list                       | slots if date |
/// | date         | slot, slot list                       | slots         |
/// | slot         | nothing                               | nothing       |
///
/// A retry clears the selection taken from the list it reloads: the slot for
/// a slots retry, a specific professional and the slot for a professionals
/// retry.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and any fetch requests
/// * `Err(CoreError)` if the command is invalid in the current state
///
/// # Errors
///
/// Returns an error if:
/// - A professional, date, or slot is chosen before the steps it depends on
/// - A professional or slot is chosen that the loaded lists do not offer
/// - A date falls outside the booking window
/// - A retry is requested for a collection whose inputs are not selected
/// - A fetch result does not match its ticket's collection
pub fn apply(state: &SelectionState, command: Command) -> Result<TransitionResult, CoreError> {
    match command {
        Command::LoadServices => {
            let mut new_state: SelectionState = state.clone();
            let fetch: FetchRequest = issue(&mut new_state, Collection::Services)?;
            Ok(changed(new_state, vec![fetch]))
        }
        Command::SelectService { service } => Ok(select_service(state, service)),
        Command::SelectProfessional { choice } => select_professional(state, choice),
        Command::SelectDate { date } => select_date(state, date),
        Command::SelectSlot { slot } => select_slot(state, slot),
        Command::Retry { collection } => retry(state, collection),
        Command::Resolve { ticket, outcome } => resolve(state, ticket, outcome),
    }
}

fn select_service(state: &SelectionState, service: Service) -> TransitionResult {
    let service_id = service.id.clone();

    let mut new_state: SelectionState = state.clone();
    new_state.service = Some(service);
    new_state.professional = None;
    new_state.date = None;
    new_state.slot = None;
    new_state.slots.clear();

    // begin_fetch also drops the previous service's professionals.
    let generation: u64 = new_state.professionals.begin_fetch();
    let fetch: FetchRequest = FetchRequest {
        ticket: FetchTicket {
            collection: Collection::Professionals,
            generation,
        },
        kind: FetchKind::Professionals { service_id },
    };

    changed(new_state, vec![fetch])
}

fn select_professional(
    state: &SelectionState,
    choice: ProfessionalChoice,
) -> Result<TransitionResult, CoreError> {
    if state.service.is_none() {
        return Err(CoreError::ServiceNotSelected);
    }

    if let ProfessionalChoice::Specific(professional) = &choice
        && !state
            .professionals
            .items()
            .iter()
            .any(|offered| offered.id == professional.id)
    {
        return Err(CoreError::ProfessionalNotOffered {
            professional_id: professional.id.value().to_string(),
        });
    }

    let mut new_state: SelectionState = state.clone();
    new_state.professional = Some(choice);
    new_state.slot = None;

    let fetches: Vec<FetchRequest> = refresh_slots(&mut new_state)?;
    Ok(changed(new_state, fetches))
}

fn select_date(state: &SelectionState, date: Date) -> Result<TransitionResult, CoreError> {
    if state.service.is_none() {
        return Err(CoreError::ServiceNotSelected);
    }
    state.window().validate(date)?;

    let mut new_state: SelectionState = state.clone();
    new_state.date = Some(date);
    new_state.slot = None;

    let fetches: Vec<FetchRequest> = refresh_slots(&mut new_state)?;
    Ok(changed(new_state, fetches))
}

fn select_slot(state: &SelectionState, slot: AvailableSlot) -> Result<TransitionResult, CoreError> {
    if state.service.is_none() {
        return Err(CoreError::ServiceNotSelected);
    }
    if state.date.is_none() {
        return Err(CoreError::DateNotSelected);
    }
    if !state.slots.items().contains(&slot) {
        return Err(CoreError::SlotNotOffered {
            start_time: slot.start_time.to_string(),
        });
    }

    let mut new_state: SelectionState = state.clone();
    new_state.slot = Some(slot);
    Ok(changed(new_state, Vec::new()))
}

/// Re-issues the fetch of `collection` and drops the selections that depend
/// on the list being reloaded.
///
/// A specific professional is dropped on a professionals retry, which also
/// refreshes the slots for any professional. `NoPreference` does not depend
/// on the list and is kept.
fn retry(state: &SelectionState, collection: Collection) -> Result<TransitionResult, CoreError> {
    let mut new_state: SelectionState = state.clone();
    let mut fetches: Vec<FetchRequest> = vec![issue(&mut new_state, collection)?];

    match collection {
        Collection::Services => {}
        Collection::Professionals => {
            if matches!(
                new_state.professional,
                Some(ProfessionalChoice::Specific(_))
            ) {
                new_state.professional = None;
                new_state.slot = None;
                fetches.extend(refresh_slots(&mut new_state)?);
            }
        }
        Collection::Slots => new_state.slot = None,
    }

    Ok(changed(new_state, fetches))
}

/// Clears the slot list and, when service and date are both set, issues a
/// new slots fetch.
fn refresh_slots(state: &mut SelectionState) -> Result<Vec<FetchRequest>, CoreError> {
    if state.date.is_none() {
        state.slots.clear();
        return Ok(Vec::new());
    }
    Ok(vec![issue(state, Collection::Slots)?])
}

/// Builds the request for `collection` from the current selections and marks
/// the collection as loading.
fn issue(state: &mut SelectionState, collection: Collection) -> Result<FetchRequest, CoreError> {
    let kind: FetchKind = match collection {
        Collection::Services => FetchKind::Services,
        Collection::Professionals => {
            let service: &Service = state
                .service
                .as_ref()
                .ok_or(CoreError::NothingToRetry(collection))?;
            FetchKind::Professionals {
                service_id: service.id.clone(),
            }
        }
        Collection::Slots => match (&state.service, state.date) {
            (Some(service), Some(date)) => FetchKind::Slots {
                service_id: service.id.clone(),
                professional_id: state
                    .professional
                    .as_ref()
                    .and_then(ProfessionalChoice::professional_id)
                    .cloned(),
                date,
            },
            _ => return Err(CoreError::NothingToRetry(collection)),
        },
    };

    let generation: u64 = match collection {
        Collection::Services => state.services.begin_fetch(),
        Collection::Professionals => state.professionals.begin_fetch(),
        Collection::Slots => state.slots.begin_fetch(),
    };

    Ok(FetchRequest {
        ticket: FetchTicket {
            collection,
            generation,
        },
        kind,
    })
}

fn resolve(
    state: &SelectionState,
    ticket: FetchTicket,
    outcome: Result<FetchedItems, FetchFailure>,
) -> Result<TransitionResult, CoreError> {
    if let Ok(items) = &outcome
        && items.collection() != ticket.collection
    {
        return Err(CoreError::MismatchedFetchResult {
            expected: ticket.collection,
            actual: items.collection(),
        });
    }

    let current: bool = match ticket.collection {
        Collection::Services => state.services.accepts(ticket.generation),
        Collection::Professionals => state.professionals.accepts(ticket.generation),
        Collection::Slots => state.slots.accepts(ticket.generation),
    };
    if !current {
        return Ok(TransitionResult {
            new_state: state.clone(),
            fetches: Vec::new(),
            discarded: true,
        });
    }

    let mut new_state: SelectionState = state.clone();
    match outcome {
        Ok(FetchedItems::Services(services)) => new_state.services.succeed(services),
        Ok(FetchedItems::Professionals(professionals)) => {
            new_state.professionals.succeed(professionals);
        }
        Ok(FetchedItems::Slots(slots)) => new_state.slots.succeed(slots),
        Err(_) => {
            let message: &str = ticket.collection.failure_message();
            match ticket.collection {
                Collection::Services => new_state.services.fail(message),
                Collection::Professionals => new_state.professionals.fail(message),
                Collection::Slots => new_state.slots.fail(message),
            }
        }
    }

    Ok(changed(new_state, Vec::new()))
}

const fn changed(new_state: SelectionState, fetches: Vec<FetchRequest>) -> TransitionResult {
    TransitionResult {
        new_state,
        fetches,
        discarded: false,
    }
}
