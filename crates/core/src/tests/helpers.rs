// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Collection, Command, FetchFailure, FetchRequest, FetchedItems, SelectionState,
    TransitionResult, apply,
};
use salon_booking_domain::{AvailableSlot, BookingWindow, Professional, Service};
use time::macros::date;
use time::{Date, OffsetDateTime};

pub fn create_test_window() -> BookingWindow {
    BookingWindow::starting(date!(2025 - 06 - 01)).unwrap()
}

pub fn create_test_state() -> SelectionState {
    SelectionState::new(create_test_window())
}

pub fn corte() -> Service {
    Service::new("svc-corte", "Corte", 30)
}

pub fn color() -> Service {
    Service::new("svc-color", "Color", 90).with_buffer(15)
}

pub fn lucia() -> Professional {
    Professional::new("pro-lucia", "Lucía")
}

pub fn martin() -> Professional {
    Professional::new("pro-martin", "Martín")
}

pub fn june_first() -> Date {
    date!(2025 - 06 - 01)
}

pub fn june_second() -> Date {
    date!(2025 - 06 - 02)
}

pub fn slot_at(start: OffsetDateTime, minutes: i64) -> AvailableSlot {
    AvailableSlot::new(start, start + time::Duration::minutes(minutes)).unwrap()
}

/// Applies a command that must succeed.
pub fn step(state: &SelectionState, command: Command) -> TransitionResult {
    apply(state, command).unwrap()
}

/// Returns the single fetch a transition issued for `collection`.
pub fn fetch_for(result: &TransitionResult, collection: Collection) -> FetchRequest {
    let matching: Vec<&FetchRequest> = result
        .fetches
        .iter()
        .filter(|fetch| fetch.ticket.collection == collection)
        .collect();
    assert_eq!(matching.len(), 1, "expected one {collection} fetch");
    matching[0].clone()
}

pub fn resolve_ok(state: &SelectionState, fetch: &FetchRequest, items: FetchedItems) -> TransitionResult {
    step(
        state,
        Command::Resolve {
            ticket: fetch.ticket,
            outcome: Ok(items),
        },
    )
}

pub fn resolve_err(state: &SelectionState, fetch: &FetchRequest) -> TransitionResult {
    step(
        state,
        Command::Resolve {
            ticket: fetch.ticket,
            outcome: Err(FetchFailure::new("connection reset")),
        },
    )
}

/// Selects `service` and resolves its professionals fetch with `professionals`.
pub fn with_service(
    state: &SelectionState,
    service: Service,
    professionals: Vec<Professional>,
) -> SelectionState {
    let selected: TransitionResult = step(state, Command::SelectService { service });
    let fetch: FetchRequest = fetch_for(&selected, Collection::Professionals);
    resolve_ok(
        &selected.new_state,
        &fetch,
        FetchedItems::Professionals(professionals),
    )
    .new_state
}

/// Selects `date` and resolves its slots fetch with `slots`.
pub fn with_date(state: &SelectionState, date: Date, slots: Vec<AvailableSlot>) -> SelectionState {
    let selected: TransitionResult = step(state, Command::SelectDate { date });
    let fetch: FetchRequest = fetch_for(&selected, Collection::Slots);
    resolve_ok(&selected.new_state, &fetch, FetchedItems::Slots(slots)).new_state
}
