// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use salon_booking::{Collection, CollectionState};

/// What a wizard step should display for one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionView<'a, T> {
    /// The upstream selections this collection depends on are not made yet.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch failed; a retry is available.
    Failed {
        /// Visitor-facing message.
        message: &'a str,
    },
    /// The fetch succeeded with no items. Not an error.
    Empty {
        /// Headline for the empty state.
        title: &'static str,
        /// Suggestion for what to try next.
        guidance: &'static str,
    },
    /// Items to choose from.
    Ready(&'a [T]),
}

impl<T> CollectionView<'_, T> {
    /// Whether the step offers a retry action.
    #[must_use]
    pub const fn can_retry(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Title and guidance shown when a collection loads empty.
#[must_use]
pub const fn empty_guidance(collection: Collection) -> (&'static str, &'static str) {
    match collection {
        Collection::Services => (
            "No hay servicios disponibles",
            "Volvé a intentar más tarde.",
        ),
        Collection::Professionals => (
            "No hay profesionales disponibles",
            "Podés continuar sin preferencia de profesional.",
        ),
        Collection::Slots => (
            "No hay horarios disponibles",
            "Probá con otra fecha o sin preferencia de profesional.",
        ),
    }
}

/// Derives the view of a collection.
///
/// # Arguments
///
/// * `collection` - Which collection `state` holds
/// * `state` - The collection state
/// * `requested` - Whether the selections it depends on are made
#[must_use]
pub fn collection_view<T>(
    collection: Collection,
    state: &CollectionState<T>,
    requested: bool,
) -> CollectionView<'_, T> {
    if state.is_loading() {
        return CollectionView::Loading;
    }
    if let Some(message) = state.error() {
        return CollectionView::Failed { message };
    }
    if !requested {
        return CollectionView::Idle;
    }
    if state.items().is_empty() {
        let (title, guidance) = empty_guidance(collection);
        return CollectionView::Empty { title, guidance };
    }
    CollectionView::Ready(state.items())
}
