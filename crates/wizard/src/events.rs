// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wizard notifications for observers of a session.
//!
//! Events describe what already happened to the selection state. They are
//! informational: observers read the authoritative state from the session.

use salon_booking::{Collection, Completion, FetchTicket};
use tokio::sync::broadcast;
use tracing::debug;

/// Maximum number of events to buffer in the broadcast channel.
/// Slow subscribers lose the oldest events.
const EVENT_BUFFER_SIZE: usize = 64;

/// Something that changed in a wizard session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    /// A fetch result was applied; the collection is ready or failed.
    CollectionUpdated {
        /// The collection that changed.
        collection: Collection,
    },
    /// A fetch result arrived for a superseded request and was dropped.
    FetchDiscarded {
        /// The ticket of the dropped fetch.
        ticket: FetchTicket,
    },
    /// The selection became complete, or changed to another complete combination.
    Completed(Completion),
}

/// Fan-out of [`WizardEvent`]s to any number of subscribers.
#[derive(Clone)]
pub struct WizardEventBroadcaster {
    tx: broadcast::Sender<WizardEvent>,
}

impl WizardEventBroadcaster {
    /// Creates a new event broadcaster.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(EVENT_BUFFER_SIZE);
        Self { tx }
    }

    /// Publishes an event to all current subscribers.
    ///
    /// Without subscribers the event is dropped.
    pub fn broadcast(&self, event: &WizardEvent) {
        match self.tx.send(event.clone()) {
            Ok(count) => {
                debug!(?event, receivers = count, "Broadcast wizard event");
            }
            Err(_) => {
                debug!(?event, "No receivers for wizard event");
            }
        }
    }

    /// Subscribes to events published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<WizardEvent> {
        self.tx.subscribe()
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for WizardEventBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}
