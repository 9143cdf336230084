// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Selection state machine for the booking wizard.
//!
//! All transitions go through [`apply`], which never performs I/O. Fetches
//! the caller must run are returned as [`FetchRequest`] values; their results
//! come back in as [`Command::Resolve`].

mod apply;
mod command;
mod completion;
mod error;
mod fetch;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use completion::{Completion, CompletionNotifier};
pub use error::CoreError;
pub use fetch::{Collection, FetchFailure, FetchKind, FetchRequest, FetchTicket, FetchedItems};
pub use state::{CollectionState, SelectionState, TransitionResult};
