// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use salon_booking::CoreError;
use thiserror::Error;
use tokio::task::JoinError;

/// Errors returned by [`crate::BookingWizard`].
#[derive(Debug, Error)]
pub enum WizardError {
    /// The selection was rejected by the state machine.
    #[error("Selection rejected: {0}")]
    Rejected(#[from] CoreError),

    /// A fetch task was cancelled before reporting its outcome.
    #[error("Fetch task ended without an outcome: {0}")]
    FetchTask(#[from] JoinError),
}
