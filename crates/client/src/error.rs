// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the data client.

use thiserror::Error;

/// Errors raised while talking to the remote data store.
///
/// There is no structured error contract with the store beyond "succeeded" or
/// "failed with a message"; the variants only separate where the failure
/// happened.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// Configuration is missing or unusable.
    #[error("Invalid client configuration: {0}")]
    Config(String),

    /// The request could not be built.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The request never produced a response.
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// The store answered with a non-success status.
    #[error("Remote error ({status}): {message}")]
    Remote { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("Failed to decode {context}: {message}")]
    Decode { context: String, message: String },
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::Decode {
                context: String::from("response body"),
                message: err.to_string(),
            };
        }
        Self::Transport {
            message: err.to_string(),
        }
    }
}
