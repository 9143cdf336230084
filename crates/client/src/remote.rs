// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ClientError;
use crate::query::TableQuery;
use async_trait::async_trait;
use serde_json::Value;

/// The two call shapes the booking flow needs from the data store.
#[async_trait]
pub trait RemoteDataClient: Send + Sync {
    /// Reads the records matching `query`.
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` on transport failure, a non-success response,
    /// or a body that is not a JSON array.
    async fn query(&self, query: &TableQuery) -> Result<Vec<Value>, ClientError>;

    /// Invokes the remote procedure `function` with named arguments.
    ///
    /// # Errors
    ///
    /// Returns a `ClientError` on transport failure, a non-success response,
    /// or a body that is not JSON.
    async fn call(&self, function: &str, args: &Value) -> Result<Value, ClientError>;
}
