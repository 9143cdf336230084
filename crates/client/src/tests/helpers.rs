// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ClientError, RemoteDataClient, TableQuery};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Mutex;

/// A call observed by [`RecordingClient`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Query(TableQuery),
    Call { function: String, args: Value },
}

/// In-memory client answering every query and call with canned results.
pub struct RecordingClient {
    rows: Result<Vec<Value>, ClientError>,
    result: Result<Value, ClientError>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingClient {
    pub fn with_rows(rows: Vec<Value>) -> Self {
        Self {
            rows: Ok(rows),
            result: Ok(Value::Null),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_result(result: Value) -> Self {
        Self {
            rows: Ok(Vec::new()),
            result: Ok(result),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: ClientError) -> Self {
        Self {
            rows: Err(error.clone()),
            result: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteDataClient for RecordingClient {
    async fn query(&self, query: &TableQuery) -> Result<Vec<Value>, ClientError> {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall::Query(query.clone()));
        self.rows.clone()
    }

    async fn call(&self, function: &str, args: &Value) -> Result<Value, ClientError> {
        self.calls.lock().unwrap().push(RecordedCall::Call {
            function: function.to_string(),
            args: args.clone(),
        });
        self.result.clone()
    }
}

pub fn service_row(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": null,
        "duration_minutes": 45,
        "buffer_minutes": 15,
        "is_active": true,
        "created_at": "2025-01-10T12:00:00+00:00"
    })
}

pub fn professional_row(id: &str, name: &str, active: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": null,
        "phone": null,
        "is_active": active
    })
}
