// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP implementation of [`RemoteDataClient`] using PostgREST conventions.
//!
//! - Tables: `GET {base}/rest/v1/{table}?select=..&{field}=eq.{value}&order={field}.asc`
//! - Procedures: `POST {base}/rest/v1/rpc/{function}` with a JSON object body
//! - Every request carries `apikey` and `Authorization: Bearer` headers

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::query::TableQuery;
use crate::remote::RemoteDataClient;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{debug, warn};

const REST_PREFIX: &str = "rest/v1";

/// Data store client over HTTP.
#[derive(Debug, Clone)]
pub struct RestDataClient {
    client: Client,
    base_url: String,
}

impl RestDataClient {
    /// Builds a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if the configuration is invalid or the
    /// HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;

        let mut headers: HeaderMap = HeaderMap::new();
        let key: HeaderValue = HeaderValue::from_str(&config.api_key)
            .map_err(|_| ClientError::Config(String::from("API key is not a valid header value")))?;
        let bearer: HeaderValue = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| ClientError::Config(String::from("API key is not a valid header value")))?;
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let client: Client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|err| ClientError::Config(format!("Failed to create HTTP client: {err}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{REST_PREFIX}/{table}", self.base_url)
    }

    fn rpc_url(&self, function: &str) -> String {
        format!("{}/{REST_PREFIX}/rpc/{function}", self.base_url)
    }
}

/// Turns a non-success response into `ClientError::Remote`, preferring the
/// `message` field of a JSON error body.
async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body: String = response.text().await.unwrap_or_default();
    let message: String = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or(body);

    warn!(status = status.as_u16(), %message, "Data store returned an error");
    Err(ClientError::Remote {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl RemoteDataClient for RestDataClient {
    async fn query(&self, query: &TableQuery) -> Result<Vec<Value>, ClientError> {
        let table: &str = query.table_name();
        debug!(table, filters = query.filters().len(), "Querying table");

        let response: Response = self
            .client
            .get(self.table_url(table))
            .query(&query.to_query_pairs())
            .send()
            .await?;
        let response: Response = check_status(response).await?;

        let records: Vec<Value> = response.json().await.map_err(|err| ClientError::Decode {
            context: format!("rows of '{table}'"),
            message: err.to_string(),
        })?;

        debug!(table, count = records.len(), "Query returned records");
        Ok(records)
    }

    async fn call(&self, function: &str, args: &Value) -> Result<Value, ClientError> {
        debug!(function, "Calling remote procedure");

        let response: Response = self
            .client
            .post(self.rpc_url(function))
            .json(args)
            .send()
            .await?;
        let response: Response = check_status(response).await?;

        let body: String = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|err| ClientError::Decode {
            context: format!("result of '{function}'"),
            message: err.to_string(),
        })
    }
}
