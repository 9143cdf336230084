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
#![allow(clippy::multiple_crate_versions)]

//! Access to the remote data store.
//!
//! The store is consumed through two primitives, table queries and remote
//! procedure calls, behind the [`RemoteDataClient`] trait. [`RestDataClient`]
//! speaks the PostgREST dialect over HTTP; [`BookingCatalog`] turns the raw
//! records into domain types.

mod catalog;
mod config;
mod error;
mod query;
mod remote;
mod rest;

#[cfg(test)]
mod tests;

pub use catalog::{AVAILABLE_SLOTS_FUNCTION, BookingCatalog};
pub use config::{ClientConfig, KEY_ENV, TIMEOUT_ENV, URL_ENV};
pub use error::ClientError;
pub use query::{Filter, OrderBy, TableQuery};
pub use remote::RemoteDataClient;
pub use rest::RestDataClient;
