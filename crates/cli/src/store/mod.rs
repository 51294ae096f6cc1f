// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote store access for beer spots.
//!
//! Provides the client side of the hosted database: a table-oriented
//! `select`/`insert` API plus the persisted auth session.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌─────────────┐
//! │  Repository  │────►│  RemoteStore  │────►│  PostgREST  │
//! │              │◄────│    (trait)    │◄────│   service   │
//! └──────────────┘     └───────────────┘     └─────────────┘
//!                              │
//!                              ▼
//!                      ┌───────────────┐
//!                      │ SessionStore  │  (session.json)
//!                      └───────────────┘
//! ```
//!
//! The trait is injectable so tests can substitute an in-memory store.

mod postgrest;
mod query;
mod session;

pub use postgrest::PostgrestStore;
pub use query::{Direction, Filter, FilterOp, Order, Query};
pub use session::{Session, SessionStore};

use std::future::Future;
use std::pin::Pin;

/// A row as exchanged with the store.
pub type Row = serde_json::Value;

/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The request never produced a response (network, DNS, TLS, timeout).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("remote store rejected the request ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("unexpected response from remote store: {0}")]
    Decode(String),

    /// Reading or writing the persisted session failed.
    #[error("session error: {0}")]
    Session(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Boxed future returned by [`RemoteStore`] methods.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = StoreResult<T>> + Send + 'a>>;

/// Table-level access to the hosted store.
///
/// This trait abstracts over the actual backend, allowing the repository
/// to be tested with in-memory implementations.
pub trait RemoteStore: Send + Sync {
    /// Fetch rows from `table` matching `query`, in the order it requests.
    fn select<'a>(&'a self, table: &'a str, query: &'a Query) -> StoreFuture<'a, Vec<Row>>;

    /// Insert `rows` into `table`, answering the stored rows.
    ///
    /// The store fills in identity and timestamp columns. It may answer
    /// fewer rows than were sent (for example when row-level policies hide
    /// them); that is not an error.
    fn insert<'a>(&'a self, table: &'a str, rows: Vec<Row>) -> StoreFuture<'a, Vec<Row>>;
}

#[cfg(test)]
pub(crate) mod test_helpers;
