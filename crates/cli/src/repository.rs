// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared, synchronized collection of beer spots.
//!
//! The repository is the single source of truth every screen reads from. It
//! mirrors the remote table well enough to render, replacing its collection
//! on each full fetch and folding newly inserted spots in at the head without
//! a re-fetch.
//!
//! Overlapping refreshes are resolved by sequence number: only the response
//! to the most recently issued refresh is applied. After [`BeerRepository::close`]
//! late completions are dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use bm_core::{BeerSpot, NewBeerSpot};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::store::{Direction, PostgrestStore, Query, RemoteStore, Row, StoreError};

/// What the view-models see.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeerState {
    /// Newest first.
    pub spots: Vec<BeerSpot>,
    /// A refresh is outstanding.
    pub loading: bool,
    /// Message from the last failed refresh, cleared by a successful one.
    pub error: Option<String>,
}

/// How a completed refresh was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The collection was replaced with `count` spots.
    Applied { count: usize },
    /// A newer refresh was issued meanwhile; this response was discarded.
    Superseded,
    /// The repository was closed; this response was discarded.
    Detached,
}

struct Inner {
    state: BeerState,
    /// Sequence number of the most recently issued refresh.
    issued: u64,
}

/// Synchronization layer between the screens and the remote store.
pub struct BeerRepository<S: RemoteStore = PostgrestStore> {
    store: S,
    table: String,
    inner: Mutex<Inner>,
    closed: AtomicBool,
    changes: watch::Sender<BeerState>,
}

impl<S: RemoteStore> BeerRepository<S> {
    /// Create an empty repository over `table` in `store`.
    pub fn new(store: S, table: impl Into<String>) -> Self {
        let (changes, _) = watch::channel(BeerState::default());
        BeerRepository {
            store,
            table: table.into(),
            inner: Mutex::new(Inner {
                state: BeerState::default(),
                issued: 0,
            }),
            closed: AtomicBool::new(false),
            changes,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Current collection, loading flag and error.
    pub fn snapshot(&self) -> BeerState {
        self.lock().state.clone()
    }

    /// Receiver that observes every state change.
    pub fn subscribe(&self) -> watch::Receiver<BeerState> {
        self.changes.subscribe()
    }

    pub fn spots(&self) -> Vec<BeerSpot> {
        self.lock().state.spots.clone()
    }

    pub fn loading(&self) -> bool {
        self.lock().state.loading
    }

    pub fn error(&self) -> Option<String> {
        self.lock().state.error.clone()
    }

    /// Stop applying results. Completions arriving afterwards are dropped.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Fetch every spot, newest first, and replace the collection.
    ///
    /// On failure the previous collection is kept, the error message is
    /// recorded and the error is returned.
    pub async fn refresh(&self) -> Result<RefreshOutcome> {
        let seq = self.update(|inner| {
            inner.issued += 1;
            inner.state.loading = true;
            inner.issued
        });
        debug!(seq, table = %self.table, "refresh issued");

        let query = Query::new().order_by("created_at", Direction::Descending);
        let fetched = self
            .store
            .select(&self.table, &query)
            .await
            .and_then(decode_rows);

        if self.is_closed() {
            debug!(seq, "repository closed, dropping refresh result");
            return Ok(RefreshOutcome::Detached);
        }

        let mut inner = self.lock();
        if seq != inner.issued {
            debug!(seq, latest = inner.issued, "dropping superseded refresh result");
            return Ok(RefreshOutcome::Superseded);
        }

        inner.state.loading = false;
        let outcome = match fetched {
            Ok(spots) => {
                let count = spots.len();
                inner.state.spots = spots;
                inner.state.error = None;
                info!(seq, count, "beer spots refreshed");
                Ok(RefreshOutcome::Applied { count })
            }
            Err(e) => {
                warn!(seq, error = %e, "failed to fetch beer spots");
                inner.state.error = Some(e.to_string());
                Err(e.into())
            }
        };
        self.changes.send_replace(inner.state.clone());
        outcome
    }

    /// Store a new spot and put it at the head of the collection.
    ///
    /// Drafts with a blank name are rejected before contacting the store.
    /// Returns the stored spot, or `None` if the store answered no rows. A
    /// failed insert leaves the collection and the shared error untouched.
    pub async fn add_beer(&self, draft: NewBeerSpot) -> Result<Option<BeerSpot>> {
        draft.validate()?;

        let row = serde_json::to_value(&draft)?;
        let returned = self.store.insert(&self.table, vec![row]).await?;

        let Some(first) = returned.into_iter().next() else {
            debug!(name = %draft.name, "insert answered no rows");
            return Ok(None);
        };
        let spot: BeerSpot = serde_json::from_value(first)
            .map_err(|e| StoreError::Decode(format!("malformed beer spot: {}", e)))?;

        if self.is_closed() {
            debug!(id = %spot.id, "repository closed, not merging inserted spot");
            return Ok(Some(spot));
        }

        self.update(|inner| {
            inner.state.spots.retain(|s| s.id != spot.id);
            inner.state.spots.insert(0, spot.clone());
        });
        info!(id = %spot.id, name = %spot.name, "beer spot added");
        Ok(Some(spot))
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Apply `f` under the lock and publish the resulting state.
    fn update<T>(&self, f: impl FnOnce(&mut Inner) -> T) -> T {
        let mut inner = self.lock();
        let out = f(&mut inner);
        self.changes.send_replace(inner.state.clone());
        out
    }
}

fn decode_rows(rows: Vec<Row>) -> std::result::Result<Vec<BeerSpot>, StoreError> {
    rows.into_iter()
        .map(|row| {
            serde_json::from_value(row)
                .map_err(|e| StoreError::Decode(format!("malformed beer spot: {}", e)))
        })
        .collect()
}

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;
