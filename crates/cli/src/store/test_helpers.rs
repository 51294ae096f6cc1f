// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory store double shared by repository and view-model tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{Duration, TimeZone, Utc};
use tokio::sync::oneshot;

use super::query::{Direction, FilterOp, Query};
use super::{RemoteStore, Row, StoreError, StoreFuture};

/// Mock store for testing without a network.
///
/// Behaves like a single table: inserts get an id and timestamps, selects
/// honor equality filters, ordering and limits. Failures, empty insert
/// answers, scripted select answers and held (gated) selects can be set up
/// to exercise the repository's edge cases.
#[derive(Clone, Default)]
pub struct MockStore {
    inner: Arc<MockInner>,
}

#[derive(Default)]
struct MockInner {
    rows: Mutex<Vec<Row>>,
    inserted: Mutex<Vec<Row>>,
    scripted_selects: Mutex<VecDeque<Result<Vec<Row>, String>>>,
    select_gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
    fail_selects: Mutex<Option<String>>,
    fail_inserts: Mutex<Option<String>>,
    empty_inserts: Mutex<bool>,
    select_calls: AtomicUsize,
    insert_calls: AtomicUsize,
    next_id: AtomicUsize,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store already holding `rows`.
    pub fn with_rows(rows: Vec<Row>) -> Self {
        let store = Self::new();
        *store.inner.rows.lock().unwrap() = rows;
        store
    }

    pub fn select_calls(&self) -> usize {
        self.inner.select_calls.load(Ordering::SeqCst)
    }

    pub fn insert_calls(&self) -> usize {
        self.inner.insert_calls.load(Ordering::SeqCst)
    }

    /// Payloads received by `insert`, in order.
    pub fn inserted(&self) -> Vec<Row> {
        self.inner.inserted.lock().unwrap().clone()
    }

    /// Make every select fail with `message` (or succeed again with `None`).
    pub fn fail_selects(&self, message: Option<&str>) {
        *self.inner.fail_selects.lock().unwrap() = message.map(str::to_string);
    }

    /// Make every insert fail with `message` (or succeed again with `None`).
    pub fn fail_inserts(&self, message: Option<&str>) {
        *self.inner.fail_inserts.lock().unwrap() = message.map(str::to_string);
    }

    /// Store inserted rows but answer with no rows.
    pub fn answer_inserts_with_nothing(&self, empty: bool) {
        *self.inner.empty_inserts.lock().unwrap() = empty;
    }

    /// Queue a fixed answer for the next select (taken when the call starts).
    pub fn script_select(&self, answer: Result<Vec<Row>, &str>) {
        self.inner
            .scripted_selects
            .lock()
            .unwrap()
            .push_back(answer.map_err(str::to_string));
    }

    /// Hold the next `n` selects until the returned senders fire.
    pub fn hold_selects(&self, n: usize) -> Vec<oneshot::Sender<()>> {
        let mut gates = self.inner.select_gates.lock().unwrap();
        (0..n)
            .map(|_| {
                let (tx, rx) = oneshot::channel();
                gates.push_back(rx);
                tx
            })
            .collect()
    }

    fn unavailable(message: String) -> StoreError {
        StoreError::Api {
            status: 503,
            message,
        }
    }

    fn run_query(&self, query: &Query) -> Vec<Row> {
        let mut rows: Vec<Row> = self
            .inner
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| {
                query.filters.iter().all(|f| {
                    let value = row.get(&f.column).map(value_text).unwrap_or_default();
                    match f.op {
                        FilterOp::Eq => value == f.value,
                        FilterOp::Neq => value != f.value,
                        _ => true,
                    }
                })
            })
            .cloned()
            .collect();
        if let Some(order) = &query.order {
            rows.sort_by_key(|row| row.get(&order.column).map(value_text).unwrap_or_default());
            if order.direction == Direction::Descending {
                rows.reverse();
            }
        }
        if let Some(n) = query.limit {
            rows.truncate(n);
        }
        rows
    }
}

fn value_text(v: &Row) -> String {
    match v {
        Row::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl RemoteStore for MockStore {
    fn select<'a>(&'a self, _table: &'a str, query: &'a Query) -> StoreFuture<'a, Vec<Row>> {
        self.inner.select_calls.fetch_add(1, Ordering::SeqCst);
        let scripted = self.inner.scripted_selects.lock().unwrap().pop_front();
        let gate = self.inner.select_gates.lock().unwrap().pop_front();
        Box::pin(async move {
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            if let Some(message) = self.inner.fail_selects.lock().unwrap().clone() {
                return Err(Self::unavailable(message));
            }
            match scripted {
                Some(Ok(rows)) => Ok(rows),
                Some(Err(message)) => Err(Self::unavailable(message)),
                None => Ok(self.run_query(query)),
            }
        })
    }

    fn insert<'a>(&'a self, _table: &'a str, rows: Vec<Row>) -> StoreFuture<'a, Vec<Row>> {
        self.inner.insert_calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move {
            if let Some(message) = self.inner.fail_inserts.lock().unwrap().clone() {
                return Err(Self::unavailable(message));
            }
            let mut stored = Vec::new();
            for mut row in rows {
                self.inner.inserted.lock().unwrap().push(row.clone());
                let n = self.inner.next_id.fetch_add(1, Ordering::SeqCst) + 1;
                let at = (Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap()
                    + Duration::seconds(n as i64))
                .to_rfc3339();
                if let Some(obj) = row.as_object_mut() {
                    obj.insert("id".to_string(), Row::String(format!("spot-{}", n)));
                    obj.insert("created_at".to_string(), Row::String(at.clone()));
                    obj.insert("updated_at".to_string(), Row::String(at));
                }
                self.inner.rows.lock().unwrap().push(row.clone());
                stored.push(row);
            }
            if *self.inner.empty_inserts.lock().unwrap() {
                return Ok(Vec::new());
            }
            Ok(stored)
        })
    }
}

/// A stored beer-spot row with the given id, rating and creation day.
pub fn spot_row(id: &str, name: &str, rating: f64, day: u32) -> Row {
    let at = Utc
        .with_ymd_and_hms(2026, 1, day, 12, 0, 0)
        .unwrap()
        .to_rfc3339();
    serde_json::json!({
        "id": id,
        "name": name,
        "type": "Lager",
        "rating": rating,
        "comment": format!("{} notes", name),
        "latitude": 37.8044,
        "longitude": -122.2712,
        "photo": null,
        "created_at": at,
        "updated_at": at,
    })
}
