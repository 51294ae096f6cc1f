// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod add;
pub mod auth;
pub mod config;
pub mod map;
pub mod profile;

use std::future::Future;
use std::sync::Arc;

use tracing::debug;

use crate::config::{data_dir, session_path, Config};
use crate::error::Result;
use crate::repository::BeerRepository;
use crate::store::{PostgrestStore, SessionStore};

/// Run `fut` to completion on a single-threaded runtime.
///
/// Every screen interaction is driven from one thread, so store calls are
/// the only points where work interleaves.
pub fn block_on<F: Future>(fut: F) -> Result<F::Output> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(rt.block_on(fut))
}

/// Helper to build the store client from the resolved configuration.
///
/// Makes no request; the first one happens on the first select or insert.
pub fn open_store(config: &Config) -> Result<PostgrestStore> {
    let (url, key) = config.require_endpoint()?;
    let sessions = SessionStore::new(session_path(&data_dir()));
    debug!(url, session = %sessions.path().display(), "opening remote store");
    Ok(PostgrestStore::new(
        url,
        key,
        config.remote.timeout(),
        sessions,
    )?)
}

/// Helper to open the shared repository from the current context.
pub fn open_repository() -> Result<(Arc<BeerRepository>, Config)> {
    let config = Config::resolve()?;
    let store = open_store(&config)?;
    let repo = Arc::new(BeerRepository::new(store, config.remote.table.clone()));
    Ok((repo, config))
}

/// Print rendered lines to stdout.
pub(crate) fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
