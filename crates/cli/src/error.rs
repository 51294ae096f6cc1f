// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::store::StoreError;

/// All possible errors that can occur in the beermap library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Invalid(#[from] bm_core::Error),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("beer spot not found: {0}")]
    SpotNotFound(String),

    #[error("invalid map position '{0}'\n  hint: use LAT,LON, e.g. 37.7749,-122.4194")]
    InvalidPosition(String),

    #[error("remote store is not configured\n  hint: set BEERMAP_URL and BEERMAP_ANON_KEY, or add a [remote] section to {config_path}")]
    NotConfigured { config_path: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for input problems caught before any request was made.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Invalid(_) | Error::InvalidPosition(_))
    }
}

/// A specialized Result type for beermap operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
