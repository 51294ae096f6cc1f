// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for bm-core operations.

use thiserror::Error;

/// All possible errors that can occur in bm-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("invalid rating: {0}\n  hint: ratings range from 1 to 5")]
    InvalidRating(f64),

    #[error("invalid beer type: '{0}'\n  hint: valid types are: IPA, Lager, Stout, Porter, Pilsner, Wheat, Sour, Other")]
    InvalidBeerType(String),

    #[error("invalid coordinate: {reason}")]
    InvalidCoordinate { reason: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for bm-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
