// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns the value of `BEERMAP_CONFIG` if set.
pub fn config_file() -> Option<PathBuf> {
    non_empty(vars::BEERMAP_CONFIG).map(PathBuf::from)
}

/// Returns the value of `BEERMAP_DATA_DIR` if set.
pub fn data_dir() -> Option<PathBuf> {
    non_empty(vars::BEERMAP_DATA_DIR).map(PathBuf::from)
}

/// Returns the value of `BEERMAP_URL` if set.
pub fn remote_url() -> Option<String> {
    non_empty(vars::BEERMAP_URL)
}

/// Returns the value of `BEERMAP_ANON_KEY` if set.
pub fn anon_key() -> Option<String> {
    non_empty(vars::BEERMAP_ANON_KEY)
}

/// Returns the value of `BEERMAP_LOG` if set, a `tracing` filter directive.
pub fn log_filter() -> Option<String> {
    non_empty(vars::BEERMAP_LOG)
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
