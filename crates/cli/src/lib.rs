// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! beermap - pin beer tastings on a map, backed by a hosted PostgREST table.
//!
//! This crate provides the application layer for the `beermap` CLI.
//!
//! # Main Components
//!
//! - [`store`] - The [`RemoteStore`](store::RemoteStore) seam and its PostgREST client
//! - [`BeerRepository`] - Shared, synchronized collection of beer spots
//! - [`viewmodel`] - Map, Add-Beer and Profile screens over the repository
//! - [`Config`] - User configuration (`config.toml` plus environment overrides)
//! - [`Error`] - Error types for all operations
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use beermap::{BeerRepository, Config};
//! use beermap::viewmodel::ProfileViewModel;
//!
//! let config = Config::resolve()?;
//! let repo = Arc::new(BeerRepository::new(store, config.remote.table.clone()));
//! repo.refresh().await?;
//! let profile = ProfileViewModel::new(repo, config.profile.username).view();
//! ```

mod cli;
mod commands;
mod display;

pub mod config;
pub mod env;
pub mod error;
pub mod repository;
pub mod store;
pub mod viewmodel;

pub use cli::{Cli, Command, ConfigCommand, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};
pub use repository::{BeerRepository, BeerState, RefreshOutcome};

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Map {
            tap,
            marker,
            output,
        } => commands::map::run(tap, marker, output),
        Command::Add {
            name,
            beer_type,
            rating,
            comment,
            lat,
            lon,
        } => commands::add::run(name, beer_type, rating, comment, lat, lon),
        Command::Profile { output } => commands::profile::run(output),
        Command::Login { email, password } => commands::auth::login(&email, &password),
        Command::Logout => commands::auth::logout(),
        Command::Config(cmd) => commands::config::run(cmd),
    }
}
