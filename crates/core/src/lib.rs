// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! bm-core: Shared library for the BeerMap tasting log
//!
//! This crate provides the domain model (beer spots, styles, ratings and
//! coordinates) and the pure derivations used by the `beermap` client.

pub mod beer;
pub mod error;
pub mod geo;
pub mod stats;

pub use beer::{BeerSpot, BeerType, NewBeerSpot, Rating, SpotId};
pub use error::{Error, Result};
pub use geo::{Coordinate, Region, DEFAULT_COORDINATE};
pub use stats::{average_rating, round_half_up};
