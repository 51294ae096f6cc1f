// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Screen view-models.
//!
//! Each view-model reads the shared [`BeerRepository`](crate::repository::BeerRepository)
//! and turns it into what one screen shows, forwarding user intents back to
//! it. None of them keeps its own copy of the collection.

pub mod add_beer;
pub mod map;
pub mod profile;

pub use add_beer::{AddBeerForm, Submitted};
pub use map::{MapSupport, MapView, MapViewModel, Marker, MarkerSummary};
pub use profile::{ProfileEntry, ProfileView, ProfileViewModel};

/// Navigation parameters for opening the Add-Beer screen.
///
/// Values are strings, as they arrive from a route or a command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddBeerParams {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

impl AddBeerParams {
    pub fn at(latitude: f64, longitude: f64) -> Self {
        AddBeerParams {
            latitude: Some(latitude.to_string()),
            longitude: Some(longitude.to_string()),
        }
    }
}
