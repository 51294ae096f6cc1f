// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Map screen: markers, taps and the unsupported-platform placeholder.

use std::sync::Arc;

use bm_core::{BeerSpot, BeerType, Coordinate, Rating, Region, SpotId};
use serde::Serialize;

use super::AddBeerParams;
use crate::repository::BeerRepository;
use crate::store::RemoteStore;

pub const UNSUPPORTED_TITLE: &str = "Maps are not supported on this platform";
pub const UNSUPPORTED_HINT: &str = "Please use the iOS or Android app to view the map";

/// Whether the platform can draw a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapSupport {
    Supported,
    Unsupported,
}

impl From<bool> for MapSupport {
    fn from(supported: bool) -> Self {
        if supported {
            MapSupport::Supported
        } else {
            MapSupport::Unsupported
        }
    }
}

/// One pin on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub id: SpotId,
    pub coordinate: Coordinate,
    pub title: String,
    pub description: String,
}

impl Marker {
    fn for_spot(spot: &BeerSpot) -> Self {
        Marker {
            id: spot.id.clone(),
            coordinate: spot.coordinate(),
            title: spot.name.clone(),
            description: format!("{} - {}⭐", spot.beer_type, spot.rating),
        }
    }
}

/// Read-only details shown when a marker is tapped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub beer_type: BeerType,
    pub rating: Rating,
    pub comment: String,
}

/// What the map screen renders.
#[derive(Debug, Clone, PartialEq)]
pub enum MapView {
    Markers { region: Region, markers: Vec<Marker> },
    Placeholder { title: &'static str, hint: &'static str },
}

/// View-model behind the map screen.
pub struct MapViewModel<S: RemoteStore> {
    repo: Arc<BeerRepository<S>>,
    support: MapSupport,
}

impl<S: RemoteStore> MapViewModel<S> {
    pub fn new(repo: Arc<BeerRepository<S>>, support: MapSupport) -> Self {
        MapViewModel { repo, support }
    }

    pub fn is_supported(&self) -> bool {
        self.support == MapSupport::Supported
    }

    /// Region the map opens on.
    pub fn region(&self) -> Region {
        Region::default()
    }

    /// One marker per spot, in collection order.
    pub fn markers(&self) -> Vec<Marker> {
        self.repo.spots().iter().map(Marker::for_spot).collect()
    }

    pub fn view(&self) -> MapView {
        match self.support {
            MapSupport::Supported => MapView::Markers {
                region: self.region(),
                markers: self.markers(),
            },
            MapSupport::Unsupported => MapView::Placeholder {
                title: UNSUPPORTED_TITLE,
                hint: UNSUPPORTED_HINT,
            },
        }
    }

    /// A tap on empty map surface opens Add-Beer at the tapped point.
    pub fn tap_surface(&self, at: Coordinate) -> AddBeerParams {
        AddBeerParams::at(at.latitude, at.longitude)
    }

    /// A tap on a marker shows that spot's summary.
    pub fn tap_marker(&self, id: &str) -> Option<MarkerSummary> {
        self.repo
            .spots()
            .into_iter()
            .find(|s| s.id.as_str() == id)
            .map(|s| MarkerSummary {
                comment: s.comment_text().to_string(),
                name: s.name,
                beer_type: s.beer_type,
                rating: s.rating,
            })
    }

    /// The header "add" action opens Add-Beer without coordinates.
    pub fn add_button(&self) -> AddBeerParams {
        AddBeerParams::default()
    }
}

#[cfg(test)]
#[path = "map_tests.rs"]
mod tests;
