// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Profile screen: totals and the full list of tastings.

use std::sync::Arc;

use bm_core::{average_rating, BeerSpot, BeerType, Rating, SpotId};
use serde::Serialize;

use crate::repository::BeerRepository;
use crate::store::RemoteStore;

pub const SUBTITLE: &str = "Beer Collector";

/// One row of the tasting list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileEntry {
    pub id: SpotId,
    pub name: String,
    #[serde(rename = "type")]
    pub beer_type: BeerType,
    pub comment: String,
    pub rating: Rating,
}

impl From<&BeerSpot> for ProfileEntry {
    fn from(spot: &BeerSpot) -> Self {
        ProfileEntry {
            id: spot.id.clone(),
            name: spot.name.clone(),
            beer_type: spot.beer_type,
            comment: spot.comment_text().to_string(),
            rating: spot.rating,
        }
    }
}

/// Everything the profile screen shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    pub username: String,
    pub subtitle: &'static str,
    pub total_count: usize,
    pub average_rating: f64,
    pub entries: Vec<ProfileEntry>,
}

impl ProfileView {
    /// The average as shown: `0` with no tastings, one decimal otherwise.
    pub fn average_display(&self) -> String {
        if self.total_count == 0 {
            "0".to_string()
        } else {
            format!("{:.1}", self.average_rating)
        }
    }
}

/// View-model behind the profile screen.
pub struct ProfileViewModel<S: RemoteStore> {
    repo: Arc<BeerRepository<S>>,
    username: String,
}

impl<S: RemoteStore> ProfileViewModel<S> {
    pub fn new(repo: Arc<BeerRepository<S>>, username: impl Into<String>) -> Self {
        ProfileViewModel {
            repo,
            username: username.into(),
        }
    }

    pub fn view(&self) -> ProfileView {
        let spots = self.repo.spots();
        ProfileView {
            username: self.username.clone(),
            subtitle: SUBTITLE,
            total_count: spots.len(),
            average_rating: average_rating(&spots),
            entries: spots.iter().map(ProfileEntry::from).collect(),
        }
    }
}

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;
