// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Add-Beer form: a draft bound to a fixed coordinate.

use std::sync::Arc;

use bm_core::{BeerSpot, BeerType, Coordinate, NewBeerSpot, Rating};
use tracing::warn;

use super::AddBeerParams;
use crate::error::Result;
use crate::repository::BeerRepository;
use crate::store::RemoteStore;

const DEFAULT_STARS: u8 = 3;

/// Result of a successful submit.
#[derive(Debug, Clone, PartialEq)]
pub struct Submitted {
    /// The stored spot, if the store echoed it back.
    pub spot: Option<BeerSpot>,
    pub message: String,
}

/// View-model behind the Add-Beer screen.
pub struct AddBeerForm<S: RemoteStore> {
    repo: Arc<BeerRepository<S>>,
    coordinate: Coordinate,
    name: String,
    beer_type: BeerType,
    stars: u8,
    comment: String,
}

impl<S: RemoteStore> AddBeerForm<S> {
    /// Opens the form at the coordinate carried by `params`.
    ///
    /// Missing or unusable values fall back to the default coordinate, each
    /// component on its own.
    pub fn new(repo: Arc<BeerRepository<S>>, params: &AddBeerParams) -> Self {
        let coordinate =
            Coordinate::from_params(params.latitude.as_deref(), params.longitude.as_deref());
        AddBeerForm {
            repo,
            coordinate,
            name: String::new(),
            beer_type: BeerType::default(),
            stars: DEFAULT_STARS,
            comment: String::new(),
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn beer_type(&self) -> BeerType {
        self.beer_type
    }

    pub fn stars(&self) -> u8 {
        self.stars
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_beer_type(&mut self, beer_type: BeerType) {
        self.beer_type = beer_type;
    }

    /// Sets the star rating, clamped to 1..=5.
    pub fn set_stars(&mut self, stars: u8) {
        self.stars = stars.clamp(1, 5);
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    /// Builds the draft the form would submit.
    pub fn draft(&self) -> Result<NewBeerSpot> {
        Ok(NewBeerSpot::new(
            &self.name,
            self.beer_type,
            Rating::stars(self.stars),
            &self.comment,
            self.coordinate,
        )?)
    }

    /// Submits the draft.
    ///
    /// A blank name is rejected before any request. On success the fields
    /// reset (the coordinate stays); on failure they are kept for a retry.
    pub async fn submit(&mut self) -> Result<Submitted> {
        let draft = self.draft()?;
        let message = format!(
            "Added {} ({}) with rating {}/5 at coordinates {}",
            draft.name,
            draft.beer_type,
            self.stars,
            draft.coordinate()
        );
        match self.repo.add_beer(draft).await {
            Ok(spot) => {
                self.reset();
                Ok(Submitted { spot, message })
            }
            Err(e) => {
                warn!(error = %e, "failed to add beer spot");
                Err(e)
            }
        }
    }

    fn reset(&mut self) {
        self.name.clear();
        self.beer_type = BeerType::default();
        self.stars = DEFAULT_STARS;
        self.comment.clear();
    }
}

#[cfg(test)]
#[path = "add_beer_tests.rs"]
mod tests;
