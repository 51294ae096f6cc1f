// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core beer tasting types for BeerMap.
//!
//! This module contains the domain entity ([`BeerSpot`]), the draft a user
//! submits before the store assigns an identity ([`NewBeerSpot`]), and the
//! value types they are built from: [`BeerType`], [`Rating`] and [`SpotId`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::geo::Coordinate;

/// Beer style labels offered by the add-beer form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BeerType {
    #[default]
    #[serde(rename = "IPA")]
    Ipa,
    Lager,
    Stout,
    Porter,
    Pilsner,
    Wheat,
    Sour,
    /// Anything else, including labels this client does not know about.
    #[serde(other)]
    Other,
}

impl BeerType {
    /// Every style, in the order the form presents them.
    pub const ALL: [BeerType; 8] = [
        BeerType::Ipa,
        BeerType::Lager,
        BeerType::Stout,
        BeerType::Porter,
        BeerType::Pilsner,
        BeerType::Wheat,
        BeerType::Sour,
        BeerType::Other,
    ];

    /// Returns the display label, which is also the stored value.
    pub fn as_str(&self) -> &'static str {
        match self {
            BeerType::Ipa => "IPA",
            BeerType::Lager => "Lager",
            BeerType::Stout => "Stout",
            BeerType::Porter => "Porter",
            BeerType::Pilsner => "Pilsner",
            BeerType::Wheat => "Wheat",
            BeerType::Sour => "Sour",
            BeerType::Other => "Other",
        }
    }

    /// Labels of all styles.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(BeerType::as_str).collect()
    }
}

impl fmt::Display for BeerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BeerType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidBeerType(s.to_string()))
    }
}

/// A tasting score in the inclusive range 1 to 5.
///
/// Stored scores may be fractional; the form only produces whole stars.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rating(f64);

impl Rating {
    pub const MIN: f64 = 1.0;
    pub const MAX: f64 = 5.0;

    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(Error::InvalidRating(value))
        }
    }

    /// Whole-star rating, clamped into range.
    pub fn stars(stars: u8) -> Self {
        Rating(f64::from(stars.clamp(1, 5)))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Rating {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Rating::new(value)
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> f64 {
        rating.0
    }
}

impl fmt::Display for Rating {
    /// Whole numbers print without a fraction (`4`), others as given (`4.5`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Store-assigned identifier of a beer spot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpotId(String);

impl SpotId {
    pub fn new(id: impl Into<String>) -> Self {
        SpotId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SpotId {
    fn from(s: &str) -> Self {
        SpotId(s.to_string())
    }
}

/// A recorded beer tasting at a map location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeerSpot {
    pub id: SpotId,
    pub name: String,
    #[serde(rename = "type", default)]
    pub beer_type: BeerType,
    pub rating: Rating,
    #[serde(default)]
    pub comment: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BeerSpot {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    /// Comment text, or an empty string when none was given.
    pub fn comment_text(&self) -> &str {
        self.comment.as_deref().unwrap_or("")
    }
}

/// A beer spot that has not been stored yet.
///
/// Holds everything except the identity and timestamps the store assigns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewBeerSpot {
    pub name: String,
    #[serde(rename = "type")]
    pub beer_type: BeerType,
    pub rating: Rating,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl NewBeerSpot {
    /// Builds a draft from form input.
    ///
    /// The name is trimmed and must not be empty. A blank comment is dropped.
    pub fn new(
        name: &str,
        beer_type: BeerType,
        rating: Rating,
        comment: &str,
        at: Coordinate,
    ) -> Result<Self> {
        let draft = NewBeerSpot {
            name: name.trim().to_string(),
            beer_type,
            rating,
            comment: Some(comment.trim())
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            latitude: at.latitude,
            longitude: at.longitude,
            photo: None,
        };
        draft.validate()?;
        Ok(draft)
    }

    /// Checks the draft can be sent to the store.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::FieldEmpty { field: "Beer name" });
        }
        Ok(())
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

#[cfg(test)]
#[path = "beer_tests.rs"]
mod tests;
