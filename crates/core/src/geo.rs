// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! WGS-84 coordinates and map regions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Fallback location used when no tapped coordinate is available.
pub const DEFAULT_COORDINATE: Coordinate = Coordinate {
    latitude: 37.7749,
    longitude: -122.4194,
};

/// A point on the map in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate, rejecting non-finite or out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !is_valid_latitude(latitude) {
            return Err(Error::InvalidCoordinate {
                reason: format!("latitude {} is outside -90..=90", latitude),
            });
        }
        if !is_valid_longitude(longitude) {
            return Err(Error::InvalidCoordinate {
                reason: format!("longitude {} is outside -180..=180", longitude),
            });
        }
        Ok(Coordinate {
            latitude,
            longitude,
        })
    }

    /// Builds a coordinate from optional textual parameters.
    ///
    /// Each component falls back to [`DEFAULT_COORDINATE`] on its own when it
    /// is missing, unparsable or out of range.
    pub fn from_params(latitude: Option<&str>, longitude: Option<&str>) -> Self {
        let latitude = latitude
            .and_then(parse_degrees)
            .filter(|v| is_valid_latitude(*v))
            .unwrap_or(DEFAULT_COORDINATE.latitude);
        let longitude = longitude
            .and_then(parse_degrees)
            .filter(|v| is_valid_longitude(*v))
            .unwrap_or(DEFAULT_COORDINATE.longitude);
        Coordinate {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

fn parse_degrees(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn is_valid_latitude(v: f64) -> bool {
    v.is_finite() && (-90.0..=90.0).contains(&v)
}

fn is_valid_longitude(v: f64) -> bool {
    v.is_finite() && (-180.0..=180.0).contains(&v)
}

/// Visible map area: a center plus the span shown in each direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Region {
    pub center: Coordinate,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Default for Region {
    fn default() -> Self {
        Region {
            center: DEFAULT_COORDINATE,
            latitude_delta: 0.0922,
            longitude_delta: 0.0421,
        }
    }
}

#[cfg(test)]
#[path = "geo_tests.rs"]
mod tests;
