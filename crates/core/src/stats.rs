// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregates shown on the profile screen.

use crate::beer::BeerSpot;

/// Rounds `value` to `decimals` places, with ties going up.
///
/// The value is first snapped to nine significant fractional digits so that
/// binary noise (`4.35` stored as `4.3499999...`) does not defeat the tie rule.
pub fn round_half_up(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = (value * factor * 1e9).round() / 1e9;
    (scaled + 0.5).floor() / factor
}

/// Mean rating rounded to one decimal place, or `0.0` when there are no spots.
pub fn average_rating(spots: &[BeerSpot]) -> f64 {
    if spots.is_empty() {
        return 0.0;
    }
    let sum: f64 = spots.iter().map(|s| s.rating.value()).sum();
    round_half_up(sum / spots.len() as f64, 1)
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
