// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use bm_core::{BeerType, Coordinate};
use clap::{Parser, Subcommand, ValueEnum};

use crate::error::Error;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Parse a beer type label, case-insensitively.
fn beer_type(s: &str) -> Result<BeerType, String> {
    s.parse().map_err(|e: bm_core::Error| e.to_string())
}

/// Parse a `LAT,LON` pair.
pub(crate) fn position(s: &str) -> Result<Coordinate, Error> {
    let invalid = || Error::InvalidPosition(s.to_string());
    let (lat, lon) = s.split_once(',').ok_or_else(invalid)?;
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lon: f64 = lon.trim().parse().map_err(|_| invalid())?;
    Ok(Coordinate::new(lat, lon)?)
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "beermap")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Pin beer tastings on a map and keep score")]
#[command(
    long_about = "Pin beer tastings on a map and keep score.\n\n\
    Spots are stored in a hosted PostgREST table; configure it in config.toml \
    or with BEERMAP_URL and BEERMAP_ANON_KEY."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the map: markers for every spot
    #[command(after_help = "\
Examples:
  beermap map                           List every marker
  beermap map --tap 37.8044,-122.2712   Tap the map to start adding a beer there
  beermap map --marker <id>             Show the details of one marker")]
    Map {
        /// Tap an empty spot on the map
        #[arg(
            long,
            value_name = "LAT,LON",
            value_parser = position,
            allow_hyphen_values = true,
            conflicts_with = "marker"
        )]
        tap: Option<Coordinate>,

        /// Tap a marker by spot id
        #[arg(long, value_name = "ID")]
        marker: Option<String>,

        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Record a beer tasting at a location
    #[command(after_help = "\
Examples:
  beermap add --name \"IPA Delight\" --rating 5 --comment \"Great hoppy flavor\"
  beermap add --name Guinness --type stout --lat 53.3419 --lon -6.2867")]
    Add {
        /// Name of the beer
        #[arg(long, short)]
        name: String,

        /// Beer type (IPA, Lager, Stout, Porter, Pilsner, Wheat, Sour, Other)
        #[arg(long = "type", short = 't', value_parser = beer_type, default_value = "IPA")]
        beer_type: BeerType,

        /// Stars from 1 to 5
        #[arg(long, short, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,

        /// Tasting notes
        #[arg(long, short, default_value = "")]
        comment: String,

        /// Latitude of the spot (defaults to San Francisco)
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<String>,

        /// Longitude of the spot (defaults to San Francisco)
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<String>,
    },

    /// Show your tasting totals and every beer you have recorded
    Profile {
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Sign in to the remote store
    Login {
        #[arg(long, short, value_parser = non_empty_string)]
        email: String,

        #[arg(long, short, value_parser = non_empty_string)]
        password: String,
    },

    /// Sign out and forget the saved session
    Logout,

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the resolved configuration
    Show,
    /// Print the location of the configuration file
    Path,
    /// Write settings to the configuration file
    #[command(after_help = "\
Examples:
  beermap config set --url https://xyz.supabase.co --anon-key <KEY>
  beermap config set --username \"Hop Hunter\"")]
    Set {
        /// Project URL of the hosted store
        #[arg(long)]
        url: Option<String>,

        /// Public (anon) API key
        #[arg(long)]
        anon_key: Option<String>,

        /// Name shown on the profile screen
        #[arg(long, value_parser = non_empty_string)]
        username: Option<String>,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
