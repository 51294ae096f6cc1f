// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use bm_core::Coordinate;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::display::{format_map, format_summary};
use crate::error::{Error, Result};
use crate::viewmodel::{AddBeerParams, MapView, MapViewModel};

use super::{block_on, open_repository, print_lines};

pub fn run(tap: Option<Coordinate>, marker: Option<String>, output: OutputFormat) -> Result<()> {
    let (repo, config) = open_repository()?;
    let vm = MapViewModel::new(repo.clone(), config.map.supported.into());

    // A tap on empty map surface needs no data.
    if let Some(at) = tap {
        print_add_params(&vm.tap_surface(at), output)?;
        return Ok(());
    }

    // Without a map there is nothing to draw the collection on.
    if marker.is_none() && !vm.is_supported() {
        print_map(&vm.view(), output)?;
        return Ok(());
    }

    let refreshed = block_on(repo.refresh())?;
    repo.close();

    if let Some(id) = marker {
        refreshed?;
        let summary = vm.tap_marker(&id).ok_or(Error::SpotNotFound(id))?;
        match output {
            OutputFormat::Text => print_lines(&format_summary(&summary)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        }
        return Ok(());
    }

    print_map(&vm.view(), output)?;
    // Stale data is still shown; the failure is reported after it.
    refreshed?;
    Ok(())
}

fn print_map(view: &MapView, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Text => print_lines(&format_map(view)),
        OutputFormat::Json => {
            let value = match view {
                MapView::Markers { region, markers } => {
                    json!({ "region": region, "markers": markers })
                }
                MapView::Placeholder { title, hint } => {
                    json!({ "placeholder": { "title": title, "hint": hint } })
                }
            };
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}

fn print_add_params(params: &AddBeerParams, output: OutputFormat) -> Result<()> {
    let lat = params.latitude.as_deref().unwrap_or_default();
    let lon = params.longitude.as_deref().unwrap_or_default();
    match output {
        OutputFormat::Text => {
            println!("Add a beer at {}, {}", lat, lon);
            println!("  beermap add --name <NAME> --lat {} --lon {}", lat, lon);
        }
        OutputFormat::Json => {
            let value = json!({ "latitude": lat, "longitude": lon });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}
