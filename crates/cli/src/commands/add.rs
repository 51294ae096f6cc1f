// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use bm_core::BeerType;

use crate::error::Result;
use crate::viewmodel::{AddBeerForm, AddBeerParams};

use super::{block_on, open_repository};

pub fn run(
    name: String,
    beer_type: BeerType,
    rating: u8,
    comment: String,
    lat: Option<String>,
    lon: Option<String>,
) -> Result<()> {
    let (repo, _) = open_repository()?;
    let params = AddBeerParams {
        latitude: lat,
        longitude: lon,
    };
    let mut form = AddBeerForm::new(repo.clone(), &params);
    form.set_name(name);
    form.set_beer_type(beer_type);
    form.set_stars(rating);
    form.set_comment(comment);

    let submitted = block_on(form.submit())??;
    repo.close();

    println!("{}", submitted.message);
    if let Some(spot) = submitted.spot {
        println!("  id: {}", spot.id);
    }
    Ok(())
}
