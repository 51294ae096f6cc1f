// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::cli::OutputFormat;
use crate::display::format_profile;
use crate::error::Result;
use crate::viewmodel::ProfileViewModel;

use super::{block_on, open_repository, print_lines};

pub fn run(output: OutputFormat) -> Result<()> {
    let (repo, config) = open_repository()?;
    let refreshed = block_on(repo.refresh())?;
    repo.close();

    let view = ProfileViewModel::new(repo, config.profile.username).view();
    match output {
        OutputFormat::Text => print_lines(&format_profile(&view)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
    }
    refreshed?;
    Ok(())
}
