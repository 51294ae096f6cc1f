// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::cli::ConfigCommand;
use crate::config::{config_path, Config};
use crate::error::{Error, Result};

/// Execute a config subcommand.
pub fn run(cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let config = Config::resolve()?;
            print!("{}", render(&config)?);
        }
        ConfigCommand::Path => println!("{}", config_path().display()),
        ConfigCommand::Set {
            url,
            anon_key,
            username,
        } => {
            let path = config_path();
            let mut config = Config::load_or_default(&path)?;
            update(&mut config, url, anon_key, username)?;
            config.save(&path)?;
            println!("Saved {}", path.display());
        }
    }
    Ok(())
}

/// Apply the given settings, rejecting a combination that would not load.
pub(crate) fn update(
    config: &mut Config,
    url: Option<String>,
    anon_key: Option<String>,
    username: Option<String>,
) -> Result<()> {
    config.apply_overrides(url, anon_key);
    if let Some(username) = username {
        config.profile.username = username;
    }
    match config.remote.validate() {
        Some(msg) => Err(Error::Config(msg)),
        None => Ok(()),
    }
}

/// Render the configuration as TOML with the key masked.
pub(crate) fn render(config: &Config) -> Result<String> {
    let mut shown = config.clone();
    shown.remote.anon_key = shown.remote.anon_key.as_deref().map(mask);
    toml::to_string_pretty(&shown)
        .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))
}

/// Keep only the last four characters of a secret.
fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
