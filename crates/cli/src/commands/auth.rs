// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::config::Config;
use crate::error::Result;

use super::{block_on, open_store};

/// Sign in with email and password and persist the session.
pub fn login(email: &str, password: &str) -> Result<()> {
    let config = Config::resolve()?;
    let store = open_store(&config)?;
    let session = block_on(store.sign_in_with_password(email, password))??;
    let who = session.user_email.as_deref().unwrap_or(email);
    println!("Signed in as {}", who);
    Ok(())
}

/// Forget the persisted session.
pub fn logout() -> Result<()> {
    let config = Config::resolve()?;
    let store = open_store(&config)?;
    if block_on(store.sign_out())?? {
        println!("Signed out");
    } else {
        println!("Not signed in");
    }
    Ok(())
}
