// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted auth session.
//!
//! The session survives restarts as a small JSON file. Writes go through a
//! temporary file and a rename so a crash never leaves a truncated session.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{StoreError, StoreResult};

/// Tokens are treated as expired this long before their real expiry.
const EXPIRY_LEEWAY_SECS: i64 = 60;

/// A signed-in user's tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

impl Session {
    /// True if the access token should be refreshed before use.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(EXPIRY_LEEWAY_SECS) >= self.expires_at
    }
}

/// File-backed storage for the current [`Session`].
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SessionStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored session, if any.
    pub fn load(&self) -> StoreResult<Option<Session>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Session(format!("failed to read session: {}", e))),
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| StoreError::Session(format!("failed to parse session: {}", e)))
    }

    /// Persists `session`, replacing any previous one.
    pub fn save(&self, session: &Session) -> StoreResult<()> {
        let io_err = |e: std::io::Error| StoreError::Session(format!("failed to save session: {}", e));

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(session)
            .map_err(|e| StoreError::Session(format!("failed to encode session: {}", e)))?;

        let tmp = self.path.with_extension("json.tmp");
        // A leftover from a crash would keep its old permissions.
        let _ = fs::remove_file(&tmp);
        let written = write_private(&tmp, json.as_bytes()).and_then(|()| fs::rename(&tmp, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(io_err(e));
        }
        Ok(())
    }

    /// Removes the stored session. Returns whether one existed.
    pub fn clear(&self) -> StoreResult<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::Session(format!(
                "failed to remove session: {}",
                e
            ))),
        }
    }
}

/// Create `path` readable by the owner only, then write `contents`.
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    file.write_all(contents)?;
    file.sync_all()
}

