// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! PostgREST-backed remote store.
//!
//! Talks to a Supabase-style project: table rows under `/rest/v1/{table}`
//! and password/refresh-token grants under `/auth/v1/token`. Every request
//! carries the project's public key; the bearer token is the signed-in
//! session's access token when there is one, else the public key itself.

use std::time::Duration;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use super::query::Query;
use super::session::{Session, SessionStore};
use super::{RemoteStore, Row, StoreError, StoreFuture, StoreResult};

/// HTTP client for a single hosted project.
pub struct PostgrestStore {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
    sessions: SessionStore,
}

/// Body answered by the token endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    expires_in: i64,
    #[serde(default)]
    user: Option<TokenUser>,
}

#[derive(Debug, Deserialize)]
struct TokenUser {
    #[serde(default)]
    email: Option<String>,
}

impl PostgrestStore {
    /// Create a store client with its own connection pool.
    ///
    /// * `base_url` - Project URL, e.g. `https://xyz.supabase.co`.
    pub fn new(
        base_url: &str,
        anon_key: &str,
        timeout: Duration,
        sessions: SessionStore,
    ) -> StoreResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url, anon_key, sessions))
    }

    /// Create a store client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        base_url: &str,
        anon_key: &str,
        sessions: SessionStore,
    ) -> Self {
        PostgrestStore {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            sessions,
        }
    }

    /// The persisted session, if signed in.
    pub fn current_session(&self) -> StoreResult<Option<Session>> {
        self.sessions.load()
    }

    /// Sign in with email and password and persist the session.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> StoreResult<Session> {
        let body = serde_json::json!({ "email": email, "password": password });
        let session = self.request_token("password", &body).await?;
        self.sessions.save(&session)?;
        debug!(email, "signed in");
        Ok(session)
    }

    /// Exchange a refresh token for a new session and persist it.
    pub async fn refresh_session(&self, refresh_token: &str) -> StoreResult<Session> {
        let body = serde_json::json!({ "refresh_token": refresh_token });
        let session = self.request_token("refresh_token", &body).await?;
        self.sessions.save(&session)?;
        debug!("session refreshed");
        Ok(session)
    }

    /// Sign out: revoke the session remotely (best effort) and forget it locally.
    ///
    /// Returns whether a session existed.
    pub async fn sign_out(&self) -> StoreResult<bool> {
        if let Some(session) = self.sessions.load()? {
            let revoked = self
                .client
                .post(format!("{}/auth/v1/logout", self.base_url))
                .header("apikey", &self.anon_key)
                .bearer_auth(&session.access_token)
                .send()
                .await;
            match revoked {
                Ok(response) if !response.status().is_success() => {
                    debug!(status = response.status().as_u16(), "logout not acknowledged");
                }
                Err(e) => debug!(error = %e, "logout request failed"),
                Ok(_) => {}
            }
        }
        self.sessions.clear()
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    async fn request_token(&self, grant: &str, body: &serde_json::Value) -> StoreResult<Session> {
        let response = self
            .client
            .post(format!("{}/auth/v1/token", self.base_url))
            .query(&[("grant_type", grant)])
            .header("apikey", &self.anon_key)
            .json(body)
            .send()
            .await?;

        let token: TokenResponse = parse_response(response).await?;
        Ok(Session {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            expires_at: Utc::now() + chrono::Duration::seconds(token.expires_in),
            user_email: token.user.and_then(|u| u.email),
        })
    }

    /// Token for the `Authorization` header, refreshing an expired session.
    ///
    /// A session whose refresh token the auth service rejects is dropped and
    /// requests continue with the public key. Any other failure keeps the
    /// session on disk and is returned.
    async fn bearer_token(&self) -> StoreResult<String> {
        let Some(session) = self.sessions.load()? else {
            return Ok(self.anon_key.clone());
        };
        if !session.is_expired(Utc::now()) {
            return Ok(session.access_token);
        }

        debug!("access token expired, refreshing session");
        match self.refresh_session(&session.refresh_token).await {
            Ok(fresh) => Ok(fresh.access_token),
            Err(StoreError::Api { status, message }) if is_rejected_grant(status) => {
                warn!(status, message = %message, "refresh token rejected, continuing signed out");
                self.sessions.clear()?;
                Ok(self.anon_key.clone())
            }
            Err(e) => {
                warn!(error = %e, "session refresh failed, keeping session");
                Err(e)
            }
        }
    }
}

impl RemoteStore for PostgrestStore {
    fn select<'a>(&'a self, table: &'a str, query: &'a Query) -> StoreFuture<'a, Vec<Row>> {
        Box::pin(async move {
            let token = self.bearer_token().await?;
            debug!(table, "select");

            let response = self
                .client
                .get(self.table_url(table))
                .query(&query.to_params())
                .header("apikey", &self.anon_key)
                .bearer_auth(token)
                .send()
                .await?;

            parse_response(response).await
        })
    }

    fn insert<'a>(&'a self, table: &'a str, rows: Vec<Row>) -> StoreFuture<'a, Vec<Row>> {
        Box::pin(async move {
            let token = self.bearer_token().await?;
            debug!(table, rows = rows.len(), "insert");

            let response = self
                .client
                .post(self.table_url(table))
                .header("apikey", &self.anon_key)
                .header("Prefer", "return=representation")
                .bearer_auth(token)
                .json(&rows)
                .send()
                .await?;

            parse_response(response).await
        })
    }
}

// ---- private helpers ----

/// Statuses the auth service answers when a refresh token is invalid or revoked.
fn is_rejected_grant(status: u16) -> bool {
    matches!(status, 400 | 401)
}

/// Ensure the response has a success status code, else turn the body into
/// a [`StoreError::Api`].
async fn ensure_success(response: reqwest::Response) -> StoreResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<unreadable body>".to_string());
    Err(StoreError::Api {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// Parse a successful JSON response body into the expected type.
async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> StoreResult<T> {
    let response = ensure_success(response).await?;
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| StoreError::Decode(e.to_string()))
}

/// Human-readable message from an error body.
///
/// PostgREST answers `{"message": ...}`, the auth service `{"msg": ...}` or
/// `{"error_description": ...}`. Anything else is passed through.
pub(crate) fn error_message(body: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            ["message", "msg", "error_description", "error"]
                .iter()
                .find_map(|key| v.get(*key).and_then(|m| m.as_str()).map(str::to_string))
        })
        .filter(|m| !m.is_empty());

    match from_json {
        Some(message) => message,
        None if body.trim().is_empty() => "no response body".to_string(),
        None => body.trim().to_string(),
    }
}
