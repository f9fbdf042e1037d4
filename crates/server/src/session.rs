// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session extraction for the server.
//!
//! This module provides an Axum extractor that validates the bearer
//! token from the Authorization header and resolves the calling
//! account before the handler runs.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::AppState;
use top_ten_api::{AuthenticatedAccount, AuthenticationService};
use top_ten_domain::Account;

/// Extracts the bearer token from an Authorization header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, SessionError> {
    let auth_header = headers
        .get("Authorization")
        .ok_or_else(|| {
            debug!("Missing Authorization header");
            SessionError::MissingAuthorizationHeader
        })?
        .to_str()
        .map_err(|_| {
            warn!("Invalid Authorization header encoding");
            SessionError::InvalidAuthorizationHeader
        })?;

    auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        warn!("Authorization header does not start with 'Bearer '");
        SessionError::InvalidAuthorizationHeader
    })
}

/// Extractor for authenticated accounts.
///
/// Validates the `Authorization: Bearer <token>` header against the
/// session store and yields the authenticated caller plus the full
/// account record.
///
/// # Errors
///
/// Rejects with HTTP 401 if the header is missing or malformed, the
/// token is unknown, or the session has expired.
pub struct SessionAccount(pub AuthenticatedAccount, pub Account);

impl FromRequestParts<AppState> for SessionAccount {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;

        let mut persistence = state.persistence.lock().await;
        let (authenticated, account) =
            AuthenticationService::validate_session(&mut persistence, token).map_err(|e| {
                warn!(error = %e, "Session validation failed");
                SessionError::InvalidSession(e.to_string())
            })?;

        debug!(
            account_id = authenticated.account_id,
            name = %authenticated.name,
            "Session validated successfully"
        );

        Ok(Self(authenticated, account))
    }
}

/// Session extraction errors.
///
/// These errors are returned when session validation fails and are
/// automatically converted to HTTP responses.
#[derive(Debug)]
pub enum SessionError {
    /// Authorization header is missing.
    MissingAuthorizationHeader,
    /// Authorization header format is invalid.
    InvalidAuthorizationHeader,
    /// Session validation failed.
    InvalidSession(String),
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::MissingAuthorizationHeader => (
                StatusCode::UNAUTHORIZED,
                String::from("Missing Authorization header"),
            ),
            Self::InvalidAuthorizationHeader => (
                StatusCode::UNAUTHORIZED,
                String::from("Invalid Authorization header"),
            ),
            Self::InvalidSession(message) => (StatusCode::UNAUTHORIZED, message),
        };
        (status, message).into_response()
    }
}
