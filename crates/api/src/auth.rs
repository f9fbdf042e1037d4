// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session-based authentication over external login providers.
//!
//! The identity provider itself (OAuth, OIDC) lives outside this crate.
//! By the time `login` is called, the transport layer has already
//! verified the external identity and hands us the provider's stable
//! reference plus profile fields. This module links that reference to
//! an account (creating one on first login) and manages sessions.

use thiserror::Error;
use time::{Duration, OffsetDateTime};
use tracing::info;

use crate::error::ApiError;
use top_ten_domain::Account;
use top_ten_persistence::{mutations, queries, Persistence, PersistenceError, SessionData};

/// An authenticated account resolved from a session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedAccount {
    /// The account's canonical id.
    pub account_id: i64,
    /// The account's display name.
    pub name: String,
}

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Authentication failed.
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// A persistence operation failed during authentication.
    #[error("Database error: {0}")]
    Persistence(#[from] PersistenceError),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Persistence(e) => Self::Internal {
                message: e.to_string(),
            },
        }
    }
}

/// Authentication service for session-based authentication.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Default session expiration duration (30 days).
    const DEFAULT_SESSION_EXPIRATION: Duration = Duration::days(30);

    /// Logs in an externally verified identity and creates a session.
    ///
    /// The account is looked up by the provider reference; on first
    /// login an account is created from the supplied profile fields.
    /// Account creation and session creation commit as one unit.
    ///
    /// # Errors
    ///
    /// Returns an error if authentication fails.
    pub fn login(
        persistence: &mut Persistence,
        provider_ref: &str,
        name: &str,
        email: &str,
    ) -> Result<(String, Account), AuthError> {
        if provider_ref.is_empty() {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Provider reference cannot be empty"),
            });
        }

        let session_token: String = Self::generate_session_token();
        let created_at: String = format_timestamp(OffsetDateTime::now_utc())?;
        let expires_at: String =
            format_timestamp(OffsetDateTime::now_utc() + Self::DEFAULT_SESSION_EXPIRATION)?;

        let name = name.to_string();
        let email = email.to_string();
        let provider_ref = provider_ref.to_string();
        let token = session_token.clone();

        let account: Account = persistence.transaction(move |conn| {
            let account = match queries::accounts::get_account_by_provider_ref(conn, &provider_ref)?
            {
                Some(existing) => existing,
                None => {
                    let account_id =
                        mutations::accounts::insert_account(conn, &name, &email, &provider_ref)?;
                    info!("Created account {} on first login", account_id);
                    Account {
                        account_id,
                        name,
                        email,
                        provider_ref,
                    }
                }
            };

            mutations::accounts::create_session(
                conn,
                &token,
                account.account_id,
                &created_at,
                &expires_at,
            )?;

            Ok::<Account, AuthError>(account)
        })?;

        Ok((session_token, account))
    }

    /// Validates a session token and returns the authenticated account.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is invalid or expired, or if the
    /// linked account no longer resolves.
    pub fn validate_session(
        persistence: &mut Persistence,
        session_token: &str,
    ) -> Result<(AuthenticatedAccount, Account), AuthError> {
        let (session, account): (SessionData, Option<Account>) =
            persistence.transaction(|conn| {
                let session = queries::accounts::get_session_by_token(conn, session_token)?
                    .ok_or_else(|| AuthError::AuthenticationFailed {
                        reason: String::from("Invalid session token"),
                    })?;
                let account = queries::accounts::get_account_by_id(conn, session.account_id)?;
                Ok::<_, AuthError>((session, account))
            })?;

        let expires_at: OffsetDateTime = OffsetDateTime::parse(
            &session.expires_at,
            &time::format_description::well_known::Iso8601::DEFAULT,
        )
        .map_err(|e| AuthError::AuthenticationFailed {
            reason: format!("Failed to parse session expiration: {e}"),
        })?;

        if OffsetDateTime::now_utc() > expires_at {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Session expired"),
            });
        }

        let account = account.ok_or_else(|| AuthError::AuthenticationFailed {
            reason: String::from("Account not found"),
        })?;

        let authenticated = AuthenticatedAccount {
            account_id: account.account_id,
            name: account.name.clone(),
        };

        Ok((authenticated, account))
    }

    /// Logs out by deleting the session.
    ///
    /// Deleting an unknown token is not an error; logout is idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be deleted.
    pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), AuthError> {
        persistence.transaction(|conn| {
            mutations::accounts::delete_session(conn, session_token)?;
            Ok::<(), AuthError>(())
        })
    }

    /// Generates a session token.
    ///
    /// In a production system, this would use a cryptographically secure
    /// random number generator. For simplicity, we use a timestamp-based
    /// approach here.
    fn generate_session_token() -> String {
        use std::time::{SystemTime, UNIX_EPOCH};
        let timestamp: u128 = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_nanos();
        format!("session_{timestamp}_{}", rand::random::<u64>())
    }
}

fn format_timestamp(at: OffsetDateTime) -> Result<String, AuthError> {
    at.format(&time::format_description::well_known::Iso8601::DEFAULT)
        .map_err(|e| AuthError::AuthenticationFailed {
            reason: format!("Failed to format timestamp: {e}"),
        })
}
