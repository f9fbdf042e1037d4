// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Account and session mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{debug, info};

use crate::error::PersistenceError;
use crate::schema::{accounts, sessions};
use crate::sqlite::get_last_insert_rowid;

/// Inserts a new account and returns its generated id.
///
/// # Errors
///
/// Returns an error if the insert fails, including a unique violation
/// when the provider reference is already linked to an account.
pub fn insert_account(
    conn: &mut SqliteConnection,
    name: &str,
    email: &str,
    provider_ref: &str,
) -> Result<i64, PersistenceError> {
    info!("Creating account for provider reference");

    diesel::insert_into(accounts::table)
        .values((
            accounts::name.eq(name),
            accounts::email.eq(email),
            accounts::provider_ref.eq(provider_ref),
        ))
        .execute(conn)?;

    get_last_insert_rowid(conn)
}

/// Inserts a new session for an account and returns its generated id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_session(
    conn: &mut SqliteConnection,
    session_token: &str,
    account_id: i64,
    created_at: &str,
    expires_at: &str,
) -> Result<i64, PersistenceError> {
    debug!("Creating session for account {}", account_id);

    diesel::insert_into(sessions::table)
        .values((
            sessions::session_token.eq(session_token),
            sessions::account_id.eq(account_id),
            sessions::created_at.eq(created_at),
            sessions::expires_at.eq(expires_at),
        ))
        .execute(conn)?;

    get_last_insert_rowid(conn)
}

/// Deletes the session holding the given token.
///
/// # Errors
///
/// Returns an error if the delete fails.
/// Returns `Ok(false)` if no session held the token.
pub fn delete_session(
    conn: &mut SqliteConnection,
    session_token: &str,
) -> Result<bool, PersistenceError> {
    debug!("Deleting session");

    let deleted = diesel::delete(sessions::table.filter(sessions::session_token.eq(session_token)))
        .execute(conn)?;

    Ok(deleted > 0)
}

/// Deletes sessions whose expiry is at or before the given instant.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_expired_sessions(
    conn: &mut SqliteConnection,
    now: &str,
) -> Result<usize, PersistenceError> {
    let deleted = diesel::delete(sessions::table.filter(sessions::expires_at.le(now)))
        .execute(conn)?;

    if deleted > 0 {
        info!("Deleted {} expired sessions", deleted);
    }
    Ok(deleted)
}
