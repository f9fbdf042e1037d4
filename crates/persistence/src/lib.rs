// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Top 10 quiz backend.
//!
//! This crate provides `SQLite` persistence for accounts, sessions,
//! quizzes, lists, videos, and assignments. It is built on Diesel with
//! embedded migrations.
//!
//! ## Structure
//!
//! - [`queries`] — read-only functions over a `&mut SqliteConnection`
//! - [`mutations`] — write functions over a `&mut SqliteConnection`
//! - [`Persistence`] — the connection adapter and transaction scope
//!
//! Queries and mutations take a raw connection rather than the adapter
//! so that callers can compose several of them inside one transaction
//! via [`Persistence::transaction`]. Every application-level operation
//! runs its reads, checks, and writes in a single transaction.
//!
//! ## Testing
//!
//! Tests run against unique shared in-memory databases. Each call to
//! [`Persistence::new_in_memory`] receives its own database instance,
//! so tests are isolated without touching the filesystem.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::connection::{AnsiTransactionManager, TransactionManager};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod data_models;
mod error;
pub mod mutations;
pub mod queries;
mod schema;
mod sqlite;

#[cfg(test)]
mod tests;

pub use data_models::SessionData;
pub use diesel::SqliteConnection;
pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based collisions.
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// `SQLite` persistence adapter.
///
/// Owns the connection. Callers run domain operations through
/// [`Persistence::transaction`], which hands the raw connection to a
/// closure and commits or rolls back as a unit.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        // Create a unique shared in-memory database name per call so tests are isolated.
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;

        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;

        // WAL gives better read concurrency for file-backed databases.
        sqlite::enable_wal_mode(&mut conn)?;

        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// This is a startup-time check required to ensure
    /// referential integrity constraints are enforced.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    /// Runs the closure inside a database transaction.
    ///
    /// Commits when the closure returns `Ok`, rolls back on `Err`. The
    /// closure receives the raw connection so it can compose functions
    /// from [`queries`] and [`mutations`]. The error type is generic so
    /// callers can fail the transaction with their own error as long as
    /// it can absorb a [`PersistenceError`].
    ///
    /// # Errors
    ///
    /// Returns the closure's error, or an error if the transaction
    /// itself fails.
    pub fn transaction<T, E, F>(&mut self, f: F) -> Result<T, E>
    where
        E: From<PersistenceError>,
        F: FnOnce(&mut SqliteConnection) -> Result<T, E>,
    {
        AnsiTransactionManager::begin_transaction(&mut self.conn)
            .map_err(PersistenceError::from)
            .map_err(E::from)?;
        match f(&mut self.conn) {
            Ok(value) => {
                AnsiTransactionManager::commit_transaction(&mut self.conn)
                    .map_err(PersistenceError::from)
                    .map_err(E::from)?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) =
                    AnsiTransactionManager::rollback_transaction(&mut self.conn)
                {
                    return Err(E::from(PersistenceError::from(rollback_err)));
                }
                Err(err)
            }
        }
    }
}
