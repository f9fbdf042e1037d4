// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Account and session persistence tests.

use super::{create_test_db, seed_account};
use crate::{mutations, queries, PersistenceError};

#[test]
fn test_insert_and_get_account() {
    let mut db = create_test_db();
    let account_id = seed_account(&mut db, "Alice");

    let account = db
        .transaction(|conn| queries::accounts::get_account_by_id(conn, account_id))
        .unwrap()
        .expect("account should exist");

    assert_eq!(account.account_id, account_id);
    assert_eq!(account.name, "Alice");
    assert_eq!(account.email, "alice@example.com");
    assert_eq!(account.provider_ref, "provider-alice");
}

#[test]
fn test_get_account_by_provider_ref() {
    let mut db = create_test_db();
    let account_id = seed_account(&mut db, "Bob");

    let account = db
        .transaction(|conn| queries::accounts::get_account_by_provider_ref(conn, "provider-bob"))
        .unwrap()
        .expect("account should exist");

    assert_eq!(account.account_id, account_id);
}

#[test]
fn test_get_missing_account_returns_none() {
    let mut db = create_test_db();

    let account = db
        .transaction(|conn| queries::accounts::get_account_by_id(conn, 9999))
        .unwrap();

    assert!(account.is_none());
}

#[test]
fn test_duplicate_provider_ref_is_unique_violation() {
    let mut db = create_test_db();
    seed_account(&mut db, "Carol");

    let result = db.transaction(|conn| {
        mutations::accounts::insert_account(conn, "Other", "other@example.com", "provider-carol")
    });

    assert!(matches!(result, Err(PersistenceError::UniqueViolation(_))));
}

#[test]
fn test_session_roundtrip_and_delete() {
    let mut db = create_test_db();
    let account_id = seed_account(&mut db, "Dana");

    db.transaction(|conn| {
        mutations::accounts::create_session(
            conn,
            "token-abc",
            account_id,
            "2026-08-01T00:00:00Z",
            "2026-09-01T00:00:00Z",
        )
    })
    .unwrap();

    let session = db
        .transaction(|conn| queries::accounts::get_session_by_token(conn, "token-abc"))
        .unwrap()
        .expect("session should exist");
    assert_eq!(session.account_id, account_id);

    let deleted = db
        .transaction(|conn| mutations::accounts::delete_session(conn, "token-abc"))
        .unwrap();
    assert!(deleted);

    let gone = db
        .transaction(|conn| queries::accounts::get_session_by_token(conn, "token-abc"))
        .unwrap();
    assert!(gone.is_none());
}

#[test]
fn test_delete_expired_sessions() {
    let mut db = create_test_db();
    let account_id = seed_account(&mut db, "Eve");

    db.transaction(|conn| {
        mutations::accounts::create_session(
            conn,
            "token-old",
            account_id,
            "2026-01-01T00:00:00Z",
            "2026-02-01T00:00:00Z",
        )?;
        mutations::accounts::create_session(
            conn,
            "token-live",
            account_id,
            "2026-08-01T00:00:00Z",
            "2026-12-01T00:00:00Z",
        )
    })
    .unwrap();

    let deleted = db
        .transaction(|conn| {
            mutations::accounts::delete_expired_sessions(conn, "2026-08-15T00:00:00Z")
        })
        .unwrap();

    assert_eq!(deleted, 1);
    let live = db
        .transaction(|conn| queries::accounts::get_session_by_token(conn, "token-live"))
        .unwrap();
    assert!(live.is_some());
}
