// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment (guess) tests: ordered checks, upsert, access boundary.

use super::helpers::{
    create_quiz, create_test_db, finalize, join, login, FUTURE_DEADLINE, PAST_DEADLINE,
};
use crate::error::ApiError;
use crate::handlers;
use crate::request_response::AssignListRequest;
use top_ten_persistence::Persistence;

fn assign(
    db: &mut Persistence,
    guesser_account_id: i64,
    list_id: i64,
    assignee_account_id: i64,
) -> Result<crate::request_response::AssignListResponse, ApiError> {
    handlers::assign_list(
        db,
        guesser_account_id,
        list_id,
        &AssignListRequest {
            assignee_account_id,
        },
    )
}

#[test]
fn test_assign_and_reassign_keeps_latest_guess() {
    let mut db = create_test_db();
    let alice = login(&mut db, "Alice");
    let bob = login(&mut db, "Bob");
    let carol = login(&mut db, "Carol");
    let (quiz_id, alice_list) = create_quiz(&mut db, &alice, PAST_DEADLINE);
    join(&mut db, &bob, quiz_id);
    join(&mut db, &carol, quiz_id);
    finalize(&mut db, &alice, alice_list);

    assign(&mut db, bob.account_id, alice_list, carol.account_id).unwrap();
    assign(&mut db, bob.account_id, alice_list, alice.account_id).unwrap();

    let view = handlers::get_list(&mut db, bob.account_id, alice_list)
        .unwrap()
        .list;
    let assignment = view.assignment.expect("exactly one guess");
    assert_eq!(assignment.assignee_account_id, alice.account_id);
}

#[test]
fn test_assign_to_unknown_list_is_not_found() {
    let mut db = create_test_db();
    let alice = login(&mut db, "Alice");

    let result = assign(&mut db, alice.account_id, 999, alice.account_id);
    assert!(
        matches!(result, Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "List")
    );
}

#[test]
fn test_assign_to_draft_list_is_rejected_first() {
    let mut db = create_test_db();
    let alice = login(&mut db, "Alice");
    let bob = login(&mut db, "Bob");
    let (quiz_id, alice_list) = create_quiz(&mut db, &alice, PAST_DEADLINE);
    join(&mut db, &bob, quiz_id);

    // Not finalized; the draft check fires before any other rule.
    let result = assign(&mut db, bob.account_id, alice_list, alice.account_id);
    assert!(
        matches!(result, Err(ApiError::Forbidden { ref message }) if message.contains("has not been finalized yet"))
    );
}

#[test]
fn test_draft_check_precedes_quiz_state_check() {
    let mut db = create_test_db();
    let alice = login(&mut db, "Alice");
    let bob = login(&mut db, "Bob");
    let (quiz_id, alice_list) = create_quiz(&mut db, &alice, PAST_DEADLINE);
    join(&mut db, &bob, quiz_id);
    handlers::complete_quiz(&mut db, alice.account_id, quiz_id).unwrap();

    // Draft list in a completed quiz: the finalization refusal wins.
    let result = assign(&mut db, bob.account_id, alice_list, alice.account_id);
    assert!(
        matches!(result, Err(ApiError::Forbidden { ref message }) if message.contains("has not been finalized yet"))
    );
}

#[test]
fn test_assign_frozen_after_quiz_completion() {
    let mut db = create_test_db();
    let alice = login(&mut db, "Alice");
    let bob = login(&mut db, "Bob");
    let (quiz_id, alice_list) = create_quiz(&mut db, &alice, PAST_DEADLINE);
    join(&mut db, &bob, quiz_id);
    finalize(&mut db, &alice, alice_list);
    handlers::complete_quiz(&mut db, alice.account_id, quiz_id).unwrap();

    // Everything else about this guess would be valid.
    let result = assign(&mut db, bob.account_id, alice_list, alice.account_id);
    assert!(
        matches!(result, Err(ApiError::Forbidden { ref message }) if message.contains("is completed"))
    );
}

#[test]
fn test_assign_before_deadline_is_access_denied_for_non_owner() {
    let mut db = create_test_db();
    let alice = login(&mut db, "Alice");
    let bob = login(&mut db, "Bob");
    let (quiz_id, alice_list) = create_quiz(&mut db, &alice, FUTURE_DEADLINE);
    join(&mut db, &bob, quiz_id);
    finalize(&mut db, &alice, alice_list);

    let result = assign(&mut db, bob.account_id, alice_list, alice.account_id);
    assert!(
        matches!(result, Err(ApiError::Forbidden { ref message }) if message.contains("may not access"))
    );
}

#[test]
fn test_assign_to_non_participant_is_forbidden() {
    let mut db = create_test_db();
    let alice = login(&mut db, "Alice");
    let bob = login(&mut db, "Bob");
    let outsider = login(&mut db, "Mallory");
    let (quiz_id, alice_list) = create_quiz(&mut db, &alice, PAST_DEADLINE);
    join(&mut db, &bob, quiz_id);
    finalize(&mut db, &alice, alice_list);

    let result = assign(&mut db, bob.account_id, alice_list, outsider.account_id);
    assert!(
        matches!(result, Err(ApiError::Forbidden { ref message }) if message.contains("does not participate"))
    );
}

#[test]
fn test_owner_may_guess_own_list_before_deadline() {
    // Access control always lets the owner through; whether guessing
    // your own list is sensible is the players' problem.
    let mut db = create_test_db();
    let alice = login(&mut db, "Alice");
    let (_, alice_list) = create_quiz(&mut db, &alice, FUTURE_DEADLINE);
    finalize(&mut db, &alice, alice_list);

    let result = assign(&mut db, alice.account_id, alice_list, alice.account_id);
    assert!(result.is_ok());
}
