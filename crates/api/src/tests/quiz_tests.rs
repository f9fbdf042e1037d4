// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Quiz lifecycle tests: creation, participation, completion, listing.

use super::helpers::{create_quiz, create_test_db, join, login, FUTURE_DEADLINE, PAST_DEADLINE};
use crate::error::ApiError;
use crate::handlers;
use crate::request_response::CreateQuizRequest;

#[test]
fn test_create_quiz_provisions_creator_list() {
    let mut db = create_test_db();
    let alice = login(&mut db, "Alice");

    let (quiz_id, list_id) = create_quiz(&mut db, &alice, FUTURE_DEADLINE);

    let quiz = handlers::get_quiz(&mut db, alice.account_id, quiz_id).unwrap();
    assert_eq!(quiz.creator_name, "Alice");
    assert_eq!(quiz.status, "Active");
    assert_eq!(quiz.participants.len(), 1);
    assert_eq!(quiz.viewer_list_id, Some(list_id));
}

#[test]
fn test_create_quiz_rejects_empty_name() {
    let mut db = create_test_db();
    let alice = login(&mut db, "Alice");

    let result = handlers::create_quiz(
        &mut db,
        alice.account_id,
        &CreateQuizRequest {
            name: String::from("   "),
            deadline: FUTURE_DEADLINE,
        },
    );

    assert!(matches!(result, Err(ApiError::InvalidInput { field, .. }) if field == "name"));
}

#[test]
fn test_create_quiz_rejects_invalid_deadline() {
    let mut db = create_test_db();
    let alice = login(&mut db, "Alice");

    let result = handlers::create_quiz(
        &mut db,
        alice.account_id,
        &CreateQuizRequest {
            name: String::from("Quiz"),
            deadline: 0,
        },
    );

    assert!(matches!(result, Err(ApiError::InvalidInput { field, .. }) if field == "deadline"));
}

#[test]
fn test_participate_provisions_a_list() {
    let mut db = create_test_db();
    let alice = login(&mut db, "Alice");
    let bob = login(&mut db, "Bob");
    let (quiz_id, alice_list) = create_quiz(&mut db, &alice, FUTURE_DEADLINE);

    let bob_list = join(&mut db, &bob, quiz_id);
    assert_ne!(bob_list, alice_list);

    let quiz = handlers::get_quiz(&mut db, bob.account_id, quiz_id).unwrap();
    assert_eq!(quiz.participants.len(), 2);
    assert_eq!(quiz.viewer_list_id, Some(bob_list));
}

#[test]
fn test_second_participate_is_conflict() {
    let mut db = create_test_db();
    let alice = login(&mut db, "Alice");
    let bob = login(&mut db, "Bob");
    let (quiz_id, _) = create_quiz(&mut db, &alice, FUTURE_DEADLINE);
    join(&mut db, &bob, quiz_id);

    let result = handlers::participate(&mut db, bob.account_id, quiz_id);

    assert!(
        matches!(result, Err(ApiError::Conflict { ref message }) if message.contains("already has a list"))
    );

    // No second list was created.
    let quiz = handlers::get_quiz(&mut db, bob.account_id, quiz_id).unwrap();
    assert_eq!(quiz.list_ids.len(), 2);
}

#[test]
fn test_creator_participate_again_is_conflict() {
    let mut db = create_test_db();
    let alice = login(&mut db, "Alice");
    let (quiz_id, _) = create_quiz(&mut db, &alice, FUTURE_DEADLINE);

    let result = handlers::participate(&mut db, alice.account_id, quiz_id);
    assert!(matches!(result, Err(ApiError::Conflict { .. })));
}

#[test]
fn test_participate_in_unknown_quiz_is_not_found() {
    let mut db = create_test_db();
    let alice = login(&mut db, "Alice");

    let result = handlers::participate(&mut db, alice.account_id, 999);
    assert!(
        matches!(result, Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Quiz")
    );
}

#[test]
fn test_complete_quiz_by_creator() {
    let mut db = create_test_db();
    let alice = login(&mut db, "Alice");
    let (quiz_id, _) = create_quiz(&mut db, &alice, PAST_DEADLINE);

    let response = handlers::complete_quiz(&mut db, alice.account_id, quiz_id).unwrap();
    assert_eq!(response.status, "Completed");

    let quiz = handlers::get_quiz(&mut db, alice.account_id, quiz_id).unwrap();
    assert_eq!(quiz.status, "Completed");
}

#[test]
fn test_complete_quiz_by_non_creator_is_forbidden() {
    let mut db = create_test_db();
    let alice = login(&mut db, "Alice");
    let bob = login(&mut db, "Bob");
    let (quiz_id, _) = create_quiz(&mut db, &alice, PAST_DEADLINE);

    let result = handlers::complete_quiz(&mut db, bob.account_id, quiz_id);
    assert!(
        matches!(result, Err(ApiError::Forbidden { ref message }) if message.contains("did not create quiz"))
    );
}

#[test]
fn test_complete_unknown_quiz_is_not_found() {
    let mut db = create_test_db();
    let alice = login(&mut db, "Alice");

    let result = handlers::complete_quiz(&mut db, alice.account_id, 999);
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_double_complete_is_conflict() {
    let mut db = create_test_db();
    let alice = login(&mut db, "Alice");
    let (quiz_id, _) = create_quiz(&mut db, &alice, PAST_DEADLINE);
    handlers::complete_quiz(&mut db, alice.account_id, quiz_id).unwrap();

    let result = handlers::complete_quiz(&mut db, alice.account_id, quiz_id);
    assert!(
        matches!(result, Err(ApiError::Conflict { ref message }) if message.contains("already completed"))
    );
}

#[test]
fn test_double_complete_by_non_creator_is_forbidden_first() {
    // The creator check runs before the already-completed check.
    let mut db = create_test_db();
    let alice = login(&mut db, "Alice");
    let bob = login(&mut db, "Bob");
    let (quiz_id, _) = create_quiz(&mut db, &alice, PAST_DEADLINE);
    handlers::complete_quiz(&mut db, alice.account_id, quiz_id).unwrap();

    let result = handlers::complete_quiz(&mut db, bob.account_id, quiz_id);
    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}

#[test]
fn test_result_of_active_quiz_is_forbidden() {
    let mut db = create_test_db();
    let alice = login(&mut db, "Alice");
    let (quiz_id, _) = create_quiz(&mut db, &alice, FUTURE_DEADLINE);

    let result = handlers::get_quiz_result(&mut db, quiz_id);
    assert!(
        matches!(result, Err(ApiError::Forbidden { ref message }) if message.contains("still active"))
    );
}

#[test]
fn test_list_quizzes_newest_first() {
    let mut db = create_test_db();
    let alice = login(&mut db, "Alice");
    let bob = login(&mut db, "Bob");
    let (first, _) = create_quiz(&mut db, &alice, FUTURE_DEADLINE);
    let (second, _) = create_quiz(&mut db, &bob, FUTURE_DEADLINE);
    join(&mut db, &bob, first);

    let listing = handlers::list_quizzes(&mut db).unwrap();

    assert_eq!(listing.quizzes.len(), 2);
    assert_eq!(listing.quizzes[0].quiz_id, second);
    assert_eq!(listing.quizzes[0].participant_count, 1);
    assert_eq!(listing.quizzes[1].quiz_id, first);
    assert_eq!(listing.quizzes[1].creator_name, "Alice");
    assert_eq!(listing.quizzes[1].participant_count, 2);
}

#[test]
fn test_get_unknown_quiz_is_not_found() {
    let mut db = create_test_db();
    let alice = login(&mut db, "Alice");

    let result = handlers::get_quiz(&mut db, alice.account_id, 999);
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}
