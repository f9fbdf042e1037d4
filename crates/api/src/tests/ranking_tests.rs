// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! End-to-end ranking tests: full quiz rounds through the API surface.

use super::helpers::{create_quiz, create_test_db, finalize, join, login, PAST_DEADLINE};
use crate::handlers;
use crate::request_response::AssignListRequest;
use top_ten_domain::Account;
use top_ten_persistence::Persistence;

fn assign(db: &mut Persistence, guesser: &Account, list_id: i64, assignee: &Account) {
    handlers::assign_list(
        db,
        guesser.account_id,
        list_id,
        &AssignListRequest {
            assignee_account_id: assignee.account_id,
        },
    )
    .expect("assign");
}

#[test]
fn test_full_round_produces_expected_leaderboard() {
    let mut db = create_test_db();
    let alice = login(&mut db, "Alice");
    let bob = login(&mut db, "Bob");
    let carol = login(&mut db, "Carol");

    let (quiz_id, alice_list) = create_quiz(&mut db, &alice, PAST_DEADLINE);
    let bob_list = join(&mut db, &bob, quiz_id);
    let carol_list = join(&mut db, &carol, quiz_id);

    finalize(&mut db, &alice, alice_list);
    finalize(&mut db, &bob, bob_list);
    finalize(&mut db, &carol, carol_list);

    // Bob guesses both foreign lists right; Carol gets one of two;
    // Alice guesses nothing.
    assign(&mut db, &bob, alice_list, &alice);
    assign(&mut db, &bob, carol_list, &carol);
    assign(&mut db, &carol, alice_list, &alice);
    assign(&mut db, &carol, bob_list, &alice);

    handlers::complete_quiz(&mut db, alice.account_id, quiz_id).unwrap();
    let result = handlers::get_quiz_result(&mut db, quiz_id).unwrap();

    let observed: Vec<(usize, &str, usize)> = result
        .ranking
        .entries
        .iter()
        .map(|e| (e.rank, e.name.as_str(), e.number_of_correct_assignments))
        .collect();
    assert_eq!(observed, vec![(1, "Bob", 2), (2, "Carol", 1)]);

    // Personal breakdowns align with the leaderboard.
    let carol_result = &result.ranking.personal_results[1];
    assert_eq!(carol_result.account_id, carol.account_id);
    assert_eq!(carol_result.correct_assignments.len(), 1);
    assert_eq!(carol_result.incorrect_assignments.len(), 1);
}

#[test]
fn test_latest_guess_is_the_scored_one() {
    let mut db = create_test_db();
    let alice = login(&mut db, "Alice");
    let bob = login(&mut db, "Bob");

    let (quiz_id, alice_list) = create_quiz(&mut db, &alice, PAST_DEADLINE);
    let bob_list = join(&mut db, &bob, quiz_id);
    finalize(&mut db, &alice, alice_list);
    finalize(&mut db, &bob, bob_list);

    // Bob first guesses wrong, then corrects himself.
    assign(&mut db, &bob, alice_list, &bob);
    assign(&mut db, &bob, alice_list, &alice);

    handlers::complete_quiz(&mut db, alice.account_id, quiz_id).unwrap();
    let result = handlers::get_quiz_result(&mut db, quiz_id).unwrap();

    assert_eq!(result.ranking.entries.len(), 1);
    assert_eq!(result.ranking.entries[0].number_of_correct_assignments, 1);
}

#[test]
fn test_tied_scores_share_rank_and_skip() {
    let mut db = create_test_db();
    let alice = login(&mut db, "Alice");
    let bob = login(&mut db, "Bob");
    let carol = login(&mut db, "Carol");
    let dan = login(&mut db, "Dan");

    let (quiz_id, alice_list) = create_quiz(&mut db, &alice, PAST_DEADLINE);
    let bob_list = join(&mut db, &bob, quiz_id);
    join(&mut db, &carol, quiz_id);
    join(&mut db, &dan, quiz_id);
    finalize(&mut db, &alice, alice_list);
    finalize(&mut db, &bob, bob_list);

    // Bob and Carol each score 1; Dan scores 0.
    assign(&mut db, &bob, alice_list, &alice);
    assign(&mut db, &carol, bob_list, &bob);
    assign(&mut db, &dan, alice_list, &carol);

    handlers::complete_quiz(&mut db, alice.account_id, quiz_id).unwrap();
    let result = handlers::get_quiz_result(&mut db, quiz_id).unwrap();

    let observed: Vec<(usize, &str)> = result
        .ranking
        .entries
        .iter()
        .map(|e| (e.rank, e.name.as_str()))
        .collect();
    assert_eq!(observed, vec![(1, "Bob"), (1, "Carol"), (3, "Dan")]);
}

#[test]
fn test_quiz_without_guesses_yields_empty_ranking() {
    let mut db = create_test_db();
    let alice = login(&mut db, "Alice");
    let (quiz_id, _) = create_quiz(&mut db, &alice, PAST_DEADLINE);
    handlers::complete_quiz(&mut db, alice.account_id, quiz_id).unwrap();

    let result = handlers::get_quiz_result(&mut db, quiz_id).unwrap();
    assert!(result.ranking.entries.is_empty());
}
