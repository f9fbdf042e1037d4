// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ListStatus, QuizStatus};
use std::str::FromStr;

#[test]
fn test_quiz_status_default_is_active() {
    assert_eq!(QuizStatus::default(), QuizStatus::Active);
}

#[test]
fn test_quiz_status_round_trips_through_strings() {
    for status in [QuizStatus::Active, QuizStatus::Completed] {
        let parsed = QuizStatus::from_str(status.as_str()).expect("valid status string");
        assert_eq!(parsed, status);
    }
}

#[test]
fn test_quiz_status_rejects_unknown_string() {
    assert!(QuizStatus::from_str("Paused").is_err());
}

#[test]
fn test_quiz_transitions_are_one_way() {
    assert!(QuizStatus::Active.can_transition_to(QuizStatus::Completed));
    assert!(!QuizStatus::Completed.can_transition_to(QuizStatus::Active));
    assert!(!QuizStatus::Active.can_transition_to(QuizStatus::Active));
    assert!(!QuizStatus::Completed.can_transition_to(QuizStatus::Completed));
}

#[test]
fn test_quiz_is_active() {
    assert!(QuizStatus::Active.is_active());
    assert!(!QuizStatus::Completed.is_active());
}

#[test]
fn test_list_status_default_is_draft() {
    assert_eq!(ListStatus::default(), ListStatus::Draft);
}

#[test]
fn test_list_status_round_trips_through_strings() {
    for status in [ListStatus::Draft, ListStatus::Finalized] {
        let parsed = ListStatus::from_str(status.as_str()).expect("valid status string");
        assert_eq!(parsed, status);
    }
}

#[test]
fn test_list_transitions_are_one_way() {
    assert!(ListStatus::Draft.can_transition_to(ListStatus::Finalized));
    assert!(!ListStatus::Finalized.can_transition_to(ListStatus::Draft));
    assert!(!ListStatus::Draft.can_transition_to(ListStatus::Draft));
    assert!(!ListStatus::Finalized.can_transition_to(ListStatus::Finalized));
}

#[test]
fn test_list_is_draft() {
    assert!(ListStatus::Draft.is_draft());
    assert!(!ListStatus::Finalized.is_draft());
}
