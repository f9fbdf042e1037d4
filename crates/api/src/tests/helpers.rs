// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::auth::AuthenticationService;
use crate::handlers;
use crate::request_response::{AddVideoRequest, CreateQuizRequest};
use top_ten_domain::Account;
use top_ten_persistence::Persistence;

/// A deadline safely in the past (1970-01-01T00:00:01Z), so lists are
/// open to every viewer while the quiz itself stays active.
pub const PAST_DEADLINE: i64 = 1;

/// A deadline safely in the future (2100-01-01T00:00:00Z), so lists
/// stay hidden from non-owners.
pub const FUTURE_DEADLINE: i64 = 4_102_444_800;

pub fn create_test_db() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database")
}

/// Logs in a fresh test identity and returns its account.
pub fn login(db: &mut Persistence, name: &str) -> Account {
    let provider_ref = format!("provider-{}", name.to_lowercase());
    let email = format!("{}@example.com", name.to_lowercase());
    let (_token, account) =
        AuthenticationService::login(db, &provider_ref, name, &email).expect("login");
    account
}

/// Creates a quiz as `creator` and returns (`quiz_id`, creator's `list_id`).
pub fn create_quiz(db: &mut Persistence, creator: &Account, deadline: i64) -> (i64, i64) {
    let response = handlers::create_quiz(
        db,
        creator.account_id,
        &CreateQuizRequest {
            name: String::from("Test Quiz"),
            deadline,
        },
    )
    .expect("create quiz");
    (response.quiz_id, response.list_id)
}

/// Joins `account` to the quiz and returns its new list id.
pub fn join(db: &mut Persistence, account: &Account, quiz_id: i64) -> i64 {
    handlers::participate(db, account.account_id, quiz_id)
        .expect("participate")
        .list_id
}

/// Adds one video to the list and returns the video id.
pub fn add_video(db: &mut Persistence, account: &Account, list_id: i64, slug: &str) -> i64 {
    handlers::add_video(
        db,
        account.account_id,
        list_id,
        &AddVideoRequest {
            url: format!("https://videos.example/{slug}"),
            reference_id: format!("ref-{slug}"),
        },
    )
    .expect("add video")
    .video_id
}

/// Finalizes the list as its owner.
pub fn finalize(db: &mut Persistence, account: &Account, list_id: i64) {
    handlers::finalize_list(db, account.account_id, list_id).expect("finalize list");
}
