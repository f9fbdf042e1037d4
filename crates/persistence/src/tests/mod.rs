// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod account_tests;

use crate::{mutations, Persistence};

pub fn create_test_db() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database")
}

pub fn seed_account(db: &mut Persistence, name: &str) -> i64 {
    let email = format!("{}@example.com", name.to_lowercase());
    let provider_ref = format!("provider-{}", name.to_lowercase());
    db.transaction(|conn| mutations::accounts::insert_account(conn, name, &email, &provider_ref))
        .expect("insert account")
}

pub fn seed_quiz(db: &mut Persistence, name: &str, creator_account_id: i64, deadline: i64) -> i64 {
    db.transaction(|conn| mutations::quizzes::insert_quiz(conn, name, creator_account_id, deadline))
        .expect("insert quiz")
}

pub fn seed_list(db: &mut Persistence, account_id: i64, quiz_id: i64) -> i64 {
    db.transaction(|conn| mutations::lists::insert_list(conn, account_id, quiz_id))
        .expect("insert list")
}
