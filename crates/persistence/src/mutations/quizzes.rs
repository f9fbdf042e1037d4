// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Quiz mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use crate::error::PersistenceError;
use crate::schema::quizzes;
use crate::sqlite::get_last_insert_rowid;
use top_ten_domain::QuizStatus;

/// Inserts a new quiz and returns its generated id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_quiz(
    conn: &mut SqliteConnection,
    name: &str,
    creator_account_id: i64,
    deadline: i64,
) -> Result<i64, PersistenceError> {
    info!("Creating quiz '{}' for account {}", name, creator_account_id);

    diesel::insert_into(quizzes::table)
        .values((
            quizzes::name.eq(name),
            quizzes::creator_account_id.eq(creator_account_id),
            quizzes::deadline.eq(deadline),
            quizzes::status.eq(QuizStatus::Active.as_str()),
        ))
        .execute(conn)?;

    get_last_insert_rowid(conn)
}

/// Updates a quiz's lifecycle status.
///
/// # Errors
///
/// Returns an error if the update fails.
/// Returns [`PersistenceError::NotFound`] if the quiz does not exist.
pub fn update_quiz_status(
    conn: &mut SqliteConnection,
    quiz_id: i64,
    status: QuizStatus,
) -> Result<(), PersistenceError> {
    info!("Setting quiz {} status to {}", quiz_id, status);

    let updated = diesel::update(quizzes::table.filter(quizzes::quiz_id.eq(quiz_id)))
        .set(quizzes::status.eq(status.as_str()))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Quiz {quiz_id} not found"
        )));
    }
    Ok(())
}
