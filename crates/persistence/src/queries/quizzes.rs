// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Quiz queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use std::str::FromStr;
use tracing::debug;

use crate::error::PersistenceError;
use crate::schema::{accounts, lists, quizzes};
use top_ten_domain::{Quiz, QuizStatus};

/// Diesel Queryable struct for quiz rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = quizzes)]
struct QuizRow {
    quiz_id: i64,
    name: String,
    creator_account_id: i64,
    deadline: i64,
    status: String,
}

impl QuizRow {
    fn into_quiz(self) -> Result<Quiz, PersistenceError> {
        let status = QuizStatus::from_str(&self.status)
            .map_err(|e| PersistenceError::Other(e.to_string()))?;
        Ok(Quiz {
            quiz_id: self.quiz_id,
            name: self.name,
            creator_account_id: self.creator_account_id,
            deadline: self.deadline,
            status,
        })
    }
}

/// A quiz row joined with its creator's name and participant count,
/// for listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    /// The quiz.
    pub quiz: Quiz,
    /// The creator's display name.
    pub creator_name: String,
    /// Number of lists (participants) in the quiz.
    pub participant_count: i64,
}

/// Retrieves a quiz by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the quiz is not found.
pub fn get_quiz_by_id(
    conn: &mut SqliteConnection,
    quiz_id: i64,
) -> Result<Option<Quiz>, PersistenceError> {
    debug!("Looking up quiz by ID: {}", quiz_id);

    let result: Result<QuizRow, diesel::result::Error> = quizzes::table
        .filter(quizzes::quiz_id.eq(quiz_id))
        .select(QuizRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_quiz()?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists all quizzes with creator names and participant counts,
/// newest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_quizzes(conn: &mut SqliteConnection) -> Result<Vec<QuizSummary>, PersistenceError> {
    debug!("Listing all quizzes");

    let rows: Vec<(QuizRow, String)> = quizzes::table
        .inner_join(accounts::table)
        .select((QuizRow::as_select(), accounts::name))
        .order(quizzes::quiz_id.desc())
        .load(conn)?;

    let mut summaries: Vec<QuizSummary> = Vec::with_capacity(rows.len());
    for (row, creator_name) in rows {
        let participant_count: i64 = lists::table
            .filter(lists::quiz_id.eq(row.quiz_id))
            .count()
            .get_result(conn)?;
        summaries.push(QuizSummary {
            quiz: row.into_quiz()?,
            creator_name,
            participant_count,
        });
    }

    Ok(summaries)
}
