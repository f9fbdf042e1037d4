// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment queries, including the scoring join used for quiz results.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::error::PersistenceError;
use crate::schema::{accounts, assignments, lists};
use top_ten_domain::{Assignment, ScoredAssignment};

/// Diesel Queryable struct for assignment rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = assignments)]
struct AssignmentRow {
    list_id: i64,
    guesser_account_id: i64,
    assignee_account_id: i64,
}

impl From<AssignmentRow> for Assignment {
    fn from(row: AssignmentRow) -> Self {
        Self {
            list_id: row.list_id,
            guesser_account_id: row.guesser_account_id,
            assignee_account_id: row.assignee_account_id,
        }
    }
}

/// Retrieves the assignment a guesser holds on a list, if any.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the guesser has not assigned anyone to the list.
pub fn get_assignment_for_list_and_guesser(
    conn: &mut SqliteConnection,
    list_id: i64,
    guesser_account_id: i64,
) -> Result<Option<Assignment>, PersistenceError> {
    debug!(
        "Looking up assignment on list {} by guesser {}",
        list_id, guesser_account_id
    );

    let result: Result<AssignmentRow, diesel::result::Error> = assignments::table
        .filter(assignments::list_id.eq(list_id))
        .filter(assignments::guesser_account_id.eq(guesser_account_id))
        .select(AssignmentRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves every assignment placed on lists of a quiz, joined with the
/// guesser's display name and the list creator's account id for scoring.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_scored_assignments_for_quiz(
    conn: &mut SqliteConnection,
    quiz_id: i64,
) -> Result<Vec<ScoredAssignment>, PersistenceError> {
    let rows: Vec<(i64, String, i64, i64, i64)> = assignments::table
        .inner_join(lists::table.on(lists::list_id.eq(assignments::list_id)))
        .inner_join(accounts::table.on(accounts::account_id.eq(assignments::guesser_account_id)))
        .filter(lists::quiz_id.eq(quiz_id))
        .select((
            assignments::guesser_account_id,
            accounts::name,
            assignments::list_id,
            assignments::assignee_account_id,
            lists::account_id,
        ))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(
            |(guesser_account_id, guesser_name, list_id, assignee_account_id, list_creator_account_id)| {
                ScoredAssignment {
                    guesser_account_id,
                    guesser_name,
                    list_id,
                    assignee_account_id,
                    list_creator_account_id,
                }
            },
        )
        .collect())
}

/// Retrieves every participant in a quiz as (account id, display name,
/// list id). A participant is an account that holds a list for the quiz.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_participants_for_quiz(
    conn: &mut SqliteConnection,
    quiz_id: i64,
) -> Result<Vec<(i64, String, i64)>, PersistenceError> {
    let rows: Vec<(i64, String, i64)> = lists::table
        .inner_join(accounts::table.on(accounts::account_id.eq(lists::account_id)))
        .filter(lists::quiz_id.eq(quiz_id))
        .order(accounts::account_id.asc())
        .select((accounts::account_id, accounts::name, lists::list_id))
        .load(conn)?;

    Ok(rows)
}
