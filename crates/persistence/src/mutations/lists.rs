// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! List and video mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{debug, info};

use crate::error::PersistenceError;
use crate::schema::{lists, videos};
use crate::sqlite::get_last_insert_rowid;
use top_ten_domain::ListStatus;

/// Inserts a new list for an account in a quiz and returns its generated
/// id. The database enforces one list per account per quiz.
///
/// # Errors
///
/// Returns an error if the insert fails, including a unique violation
/// when the account already holds a list for the quiz.
pub fn insert_list(
    conn: &mut SqliteConnection,
    account_id: i64,
    quiz_id: i64,
) -> Result<i64, PersistenceError> {
    info!("Creating list for account {} in quiz {}", account_id, quiz_id);

    diesel::insert_into(lists::table)
        .values((
            lists::account_id.eq(account_id),
            lists::quiz_id.eq(quiz_id),
            lists::status.eq(ListStatus::Draft.as_str()),
        ))
        .execute(conn)?;

    get_last_insert_rowid(conn)
}

/// Updates a list's lifecycle status.
///
/// # Errors
///
/// Returns an error if the update fails.
/// Returns [`PersistenceError::NotFound`] if the list does not exist.
pub fn update_list_status(
    conn: &mut SqliteConnection,
    list_id: i64,
    status: ListStatus,
) -> Result<(), PersistenceError> {
    info!("Setting list {} status to {}", list_id, status);

    let updated = diesel::update(lists::table.filter(lists::list_id.eq(list_id)))
        .set(lists::status.eq(status.as_str()))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "List {list_id} not found"
        )));
    }
    Ok(())
}

/// Inserts a video into a list, ignoring the insert if the same url and
/// reference already exist on the list. Callers resolve the surviving
/// row afterwards via `queries::lists::get_video_by_content`.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_video(
    conn: &mut SqliteConnection,
    list_id: i64,
    url: &str,
    reference_id: &str,
) -> Result<(), PersistenceError> {
    debug!("Adding video to list {}", list_id);

    diesel::insert_into(videos::table)
        .values((
            videos::list_id.eq(list_id),
            videos::url.eq(url),
            videos::reference_id.eq(reference_id),
        ))
        .on_conflict_do_nothing()
        .execute(conn)?;

    Ok(())
}

/// Deletes a video by id.
///
/// # Errors
///
/// Returns an error if the delete fails.
/// Returns `Ok(false)` if the video did not exist.
pub fn delete_video(conn: &mut SqliteConnection, video_id: i64) -> Result<bool, PersistenceError> {
    debug!("Deleting video {}", video_id);

    let deleted =
        diesel::delete(videos::table.filter(videos::video_id.eq(video_id))).execute(conn)?;

    Ok(deleted > 0)
}
