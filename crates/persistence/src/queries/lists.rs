// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! List and video queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use std::str::FromStr;
use tracing::debug;

use crate::error::PersistenceError;
use crate::schema::{lists, videos};
use top_ten_domain::{List, ListStatus, Video};

/// Diesel Queryable struct for list rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = lists)]
struct ListRow {
    list_id: i64,
    account_id: i64,
    quiz_id: i64,
    status: String,
}

impl ListRow {
    fn into_list(self) -> Result<List, PersistenceError> {
        let status = ListStatus::from_str(&self.status)
            .map_err(|e| PersistenceError::Other(e.to_string()))?;
        Ok(List {
            list_id: self.list_id,
            account_id: self.account_id,
            quiz_id: self.quiz_id,
            status,
        })
    }
}

/// Diesel Queryable struct for video rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = videos)]
struct VideoRow {
    video_id: i64,
    list_id: i64,
    url: String,
    reference_id: String,
}

impl From<VideoRow> for Video {
    fn from(row: VideoRow) -> Self {
        Self {
            video_id: row.video_id,
            list_id: row.list_id,
            url: row.url,
            reference_id: row.reference_id,
        }
    }
}

/// Retrieves a list by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the list is not found.
pub fn get_list_by_id(
    conn: &mut SqliteConnection,
    list_id: i64,
) -> Result<Option<List>, PersistenceError> {
    debug!("Looking up list by ID: {}", list_id);

    let result: Result<ListRow, diesel::result::Error> = lists::table
        .filter(lists::list_id.eq(list_id))
        .select(ListRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_list()?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves the list an account holds for a quiz, if any.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the account has no list for the quiz.
pub fn get_list_for_account_and_quiz(
    conn: &mut SqliteConnection,
    account_id: i64,
    quiz_id: i64,
) -> Result<Option<List>, PersistenceError> {
    debug!(
        "Looking up list for account {} in quiz {}",
        account_id, quiz_id
    );

    let result: Result<ListRow, diesel::result::Error> = lists::table
        .filter(lists::account_id.eq(account_id))
        .filter(lists::quiz_id.eq(quiz_id))
        .select(ListRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_list()?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves all lists belonging to a quiz.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_lists_for_quiz(
    conn: &mut SqliteConnection,
    quiz_id: i64,
) -> Result<Vec<List>, PersistenceError> {
    let rows: Vec<ListRow> = lists::table
        .filter(lists::quiz_id.eq(quiz_id))
        .order(lists::list_id.asc())
        .select(ListRow::as_select())
        .load(conn)?;

    rows.into_iter().map(ListRow::into_list).collect()
}

/// Retrieves a video by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the video is not found.
pub fn get_video_by_id(
    conn: &mut SqliteConnection,
    video_id: i64,
) -> Result<Option<Video>, PersistenceError> {
    debug!("Looking up video by ID: {}", video_id);

    let result: Result<VideoRow, diesel::result::Error> = videos::table
        .filter(videos::video_id.eq(video_id))
        .select(VideoRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves the videos of a list in insertion order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_videos_for_list(
    conn: &mut SqliteConnection,
    list_id: i64,
) -> Result<Vec<Video>, PersistenceError> {
    let rows: Vec<VideoRow> = videos::table
        .filter(videos::list_id.eq(list_id))
        .order(videos::video_id.asc())
        .select(VideoRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(Into::into).collect())
}

/// Retrieves the video identified by (list, url, reference), if present.
///
/// Used after an insert-or-ignore to resolve the surviving row's id.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_video_by_content(
    conn: &mut SqliteConnection,
    list_id: i64,
    url: &str,
    reference_id: &str,
) -> Result<Option<Video>, PersistenceError> {
    let result: Result<VideoRow, diesel::result::Error> = videos::table
        .filter(videos::list_id.eq(list_id))
        .filter(videos::url.eq(url))
        .filter(videos::reference_id.eq(reference_id))
        .select(VideoRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
