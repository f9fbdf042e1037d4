// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::error::PersistenceError;
use crate::schema::assignments;

/// Inserts or replaces a guesser's assignment on a list.
///
/// Each guesser holds at most one assignment per list; a second upsert
/// for the same (list, guesser) pair overwrites the assignee.
///
/// # Errors
///
/// Returns an error if the upsert fails.
pub fn upsert_assignment(
    conn: &mut SqliteConnection,
    list_id: i64,
    guesser_account_id: i64,
    assignee_account_id: i64,
) -> Result<(), PersistenceError> {
    debug!(
        "Upserting assignment on list {} by guesser {}",
        list_id, guesser_account_id
    );

    diesel::insert_into(assignments::table)
        .values((
            assignments::list_id.eq(list_id),
            assignments::guesser_account_id.eq(guesser_account_id),
            assignments::assignee_account_id.eq(assignee_account_id),
        ))
        .on_conflict((assignments::list_id, assignments::guesser_account_id))
        .do_update()
        .set(assignments::assignee_account_id.eq(assignee_account_id))
        .execute(conn)?;

    Ok(())
}
