// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Access-control predicates.
//!
//! Lists stay secret among participants until the quiz deadline passes,
//! while an owner always sees their own list. These are pure functions
//! over already-loaded records; callers decide what to do on a `false`.

use crate::types::{List, ListView, Quiz};

/// Returns whether `viewer_account_id` may access `list`.
///
/// True iff the viewer owns the list, or the parent quiz's deadline has
/// passed (`deadline <= now`). The boundary is inclusive: a check
/// performed exactly at the deadline grants access.
///
/// # Arguments
///
/// * `viewer_account_id` - The account requesting access
/// * `list` - The list being accessed
/// * `quiz` - The list's parent quiz
/// * `now` - The current time as a unix timestamp (seconds, UTC)
#[must_use]
pub const fn can_access_list(viewer_account_id: i64, list: &List, quiz: &Quiz, now: i64) -> bool {
    viewer_account_id == list.account_id || quiz.deadline <= now
}

/// Strips creator identity from a list view for a non-owner viewer
/// while the parent quiz is still active.
///
/// This prevents guessing-by-deanonymization before the quiz closes.
/// Owners viewing their own list are never sanitized; callers apply
/// this only when the viewer is not the owner.
#[must_use]
pub fn sanitize_for_active_quiz(view: ListView) -> ListView {
    ListView {
        creator: None,
        ..view
    }
}
