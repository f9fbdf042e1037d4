// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod access;
mod error;
mod ranking;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use access::{can_access_list, sanitize_for_active_quiz};
pub use error::DomainError;
pub use ranking::{PersonalResult, Ranking, RankingEntry, ScoredAssignment, compute_ranking};
pub use types::{
    Account, Assignment, List, ListCreator, ListStatus, ListView, Quiz, QuizStatus, Video,
};
pub use validation::{
    validate_deadline, validate_quiz_name, validate_reference_id, validate_video_url,
};
