// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ranking computation for completed quizzes.
//!
//! This module turns the full set of guesses for a completed quiz into a
//! deterministic, tie-aware leaderboard.
//!
//! ## Ordering Rules (Authoritative)
//!
//! 1. Guessers are scored by their number of correct guesses
//!    (a guess is correct iff the guessed assignee is the list's creator).
//! 2. Guessers are sorted descending by score.
//! 3. Ranks follow standard competition ranking: tied scores share a
//!    rank, and the rank after a tied group skips by the group size
//!    (1, 1, 3, 4, 4, 6 — never 1, 1, 2).
//! 4. Within a tied score, ordering is by display name,
//!    case-insensitive, ascending. This is the final sort key; it does
//!    not affect the shared rank.
//!
//! Only guessers with at least one assignment appear in the ranking.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One guess, annotated with everything needed to score it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredAssignment {
    /// The guessing account.
    pub guesser_account_id: i64,
    /// The guesser's display name.
    pub guesser_name: String,
    /// The list the guess is about.
    pub list_id: i64,
    /// The guessed author.
    pub assignee_account_id: i64,
    /// The actual creator of the list.
    pub list_creator_account_id: i64,
}

impl ScoredAssignment {
    /// Returns whether the guess attributed the list to its actual creator.
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.assignee_account_id == self.list_creator_account_id
    }
}

/// A guesser's full breakdown of correct and incorrect guesses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalResult {
    /// The guessing account.
    pub account_id: i64,
    /// The guesser's display name.
    pub name: String,
    /// Guesses that attributed a list to its actual creator.
    pub correct_assignments: Vec<ScoredAssignment>,
    /// Guesses that attributed a list to someone else.
    pub incorrect_assignments: Vec<ScoredAssignment>,
}

impl PersonalResult {
    /// The guesser's score.
    #[must_use]
    pub const fn number_of_correct_assignments(&self) -> usize {
        self.correct_assignments.len()
    }
}

/// One row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// The 1-based competition rank (tied scores share a rank).
    pub rank: usize,
    /// The guessing account.
    pub account_id: i64,
    /// The guesser's display name.
    pub name: String,
    /// The guesser's score.
    pub number_of_correct_assignments: usize,
}

/// The computed leaderboard plus the per-account breakdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking {
    /// Leaderboard rows, in final display order.
    pub entries: Vec<RankingEntry>,
    /// Per-account breakdowns, in the same order as `entries`.
    pub personal_results: Vec<PersonalResult>,
}

/// Computes the ranking for a completed quiz from its full assignment set.
///
/// Guessers are grouped, scored, sorted descending by score with a
/// case-insensitive name tiebreak, and assigned standard competition
/// ranks. The result is deterministic for any input ordering.
#[must_use]
pub fn compute_ranking(assignments: &[ScoredAssignment]) -> Ranking {
    // Group assignments by guesser. BTreeMap keeps grouping order stable
    // before the final sort.
    let mut by_guesser: BTreeMap<i64, PersonalResult> = BTreeMap::new();
    for assignment in assignments {
        let result = by_guesser
            .entry(assignment.guesser_account_id)
            .or_insert_with(|| PersonalResult {
                account_id: assignment.guesser_account_id,
                name: assignment.guesser_name.clone(),
                correct_assignments: Vec::new(),
                incorrect_assignments: Vec::new(),
            });
        if assignment.is_correct() {
            result.correct_assignments.push(assignment.clone());
        } else {
            result.incorrect_assignments.push(assignment.clone());
        }
    }

    let mut personal_results: Vec<PersonalResult> = by_guesser.into_values().collect();
    personal_results.sort_by(|a, b| {
        b.number_of_correct_assignments()
            .cmp(&a.number_of_correct_assignments())
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });

    // Standard competition ranking: an entry shares the previous rank on
    // equal score, otherwise its rank is its 1-based position.
    let mut entries: Vec<RankingEntry> = Vec::with_capacity(personal_results.len());
    let mut previous_score: Option<usize> = None;
    let mut previous_rank: usize = 0;
    for (index, result) in personal_results.iter().enumerate() {
        let score = result.number_of_correct_assignments();
        let rank = match previous_score {
            Some(prev) if prev == score => previous_rank,
            _ => index + 1,
        };
        previous_score = Some(score);
        previous_rank = rank;
        entries.push(RankingEntry {
            rank,
            account_id: result.account_id,
            name: result.name.clone(),
            number_of_correct_assignments: score,
        });
    }

    Ranking {
        entries,
        personal_results,
    }
}
