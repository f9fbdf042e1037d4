// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents the lifecycle state of a quiz.
///
/// A quiz starts `Active` and transitions to `Completed` exactly once,
/// by its creator. Completion is irreversible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum QuizStatus {
    /// Initial state. Participants may join, edit, finalize, and guess.
    #[default]
    Active,
    /// Terminal state. Guesses are frozen and results are available.
    Completed,
}

impl FromStr for QuizStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidLifecycleState(s.to_string())),
        }
    }
}

impl std::fmt::Display for QuizStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl QuizStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }

    /// Checks if a transition from this state to another is valid.
    ///
    /// The only valid transition is `Active` → `Completed`.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!((self, target), (Self::Active, Self::Completed))
    }

    /// Returns whether the quiz is still accepting participation and guesses.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Represents the lifecycle state of a participant's list.
///
/// A list starts `Draft` and transitions to `Finalized` exactly once.
/// Finalization is irreversible; videos are immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ListStatus {
    /// Initial state. The owner may add and remove videos.
    #[default]
    Draft,
    /// Terminal state. The list is eligible to be guessed about.
    Finalized,
}

impl FromStr for ListStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Draft" => Ok(Self::Draft),
            "Finalized" => Ok(Self::Finalized),
            _ => Err(DomainError::InvalidLifecycleState(s.to_string())),
        }
    }
}

impl std::fmt::Display for ListStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ListStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Finalized => "Finalized",
        }
    }

    /// Checks if a transition from this state to another is valid.
    ///
    /// The only valid transition is `Draft` → `Finalized`.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!((self, target), (Self::Draft, Self::Finalized))
    }

    /// Returns whether the list contents may still be edited.
    #[must_use]
    pub const fn is_draft(&self) -> bool {
        matches!(self, Self::Draft)
    }
}

/// A participant account.
///
/// Accounts are provisioned on first external login and are never
/// deleted. The `provider_ref` links the account to its external
/// login identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// The canonical numeric identifier assigned by the database.
    pub account_id: i64,
    /// The public display name.
    pub name: String,
    /// The account's email address.
    pub email: String,
    /// Opaque reference to the external login provider identity.
    pub provider_ref: String,
}

/// A quiz: a time-boxed event in which participants each submit a
/// ranked list and then guess who authored which list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    /// The canonical numeric identifier assigned by the database.
    pub quiz_id: i64,
    /// The quiz name.
    pub name: String,
    /// The account that created the quiz.
    pub creator_account_id: i64,
    /// Submission deadline as a unix timestamp (seconds, UTC).
    pub deadline: i64,
    /// The lifecycle state.
    pub status: QuizStatus,
}

/// One participant's ranked submission for a quiz.
///
/// At most one list exists per (account, quiz) pair; persistence
/// enforces this with a uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    /// The canonical numeric identifier assigned by the database.
    pub list_id: i64,
    /// The owning account.
    pub account_id: i64,
    /// The parent quiz.
    pub quiz_id: i64,
    /// The lifecycle state.
    pub status: ListStatus,
}

/// One entry in a participant's list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// The canonical numeric identifier assigned by the database.
    pub video_id: i64,
    /// The owning list.
    pub list_id: i64,
    /// A playable URL.
    pub url: String,
    /// External reference identifier for the video.
    pub reference_id: String,
}

/// A participant's guess about who authored a finalized list.
///
/// Keyed by (list, guesser); the latest write wins. Correctness is
/// derived, never stored: a guess is correct iff the assignee is the
/// list's creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// The list being guessed about.
    pub list_id: i64,
    /// The account making the guess.
    pub guesser_account_id: i64,
    /// The guessed author of the list.
    pub assignee_account_id: i64,
}

/// Public identity of a list's creator, attached to a list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCreator {
    /// The creator's account id.
    pub account_id: i64,
    /// The creator's display name.
    pub name: String,
}

/// An assembled read-model of a list, as returned to a viewer.
///
/// Built once from immutable parts; creator identity may be stripped
/// afterwards via [`crate::sanitize_for_active_quiz`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListView {
    /// The list id.
    pub list_id: i64,
    /// The parent quiz id.
    pub quiz_id: i64,
    /// The list's lifecycle state.
    pub status: ListStatus,
    /// The creator's public identity. `None` once sanitized.
    pub creator: Option<ListCreator>,
    /// The videos on the list, in insertion order. Empty if none.
    pub videos: Vec<Video>,
    /// The viewer's own guess for this list, if any.
    pub assignment: Option<Assignment>,
}

impl ListView {
    /// Assembles a view from a list, its creator, its videos, and the
    /// viewer's own assignment for it.
    #[must_use]
    pub fn assemble(
        list: &List,
        creator: ListCreator,
        videos: Vec<Video>,
        assignment: Option<Assignment>,
    ) -> Self {
        Self {
            list_id: list.list_id,
            quiz_id: list.quiz_id,
            status: list.status,
            creator: Some(creator),
            videos,
            assignment,
        }
    }
}
