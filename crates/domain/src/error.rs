// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while enforcing domain rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The referenced quiz does not exist.
    QuizNotFound(i64),
    /// The referenced list does not exist.
    ListNotFound(i64),
    /// The referenced video does not exist.
    VideoNotFound(i64),
    /// The referenced account does not exist.
    AccountNotFound(i64),
    /// The caller is not the creator of the list.
    NotListCreator {
        /// The list id.
        list_id: i64,
        /// The offending account.
        account_id: i64,
    },
    /// The caller is not the creator of the quiz.
    NotQuizCreator {
        /// The quiz id.
        quiz_id: i64,
        /// The offending account.
        account_id: i64,
    },
    /// The list is finalized and can no longer be edited.
    ListFinalized {
        /// The list id.
        list_id: i64,
    },
    /// The list has not been finalized yet.
    ListNotFinalized {
        /// The list id.
        list_id: i64,
    },
    /// The quiz is completed; guesses are frozen.
    QuizCompleted {
        /// The quiz id.
        quiz_id: i64,
    },
    /// The quiz is still active; results are not available.
    QuizStillActive {
        /// The quiz id.
        quiz_id: i64,
    },
    /// The quiz has already been completed.
    QuizAlreadyCompleted {
        /// The quiz id.
        quiz_id: i64,
    },
    /// The account already has a list for this quiz.
    AlreadyParticipating {
        /// The quiz id.
        quiz_id: i64,
        /// The account id.
        account_id: i64,
    },
    /// The account does not participate in the quiz.
    DoesNotParticipate {
        /// The quiz id.
        quiz_id: i64,
        /// The account id.
        account_id: i64,
    },
    /// The caller may not access the list before the deadline.
    ListAccessDenied {
        /// The list id.
        list_id: i64,
        /// The viewing account.
        account_id: i64,
    },
    /// Quiz name is empty or invalid.
    InvalidQuizName(String),
    /// Video URL is empty or invalid.
    InvalidVideoUrl(String),
    /// Video reference id is empty or invalid.
    InvalidReferenceId(String),
    /// Quiz deadline is invalid.
    InvalidDeadline(String),
    /// A lifecycle state string could not be parsed.
    InvalidLifecycleState(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QuizNotFound(id) => write!(f, "Quiz {id} not found"),
            Self::ListNotFound(id) => write!(f, "List {id} not found"),
            Self::VideoNotFound(id) => write!(f, "Video {id} not found"),
            Self::AccountNotFound(id) => write!(f, "Account {id} not found"),
            Self::NotListCreator {
                list_id,
                account_id,
            } => {
                write!(f, "Account {account_id} did not create list {list_id}")
            }
            Self::NotQuizCreator {
                quiz_id,
                account_id,
            } => {
                write!(f, "Account {account_id} did not create quiz {quiz_id}")
            }
            Self::ListFinalized { list_id } => {
                write!(f, "List {list_id} is finalized")
            }
            Self::ListNotFinalized { list_id } => {
                write!(f, "List {list_id} has not been finalized yet")
            }
            Self::QuizCompleted { quiz_id } => {
                write!(f, "Quiz {quiz_id} is completed")
            }
            Self::QuizStillActive { quiz_id } => {
                write!(f, "Quiz {quiz_id} is still active")
            }
            Self::QuizAlreadyCompleted { quiz_id } => {
                write!(f, "Quiz {quiz_id} is already completed")
            }
            Self::AlreadyParticipating {
                quiz_id,
                account_id,
            } => {
                write!(
                    f,
                    "Account {account_id} already has a list for quiz {quiz_id}"
                )
            }
            Self::DoesNotParticipate {
                quiz_id,
                account_id,
            } => {
                write!(
                    f,
                    "Account {account_id} does not participate in quiz {quiz_id}"
                )
            }
            Self::ListAccessDenied {
                list_id,
                account_id,
            } => {
                write!(f, "Account {account_id} may not access list {list_id}")
            }
            Self::InvalidQuizName(msg) => write!(f, "Invalid quiz name: {msg}"),
            Self::InvalidVideoUrl(msg) => write!(f, "Invalid video URL: {msg}"),
            Self::InvalidReferenceId(msg) => write!(f, "Invalid reference id: {msg}"),
            Self::InvalidDeadline(msg) => write!(f, "Invalid deadline: {msg}"),
            Self::InvalidLifecycleState(state) => {
                write!(f, "Invalid lifecycle state: '{state}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}
