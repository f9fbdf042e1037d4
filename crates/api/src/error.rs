// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use top_ten_domain::DomainError;
use top_ten_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain errors and represent the API contract.
/// The transport layer maps each variant onto a status code without
/// inspecting message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// The caller is authenticated but not authorized for this action.
    Forbidden {
        /// A human-readable description of the refusal.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A uniqueness or lifecycle-state conflict.
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Forbidden { message } => write!(f, "Forbidden: {message}"),
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Conflict { message } => write!(f, "Conflict: {message}"),
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into the API error taxonomy.
///
/// Not-found style errors become `ResourceNotFound`, authorization and
/// lifecycle refusals become `Forbidden`, duplicate participation and
/// double completion become `Conflict`, and validation failures become
/// `InvalidInput`.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match &err {
        DomainError::QuizNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Quiz"),
            message: err.to_string(),
        },
        DomainError::ListNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("List"),
            message: err.to_string(),
        },
        DomainError::VideoNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Video"),
            message: err.to_string(),
        },
        DomainError::AccountNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Account"),
            message: err.to_string(),
        },
        DomainError::NotListCreator { .. }
        | DomainError::NotQuizCreator { .. }
        | DomainError::ListFinalized { .. }
        | DomainError::ListNotFinalized { .. }
        | DomainError::QuizCompleted { .. }
        | DomainError::QuizStillActive { .. }
        | DomainError::DoesNotParticipate { .. }
        | DomainError::ListAccessDenied { .. } => ApiError::Forbidden {
            message: err.to_string(),
        },
        DomainError::QuizAlreadyCompleted { .. } | DomainError::AlreadyParticipating { .. } => {
            ApiError::Conflict {
                message: err.to_string(),
            }
        }
        DomainError::InvalidQuizName(_) => ApiError::InvalidInput {
            field: String::from("name"),
            message: err.to_string(),
        },
        DomainError::InvalidVideoUrl(_) => ApiError::InvalidInput {
            field: String::from("url"),
            message: err.to_string(),
        },
        DomainError::InvalidReferenceId(_) => ApiError::InvalidInput {
            field: String::from("reference_id"),
            message: err.to_string(),
        },
        DomainError::InvalidDeadline(_) => ApiError::InvalidInput {
            field: String::from("deadline"),
            message: err.to_string(),
        },
        DomainError::InvalidLifecycleState(_) => ApiError::Internal {
            message: err.to_string(),
        },
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::UniqueViolation(message) => Self::Conflict { message },
            PersistenceError::NotFound(message) => Self::ResourceNotFound {
                resource_type: String::from("Record"),
                message,
            },
            _ => Self::Internal {
                message: err.to_string(),
            },
        }
    }
}
