// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field validation for values crossing into the domain.

use crate::error::DomainError;

/// Maximum accepted quiz name length, in characters.
const MAX_QUIZ_NAME_LENGTH: usize = 200;

/// Validates a quiz name.
///
/// # Errors
///
/// Returns an error if the name is empty, whitespace-only, or longer
/// than 200 characters.
pub fn validate_quiz_name(name: &str) -> Result<(), DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidQuizName(String::from(
            "Quiz name cannot be empty",
        )));
    }
    if trimmed.chars().count() > MAX_QUIZ_NAME_LENGTH {
        return Err(DomainError::InvalidQuizName(format!(
            "Quiz name cannot exceed {MAX_QUIZ_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validates a quiz deadline.
///
/// # Errors
///
/// Returns an error if the timestamp is not positive.
pub fn validate_deadline(deadline: i64) -> Result<(), DomainError> {
    if deadline <= 0 {
        return Err(DomainError::InvalidDeadline(String::from(
            "Deadline must be a positive unix timestamp",
        )));
    }
    Ok(())
}

/// Validates a video URL.
///
/// # Errors
///
/// Returns an error if the URL is empty or not http(s).
pub fn validate_video_url(url: &str) -> Result<(), DomainError> {
    if url.trim().is_empty() {
        return Err(DomainError::InvalidVideoUrl(String::from(
            "Video URL cannot be empty",
        )));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(DomainError::InvalidVideoUrl(String::from(
            "Video URL must start with http:// or https://",
        )));
    }
    Ok(())
}

/// Validates a video's external reference id.
///
/// # Errors
///
/// Returns an error if the reference id is empty.
pub fn validate_reference_id(reference_id: &str) -> Result<(), DomainError> {
    if reference_id.trim().is_empty() {
        return Err(DomainError::InvalidReferenceId(String::from(
            "Reference id cannot be empty",
        )));
    }
    Ok(())
}
