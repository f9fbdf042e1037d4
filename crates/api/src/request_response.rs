// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed request and response DTOs for every API operation.
//!
//! These are distinct from domain types and represent the API contract.
//! The transport layer serializes them as-is; the domain never sees
//! them.

use top_ten_domain::{ListView, Ranking};

/// API request to log in an externally verified identity.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoginRequest {
    /// The login provider's stable reference for this identity.
    pub provider_ref: String,
    /// The display name reported by the provider.
    pub name: String,
    /// The email reported by the provider.
    pub email: String,
}

/// API response for a successful login.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoginResponse {
    /// The opaque session token for subsequent requests.
    pub session_token: String,
    /// The account's canonical id.
    pub account_id: i64,
    /// The account's display name.
    pub name: String,
}

/// API response describing the authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WhoAmIResponse {
    /// The account's canonical id.
    pub account_id: i64,
    /// The account's display name.
    pub name: String,
    /// The account's email.
    pub email: String,
}

/// API request to create a new quiz.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateQuizRequest {
    /// The quiz name.
    pub name: String,
    /// The submission deadline as unix seconds (UTC).
    pub deadline: i64,
}

/// API response for a successful quiz creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateQuizResponse {
    /// The created quiz.
    pub quiz_id: i64,
    /// The creator's own list, provisioned with the quiz.
    pub list_id: i64,
    /// A success message.
    pub message: String,
}

/// API response for joining a quiz.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParticipateResponse {
    /// The quiz joined.
    pub quiz_id: i64,
    /// The participant's newly provisioned list.
    pub list_id: i64,
    /// A success message.
    pub message: String,
}

/// API response for completing a quiz.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CompleteQuizResponse {
    /// The completed quiz.
    pub quiz_id: i64,
    /// The quiz's lifecycle state after the operation.
    pub status: String,
    /// A success message.
    pub message: String,
}

/// Summary of one quiz for the overview listing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuizInfo {
    /// The quiz id.
    pub quiz_id: i64,
    /// The quiz name.
    pub name: String,
    /// The creator's display name.
    pub creator_name: String,
    /// The submission deadline as unix seconds (UTC).
    pub deadline: i64,
    /// The quiz's lifecycle state.
    pub status: String,
    /// How many accounts hold a list for the quiz.
    pub participant_count: i64,
}

/// API response listing all quizzes, newest first.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListQuizzesResponse {
    /// The quizzes.
    pub quizzes: Vec<QuizInfo>,
}

/// One participant of a quiz.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParticipantInfo {
    /// The participant's account id.
    pub account_id: i64,
    /// The participant's display name.
    pub name: String,
}

/// API response describing a single quiz.
///
/// Participants and list ids are reported as separate collections so
/// the pairing stays hidden while the quiz is active.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GetQuizResponse {
    /// The quiz id.
    pub quiz_id: i64,
    /// The quiz name.
    pub name: String,
    /// The creator's display name.
    pub creator_name: String,
    /// The submission deadline as unix seconds (UTC).
    pub deadline: i64,
    /// The quiz's lifecycle state.
    pub status: String,
    /// Everyone holding a list for the quiz.
    pub participants: Vec<ParticipantInfo>,
    /// The ids of the quiz's lists, in list-id order.
    pub list_ids: Vec<i64>,
    /// The caller's own list in this quiz, if participating.
    pub viewer_list_id: Option<i64>,
}

/// API response carrying the computed leaderboard of a completed quiz.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GetQuizResultResponse {
    /// The quiz the ranking belongs to.
    pub quiz_id: i64,
    /// The leaderboard plus per-account breakdowns.
    pub ranking: Ranking,
}

/// API request to add a video to a draft list.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AddVideoRequest {
    /// The playable URL.
    pub url: String,
    /// The external reference id of the video.
    pub reference_id: String,
}

/// API response for a successful video addition.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AddVideoResponse {
    /// The video's id. Re-adding an identical video returns the
    /// existing id.
    pub video_id: i64,
    /// The owning list.
    pub list_id: i64,
    /// A success message.
    pub message: String,
}

/// API response for a successful video deletion.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeleteVideoResponse {
    /// The list the video was removed from.
    pub list_id: i64,
    /// A success message.
    pub message: String,
}

/// API response for finalizing a list.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FinalizeListResponse {
    /// The finalized list.
    pub list_id: i64,
    /// The list's lifecycle state after the operation.
    pub status: String,
    /// A success message.
    pub message: String,
}

/// API request to record or change a guess on a list.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AssignListRequest {
    /// The account the caller believes created the list.
    pub assignee_account_id: i64,
}

/// API response for a recorded guess.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AssignListResponse {
    /// The list the guess is about.
    pub list_id: i64,
    /// The guessed account.
    pub assignee_account_id: i64,
    /// A success message.
    pub message: String,
}

/// API response carrying a list view.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GetListResponse {
    /// The assembled view, with creator identity stripped while the
    /// parent quiz is active and the caller is not the owner.
    pub list: ListView,
}
