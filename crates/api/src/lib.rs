// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Top 10 quiz backend.
//!
//! This crate sits between the transport layer and the domain core. It
//! owns the typed request/response contract, translates domain and
//! persistence errors into the API taxonomy, runs each operation in a
//! single transaction, and manages session authentication.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod auth;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthError, AuthenticatedAccount, AuthenticationService};
pub use error::{translate_domain_error, ApiError};
pub use handlers::{
    add_video, assign_list, complete_quiz, create_quiz, delete_video, finalize_list, get_list,
    get_quiz, get_quiz_result, list_quizzes, participate,
};
pub use request_response::{
    AddVideoRequest, AddVideoResponse, AssignListRequest, AssignListResponse, CompleteQuizResponse,
    CreateQuizRequest, CreateQuizResponse, DeleteVideoResponse, FinalizeListResponse,
    GetListResponse, GetQuizResponse, GetQuizResultResponse, ListQuizzesResponse, LoginRequest,
    LoginResponse, ParticipantInfo, ParticipateResponse, QuizInfo, WhoAmIResponse,
};
