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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use top_ten_api::{
    AddVideoRequest, AddVideoResponse, ApiError, AssignListRequest, AssignListResponse,
    AuthenticationService, CompleteQuizResponse, CreateQuizRequest, CreateQuizResponse,
    DeleteVideoResponse, FinalizeListResponse, GetListResponse, GetQuizResponse,
    GetQuizResultResponse, ListQuizzesResponse, LoginRequest, LoginResponse, ParticipateResponse,
    WhoAmIResponse, add_video, assign_list, complete_quiz, create_quiz, delete_video,
    finalize_list, get_list, get_quiz, get_quiz_result, list_quizzes, participate,
};
use top_ten_persistence::Persistence;

mod session;

use session::SessionAccount;

/// Top Ten Server - HTTP server for the Top 10 quiz system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer behind all quiz state.
    persistence: Arc<Mutex<Persistence>>,
}

/// Generic error payload returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// Generic acknowledgment payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MessageResponse {
    /// A success message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status = match &err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for POST `/login`.
///
/// Creates a session for an externally verified identity.
async fn handle_login(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let (session_token, account) =
        AuthenticationService::login(&mut persistence, &req.provider_ref, &req.name, &req.email)
            .map_err(|e| HttpError::from(ApiError::from(e)))?;

    Ok(Json(LoginResponse {
        session_token,
        account_id: account.account_id,
        name: account.name,
    }))
}

/// Handler for POST `/logout`.
async fn handle_logout(
    AxumState(state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<MessageResponse>, Response> {
    let token = session::bearer_token(&headers).map_err(IntoResponse::into_response)?;

    let mut persistence = state.persistence.lock().await;
    AuthenticationService::logout(&mut persistence, token)
        .map_err(|e| HttpError::from(ApiError::from(e)).into_response())?;

    Ok(Json(MessageResponse {
        message: String::from("Logged out"),
    }))
}

/// Handler for GET `/whoami`.
#[allow(clippy::unused_async)]
async fn handle_whoami(SessionAccount(_, account): SessionAccount) -> Json<WhoAmIResponse> {
    Json(WhoAmIResponse {
        account_id: account.account_id,
        name: account.name,
        email: account.email,
    })
}

/// Handler for GET `/quizzes`.
async fn handle_list_quizzes(
    AxumState(state): AxumState<AppState>,
    SessionAccount(_, _): SessionAccount,
) -> Result<Json<ListQuizzesResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    Ok(Json(list_quizzes(&mut persistence)?))
}

/// Handler for POST `/quizzes`.
async fn handle_create_quiz(
    AxumState(state): AxumState<AppState>,
    SessionAccount(caller, _): SessionAccount,
    Json(req): Json<CreateQuizRequest>,
) -> Result<Json<CreateQuizResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    Ok(Json(create_quiz(&mut persistence, caller.account_id, &req)?))
}

/// Handler for GET `/quizzes/{quiz_id}`.
async fn handle_get_quiz(
    AxumState(state): AxumState<AppState>,
    SessionAccount(caller, _): SessionAccount,
    Path(quiz_id): Path<i64>,
) -> Result<Json<GetQuizResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    Ok(Json(get_quiz(&mut persistence, caller.account_id, quiz_id)?))
}

/// Handler for POST `/quizzes/{quiz_id}/participate`.
async fn handle_participate(
    AxumState(state): AxumState<AppState>,
    SessionAccount(caller, _): SessionAccount,
    Path(quiz_id): Path<i64>,
) -> Result<Json<ParticipateResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    Ok(Json(participate(
        &mut persistence,
        caller.account_id,
        quiz_id,
    )?))
}

/// Handler for POST `/quizzes/{quiz_id}/complete`.
async fn handle_complete_quiz(
    AxumState(state): AxumState<AppState>,
    SessionAccount(caller, _): SessionAccount,
    Path(quiz_id): Path<i64>,
) -> Result<Json<CompleteQuizResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    Ok(Json(complete_quiz(
        &mut persistence,
        caller.account_id,
        quiz_id,
    )?))
}

/// Handler for GET `/quizzes/{quiz_id}/result`.
async fn handle_get_quiz_result(
    AxumState(state): AxumState<AppState>,
    SessionAccount(_, _): SessionAccount,
    Path(quiz_id): Path<i64>,
) -> Result<Json<GetQuizResultResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    Ok(Json(get_quiz_result(&mut persistence, quiz_id)?))
}

/// Handler for GET `/lists/{list_id}`.
async fn handle_get_list(
    AxumState(state): AxumState<AppState>,
    SessionAccount(caller, _): SessionAccount,
    Path(list_id): Path<i64>,
) -> Result<Json<GetListResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    Ok(Json(get_list(&mut persistence, caller.account_id, list_id)?))
}

/// Handler for POST `/lists/{list_id}/finalize`.
async fn handle_finalize_list(
    AxumState(state): AxumState<AppState>,
    SessionAccount(caller, _): SessionAccount,
    Path(list_id): Path<i64>,
) -> Result<Json<FinalizeListResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    Ok(Json(finalize_list(
        &mut persistence,
        caller.account_id,
        list_id,
    )?))
}

/// Handler for POST `/lists/{list_id}/videos`.
async fn handle_add_video(
    AxumState(state): AxumState<AppState>,
    SessionAccount(caller, _): SessionAccount,
    Path(list_id): Path<i64>,
    Json(req): Json<AddVideoRequest>,
) -> Result<Json<AddVideoResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    Ok(Json(add_video(
        &mut persistence,
        caller.account_id,
        list_id,
        &req,
    )?))
}

/// Handler for PUT `/lists/{list_id}/assignment`.
async fn handle_assign_list(
    AxumState(state): AxumState<AppState>,
    SessionAccount(caller, _): SessionAccount,
    Path(list_id): Path<i64>,
    Json(req): Json<AssignListRequest>,
) -> Result<Json<AssignListResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    Ok(Json(assign_list(
        &mut persistence,
        caller.account_id,
        list_id,
        &req,
    )?))
}

/// Handler for DELETE `/videos/{video_id}`.
async fn handle_delete_video(
    AxumState(state): AxumState<AppState>,
    SessionAccount(caller, _): SessionAccount,
    Path(video_id): Path<i64>,
) -> Result<Json<DeleteVideoResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    Ok(Json(delete_video(
        &mut persistence,
        caller.account_id,
        video_id,
    )?))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/login", post(handle_login))
        .route("/logout", post(handle_logout))
        .route("/whoami", get(handle_whoami))
        .route("/quizzes", get(handle_list_quizzes))
        .route("/quizzes", post(handle_create_quiz))
        .route("/quizzes/{quiz_id}", get(handle_get_quiz))
        .route("/quizzes/{quiz_id}/participate", post(handle_participate))
        .route("/quizzes/{quiz_id}/complete", post(handle_complete_quiz))
        .route("/quizzes/{quiz_id}/result", get(handle_get_quiz_result))
        .route("/lists/{list_id}", get(handle_get_list))
        .route("/lists/{list_id}/finalize", post(handle_finalize_list))
        .route("/lists/{list_id}/videos", post(handle_add_video))
        .route("/lists/{list_id}/assignment", put(handle_assign_list))
        .route("/videos/{video_id}", delete(handle_delete_video))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Top Ten Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
