// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Every handler runs its reads, rule checks, and writes inside a
//! single transaction, so a failing check rolls back any earlier write
//! and partial results are never observable.

use time::OffsetDateTime;
use tracing::info;

use crate::error::{translate_domain_error, ApiError};
use crate::request_response::{
    AddVideoRequest, AddVideoResponse, AssignListRequest, AssignListResponse, CompleteQuizResponse,
    CreateQuizRequest, CreateQuizResponse, DeleteVideoResponse, FinalizeListResponse,
    GetListResponse, GetQuizResponse, GetQuizResultResponse, ListQuizzesResponse,
    ParticipantInfo, ParticipateResponse, QuizInfo,
};
use top_ten_domain::{
    can_access_list, compute_ranking, sanitize_for_active_quiz, validate_deadline,
    validate_quiz_name, validate_reference_id, validate_video_url, DomainError, List, ListCreator,
    ListStatus, ListView, Quiz, QuizStatus, Video,
};
use top_ten_persistence::{mutations, queries, Persistence, PersistenceError, SqliteConnection};

/// The current wall-clock time as unix seconds (UTC).
fn now_unix() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}

fn quiz_or_not_found(conn: &mut SqliteConnection, quiz_id: i64) -> Result<Quiz, ApiError> {
    queries::quizzes::get_quiz_by_id(conn, quiz_id)
        .map_err(ApiError::from)?
        .ok_or_else(|| translate_domain_error(DomainError::QuizNotFound(quiz_id)))
}

fn list_or_not_found(conn: &mut SqliteConnection, list_id: i64) -> Result<List, ApiError> {
    queries::lists::get_list_by_id(conn, list_id)
        .map_err(ApiError::from)?
        .ok_or_else(|| translate_domain_error(DomainError::ListNotFound(list_id)))
}

/// Requires the caller to be the list's creator.
fn require_list_creator(list: &List, account_id: i64) -> Result<(), ApiError> {
    if list.account_id == account_id {
        Ok(())
    } else {
        Err(translate_domain_error(DomainError::NotListCreator {
            list_id: list.list_id,
            account_id,
        }))
    }
}

/// Requires the list to still be editable.
fn require_draft(list: &List) -> Result<(), ApiError> {
    if list.status.is_draft() {
        Ok(())
    } else {
        Err(translate_domain_error(DomainError::ListFinalized {
            list_id: list.list_id,
        }))
    }
}

/// Creates a quiz and provisions the creator's own list.
///
/// Both inserts commit as one unit; if list provisioning fails, the
/// quiz is not created either.
///
/// # Errors
///
/// Returns an error if validation or persistence fails.
pub fn create_quiz(
    persistence: &mut Persistence,
    creator_account_id: i64,
    request: &CreateQuizRequest,
) -> Result<CreateQuizResponse, ApiError> {
    validate_quiz_name(&request.name).map_err(translate_domain_error)?;
    validate_deadline(request.deadline).map_err(translate_domain_error)?;

    let (quiz_id, list_id) = persistence.transaction(|conn| {
        let quiz_id =
            mutations::quizzes::insert_quiz(conn, &request.name, creator_account_id, request.deadline)
                .map_err(ApiError::from)?;
        let list_id = mutations::lists::insert_list(conn, creator_account_id, quiz_id)
            .map_err(ApiError::from)?;
        Ok::<_, ApiError>((quiz_id, list_id))
    })?;

    info!(
        "Account {} created quiz {} with list {}",
        creator_account_id, quiz_id, list_id
    );

    Ok(CreateQuizResponse {
        quiz_id,
        list_id,
        message: format!("Quiz '{}' created", request.name),
    })
}

/// Joins a quiz by provisioning a list for the caller.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown quiz and `Conflict` if the
/// caller already holds a list for it.
pub fn participate(
    persistence: &mut Persistence,
    account_id: i64,
    quiz_id: i64,
) -> Result<ParticipateResponse, ApiError> {
    let list_id = persistence.transaction(|conn| {
        let quiz = quiz_or_not_found(conn, quiz_id)?;

        match mutations::lists::insert_list(conn, account_id, quiz.quiz_id) {
            Ok(list_id) => Ok(list_id),
            Err(PersistenceError::UniqueViolation(_)) => Err(translate_domain_error(
                DomainError::AlreadyParticipating {
                    quiz_id,
                    account_id,
                },
            )),
            Err(e) => Err(ApiError::from(e)),
        }
    })?;

    info!("Account {} joined quiz {}", account_id, quiz_id);

    Ok(ParticipateResponse {
        quiz_id,
        list_id,
        message: String::from("Joined quiz"),
    })
}

/// Completes a quiz, freezing all guesses.
///
/// Only the quiz's creator may complete it, and only once.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown quiz, `Forbidden` for a
/// non-creator, and `Conflict` if the quiz is already completed.
pub fn complete_quiz(
    persistence: &mut Persistence,
    account_id: i64,
    quiz_id: i64,
) -> Result<CompleteQuizResponse, ApiError> {
    persistence.transaction(|conn| {
        let quiz = quiz_or_not_found(conn, quiz_id)?;

        if quiz.creator_account_id != account_id {
            return Err(translate_domain_error(DomainError::NotQuizCreator {
                quiz_id,
                account_id,
            }));
        }
        if quiz.status == QuizStatus::Completed {
            return Err(translate_domain_error(DomainError::QuizAlreadyCompleted {
                quiz_id,
            }));
        }

        mutations::quizzes::update_quiz_status(conn, quiz_id, QuizStatus::Completed)
            .map_err(ApiError::from)
    })?;

    info!("Account {} completed quiz {}", account_id, quiz_id);

    Ok(CompleteQuizResponse {
        quiz_id,
        status: QuizStatus::Completed.as_str().to_string(),
        message: String::from("Quiz completed"),
    })
}

/// Computes the leaderboard of a completed quiz.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown quiz and `Forbidden` while
/// the quiz is still active.
pub fn get_quiz_result(
    persistence: &mut Persistence,
    quiz_id: i64,
) -> Result<GetQuizResultResponse, ApiError> {
    let assignments = persistence.transaction(|conn| {
        let quiz = quiz_or_not_found(conn, quiz_id)?;

        if quiz.status.is_active() {
            return Err(translate_domain_error(DomainError::QuizStillActive {
                quiz_id,
            }));
        }

        queries::assignments::get_scored_assignments_for_quiz(conn, quiz_id)
            .map_err(ApiError::from)
    })?;

    Ok(GetQuizResultResponse {
        quiz_id,
        ranking: compute_ranking(&assignments),
    })
}

/// Adds a video to a draft list owned by the caller.
///
/// Re-adding an identical video (same url and reference on the same
/// list) is absorbed silently and returns the existing video's id.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown list and `Forbidden` for a
/// non-owner or a finalized list.
pub fn add_video(
    persistence: &mut Persistence,
    account_id: i64,
    list_id: i64,
    request: &AddVideoRequest,
) -> Result<AddVideoResponse, ApiError> {
    validate_video_url(&request.url).map_err(translate_domain_error)?;
    validate_reference_id(&request.reference_id).map_err(translate_domain_error)?;

    let video: Video = persistence.transaction(|conn| {
        let list = list_or_not_found(conn, list_id)?;
        require_list_creator(&list, account_id)?;
        require_draft(&list)?;

        mutations::lists::insert_video(conn, list_id, &request.url, &request.reference_id)
            .map_err(ApiError::from)?;

        queries::lists::get_video_by_content(conn, list_id, &request.url, &request.reference_id)
            .map_err(ApiError::from)?
            .ok_or_else(|| ApiError::Internal {
                message: format!("Video missing after insert into list {list_id}"),
            })
    })?;

    Ok(AddVideoResponse {
        video_id: video.video_id,
        list_id,
        message: String::from("Video added"),
    })
}

/// Removes a video from a draft list owned by the caller.
///
/// Refusals reference the owning list, which is resolved first.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the video or its list is unknown, and
/// `Forbidden` for a non-owner or a finalized list.
pub fn delete_video(
    persistence: &mut Persistence,
    account_id: i64,
    video_id: i64,
) -> Result<DeleteVideoResponse, ApiError> {
    let list_id = persistence.transaction(|conn| {
        let video = queries::lists::get_video_by_id(conn, video_id)
            .map_err(ApiError::from)?
            .ok_or_else(|| translate_domain_error(DomainError::VideoNotFound(video_id)))?;

        let list = list_or_not_found(conn, video.list_id)?;
        require_list_creator(&list, account_id)?;
        require_draft(&list)?;

        mutations::lists::delete_video(conn, video_id).map_err(ApiError::from)?;
        Ok::<_, ApiError>(list.list_id)
    })?;

    Ok(DeleteVideoResponse {
        list_id,
        message: String::from("Video deleted"),
    })
}

/// Finalizes a list, ending its draft phase.
///
/// Finalizing an already finalized list is a harmless no-op.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown list and `Forbidden` for a
/// non-owner.
pub fn finalize_list(
    persistence: &mut Persistence,
    account_id: i64,
    list_id: i64,
) -> Result<FinalizeListResponse, ApiError> {
    persistence.transaction(|conn| {
        let list = list_or_not_found(conn, list_id)?;
        require_list_creator(&list, account_id)?;

        if list.status.is_draft() {
            mutations::lists::update_list_status(conn, list_id, ListStatus::Finalized)
                .map_err(ApiError::from)?;
        }
        Ok::<_, ApiError>(())
    })?;

    Ok(FinalizeListResponse {
        list_id,
        status: ListStatus::Finalized.as_str().to_string(),
        message: String::from("List finalized"),
    })
}

/// Records or changes the caller's guess about who created a list.
///
/// The checks run in a fixed order and the first failure is the one
/// surfaced: unknown list, list not finalized, quiz completed, list not
/// accessible to the caller, assignee not participating.
///
/// # Errors
///
/// Returns the first failing check's error as described above.
pub fn assign_list(
    persistence: &mut Persistence,
    guesser_account_id: i64,
    list_id: i64,
    request: &AssignListRequest,
) -> Result<AssignListResponse, ApiError> {
    let now = now_unix();
    let assignee_account_id = request.assignee_account_id;

    persistence.transaction(|conn| {
        let list = list_or_not_found(conn, list_id)?;

        if list.status != ListStatus::Finalized {
            return Err(translate_domain_error(DomainError::ListNotFinalized {
                list_id,
            }));
        }

        let quiz = quiz_or_not_found(conn, list.quiz_id)?;
        if quiz.status != QuizStatus::Active {
            return Err(translate_domain_error(DomainError::QuizCompleted {
                quiz_id: quiz.quiz_id,
            }));
        }

        if !can_access_list(guesser_account_id, &list, &quiz, now) {
            return Err(translate_domain_error(DomainError::ListAccessDenied {
                list_id,
                account_id: guesser_account_id,
            }));
        }

        let assignee_participates =
            queries::lists::get_list_for_account_and_quiz(conn, assignee_account_id, quiz.quiz_id)
                .map_err(ApiError::from)?
                .is_some();
        if !assignee_participates {
            return Err(translate_domain_error(DomainError::DoesNotParticipate {
                quiz_id: quiz.quiz_id,
                account_id: assignee_account_id,
            }));
        }

        mutations::assignments::upsert_assignment(
            conn,
            list_id,
            guesser_account_id,
            assignee_account_id,
        )
        .map_err(ApiError::from)
    })?;

    Ok(AssignListResponse {
        list_id,
        assignee_account_id,
        message: String::from("Guess recorded"),
    })
}

/// Assembles a view of a list for the caller.
///
/// While the parent quiz is active, non-owners receive the view with
/// creator identity stripped.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown list.
pub fn get_list(
    persistence: &mut Persistence,
    viewer_account_id: i64,
    list_id: i64,
) -> Result<GetListResponse, ApiError> {
    let view: ListView = persistence.transaction(|conn| {
        let list = list_or_not_found(conn, list_id)?;
        let quiz = quiz_or_not_found(conn, list.quiz_id)?;

        let creator_account = queries::accounts::get_account_by_id(conn, list.account_id)
            .map_err(ApiError::from)?
            .ok_or_else(|| ApiError::Internal {
                message: format!("Creator account {} missing for list {list_id}", list.account_id),
            })?;
        let videos = queries::lists::get_videos_for_list(conn, list_id).map_err(ApiError::from)?;
        let assignment = queries::assignments::get_assignment_for_list_and_guesser(
            conn,
            list_id,
            viewer_account_id,
        )
        .map_err(ApiError::from)?;

        let creator = ListCreator {
            account_id: creator_account.account_id,
            name: creator_account.name,
        };
        let view = ListView::assemble(&list, creator, videos, assignment);

        if quiz.status.is_active() && viewer_account_id != list.account_id {
            Ok(sanitize_for_active_quiz(view))
        } else {
            Ok::<_, ApiError>(view)
        }
    })?;

    Ok(GetListResponse { list: view })
}

/// Lists all quizzes, newest first.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn list_quizzes(persistence: &mut Persistence) -> Result<ListQuizzesResponse, ApiError> {
    let summaries = persistence.transaction(|conn| {
        queries::quizzes::list_quizzes(conn).map_err(ApiError::from)
    })?;

    let quizzes = summaries
        .into_iter()
        .map(|summary| QuizInfo {
            quiz_id: summary.quiz.quiz_id,
            name: summary.quiz.name,
            creator_name: summary.creator_name,
            deadline: summary.quiz.deadline,
            status: summary.quiz.status.as_str().to_string(),
            participant_count: summary.participant_count,
        })
        .collect();

    Ok(ListQuizzesResponse { quizzes })
}

/// Describes a single quiz for the caller.
///
/// Participants and list ids are returned as separate, independently
/// ordered collections so the pairing stays hidden while the quiz is
/// active. The caller's own list id is included when participating.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown quiz.
pub fn get_quiz(
    persistence: &mut Persistence,
    viewer_account_id: i64,
    quiz_id: i64,
) -> Result<GetQuizResponse, ApiError> {
    persistence.transaction(|conn| {
        let quiz = quiz_or_not_found(conn, quiz_id)?;

        let creator_account = queries::accounts::get_account_by_id(conn, quiz.creator_account_id)
            .map_err(ApiError::from)?
            .ok_or_else(|| ApiError::Internal {
                message: format!(
                    "Creator account {} missing for quiz {quiz_id}",
                    quiz.creator_account_id
                ),
            })?;

        let participants: Vec<ParticipantInfo> =
            queries::assignments::get_participants_for_quiz(conn, quiz_id)
                .map_err(ApiError::from)?
                .into_iter()
                .map(|(account_id, name, _)| ParticipantInfo { account_id, name })
                .collect();

        let list_ids: Vec<i64> = queries::lists::get_lists_for_quiz(conn, quiz_id)
            .map_err(ApiError::from)?
            .into_iter()
            .map(|list| list.list_id)
            .collect();

        let viewer_list_id =
            queries::lists::get_list_for_account_and_quiz(conn, viewer_account_id, quiz_id)
                .map_err(ApiError::from)?
                .map(|list| list.list_id);

        Ok::<_, ApiError>(GetQuizResponse {
            quiz_id: quiz.quiz_id,
            name: quiz.name,
            creator_name: creator_account.name,
            deadline: quiz.deadline,
            status: quiz.status.as_str().to_string(),
            participants,
            list_ids,
            viewer_list_id,
        })
    })
}
