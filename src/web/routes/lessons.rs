use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::lessons::CheckError;
use crate::lessons::check::{AnswerResult, check_answer};
use crate::model::entity::{Language, Lesson};
use crate::model::{ResourceType, ResourceTyped};
use crate::web::dto::lessons::{CheckAnswerBody, LanguageResponse};
use crate::web::error::ErrorResponse;
use crate::web::routes::{parse_language, parse_lesson_number};
use crate::web::{AppState, WebError, WebResult};

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/languages", get(languages_list_handler))
        .route("/lesson/{language}/{lesson_number}", get(lessons_get_handler))
        .route("/check-answer", post(check_answer_handler))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/languages",
    description = "List the languages that can be studied",
    responses(
        (status = 200, description = "Supported languages", body = Vec<LanguageResponse>),
    ),
    tag = "lessons"
)]
async fn languages_list_handler() -> impl IntoResponse {
    let languages: Vec<LanguageResponse> = Language::ALL.into_iter().map(LanguageResponse::from).collect();
    (StatusCode::OK, Json(languages))
}

#[utoipa::path(
    get,
    path = "/api/lesson/{language}/{lesson_number}",
    description = "Fetch the questions of a lesson",
    params(
        ("language" = String, Path, description = "Language name, e.g. Spanish"),
        ("lesson_number" = u32, Path, description = "Lesson number, starting at 1"),
    ),
    responses(
        (status = 200, description = "Lesson", body = Lesson),
        (status = 400, description = "Unknown language or bad lesson number", body = ErrorResponse),
    ),
    tag = "lessons"
)]
async fn lessons_get_handler(
    State(state): State<AppState>,
    Path((language, lesson_number)): Path<(String, String)>,
) -> WebResult<impl IntoResponse> {
    let language = parse_language(&language)?;
    let lesson_number = parse_lesson_number(&lesson_number)?;

    let lesson = state.resolver().lesson(language, lesson_number).await;

    Ok((StatusCode::OK, Json(lesson)))
}

#[utoipa::path(
    post,
    path = "/api/check-answer",
    description = "Grade one answer of a lesson",
    request_body = CheckAnswerBody,
    responses(
        (status = 200, description = "Answer graded", body = AnswerResult),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    ),
    tag = "lessons"
)]
async fn check_answer_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckAnswerBody>, JsonRejection>,
) -> WebResult<impl IntoResponse> {
    let Json(body) = payload
        .map_err(|e| WebError::resource_bad_request(ResourceType::Answer, e.body_text()))?;

    if body.lesson_number == 0 {
        return Err(WebError::resource_bad_request(
            Lesson::get_resource_type(),
            "lessonNumber must be at least 1",
        ));
    }
    if body.level == 0 {
        return Err(WebError::resource_bad_request(
            Lesson::get_resource_type(),
            "level must be at least 1",
        ));
    }

    // same derivation as the lesson view, so indices line up with what was served
    let lesson = state.resolver().lesson(body.language, body.lesson_number).await;
    let question = lesson
        .questions()
        .get(body.question_index)
        .ok_or(CheckError::QuestionOutOfRange {
            index: body.question_index,
            len: lesson.questions().len(),
        })?;

    let result = check_answer(question, &body.user_answer)?;

    Ok((StatusCode::OK, Json(result)))
}
