use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router, middleware};

use crate::leveling::{self, CompletionRequest};
use crate::model::entity::UserProgress;
use crate::model::{ProgressKey, ResourceTyped};
use crate::web::dto::progress::{CompleteLessonBody, CompleteLessonResponse};
use crate::web::error::ErrorResponse;
use crate::web::routes::parse_language;
use crate::web::{AppState, RequestContext, WebError, WebResult, middlewares};

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/progress", get(progress_list_handler))
        .route("/progress/{language}", get(progress_get_handler))
        .route("/complete-lesson", post(complete_lesson_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            middlewares::demo_identity_fn,
        ))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/progress/{language}",
    description = "Get the learner's progress in a language, starting it if needed",
    params(
        ("language" = String, Path, description = "Language name, e.g. Spanish")
    ),
    responses(
        (status = 200, description = "Progress found or created", body = UserProgress),
        (status = 400, description = "Unknown language", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "progress"
)]
async fn progress_get_handler(
    State(state): State<AppState>,
    Path(language): Path<String>,
    ctx: RequestContext,
) -> WebResult<impl IntoResponse> {
    let language = parse_language(&language)?;

    let key = ProgressKey::new(ctx.user_id(), language);
    let _guard = state.mm().store().lock_progress(&key).await;

    let progress = UserProgress::find_or_create(state.mm(), ctx.user_id(), language)
        .await
        .map_err(|e| WebError::resource_fetch_error(UserProgress::get_resource_type(), e))?;

    Ok((StatusCode::OK, Json(progress)))
}

#[utoipa::path(
    get,
    path = "/api/progress",
    description = "List the learner's progress in every language started so far",
    responses(
        (status = 200, description = "Progress records", body = Vec<UserProgress>),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "progress"
)]
async fn progress_list_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> WebResult<impl IntoResponse> {
    let records = UserProgress::list_by_user(state.mm(), ctx.user_id())
        .await
        .map_err(|e| WebError::resource_fetch_error(UserProgress::get_resource_type(), e))?;

    Ok((StatusCode::OK, Json(records)))
}

#[utoipa::path(
    post,
    path = "/api/complete-lesson",
    description = "Record a finished lesson: award XP, update level and streak",
    request_body = CompleteLessonBody,
    responses(
        (status = 200, description = "Lesson recorded", body = CompleteLessonResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "progress"
)]
async fn complete_lesson_handler(
    State(state): State<AppState>,
    payload: Result<Json<CompleteLessonBody>, JsonRejection>,
) -> WebResult<impl IntoResponse> {
    let Json(body) = payload.map_err(|e| {
        WebError::resource_bad_request(UserProgress::get_resource_type(), e.body_text())
    })?;

    let request = CompletionRequest::from(body);
    let summary = leveling::complete(state.mm(), &request, state.clock()).await?;

    Ok((StatusCode::OK, Json(CompleteLessonResponse::from(summary))))
}
