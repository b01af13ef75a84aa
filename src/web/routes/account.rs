use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router, middleware};

use crate::model::ResourceTyped;
use crate::model::entity::UserEntity;
use crate::web::dto::account::AccountResponse;
use crate::web::error::ErrorResponse;
use crate::web::{AppState, RequestContext, WebError, WebResult, middlewares};

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/account", get(account_get_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            middlewares::demo_identity_fn,
        ))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/account",
    description = "Get the current learner",
    responses(
        (status = 200, description = "Current learner", body = AccountResponse),
        (status = 404, description = "Learner not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "account"
)]
async fn account_get_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> WebResult<impl IntoResponse> {
    let user = UserEntity::find_by_id(state.mm(), ctx.user_id())
        .await
        .map_err(|e| WebError::resource_fetch_error(UserEntity::get_resource_type(), e))?
        .ok_or_else(|| WebError::resource_not_found(UserEntity::get_resource_type()))?;

    Ok((StatusCode::OK, Json(AccountResponse::from(user))))
}
