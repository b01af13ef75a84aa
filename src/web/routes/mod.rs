use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::Config;
use crate::model::ResourceTyped;
use crate::model::entity::{Language, Lesson};
use crate::web::{AppState, WebError, WebResult, doc::ApiDoc};

pub mod account;
pub mod lessons;
pub mod progress;

pub fn build_app(state: AppState, config: &Config) -> Router {
    let api = Router::new()
        .merge(progress::routes(state.clone()))
        .merge(lessons::routes(state.clone()))
        .merge(account::routes(state));

    let mut router = Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive());

    if config.app().docs() {
        let openapi = ApiDoc::openapi();

        router = router.merge(SwaggerUi::new("/api/docs").url("/api-doc/openapi.json", openapi));
    }

    router
}

pub(crate) fn parse_language(raw: &str) -> WebResult<Language> {
    raw.parse::<Language>()
        .map_err(|e| WebError::resource_bad_request(Language::get_resource_type(), e.to_string()))
}

pub(crate) fn parse_lesson_number(raw: &str) -> WebResult<u32> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(WebError::resource_bad_request(
            Lesson::get_resource_type(),
            format!("lessonNumber must be a positive integer, got `{raw}`"),
        )),
    }
}
