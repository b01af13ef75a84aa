use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "lingo", description = "Language-learning progress service"),
    paths(
        crate::web::routes::progress::progress_get_handler,
        crate::web::routes::progress::progress_list_handler,
        crate::web::routes::progress::complete_lesson_handler,
        crate::web::routes::lessons::languages_list_handler,
        crate::web::routes::lessons::lessons_get_handler,
        crate::web::routes::lessons::check_answer_handler,
        crate::web::routes::account::account_get_handler,
    ),
    tags(
        (name = "progress", description = "Learner progress and lesson completion"),
        (name = "lessons", description = "Lesson content and grading"),
        (name = "account", description = "Current learner"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn every_route_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/progress",
            "/api/progress/{language}",
            "/api/complete-lesson",
            "/api/languages",
            "/api/lesson/{language}/{lesson_number}",
            "/api/check-answer",
            "/api/account",
        ] {
            assert!(doc.paths.paths.contains_key(path), "{path}");
        }
    }
}
