//! Request context, i.e. which learner the request acts for.
//!

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::model::ResourceType;
use crate::web::error::WebError;

#[derive(Debug, Clone)]
pub struct RequestContext {
    user_id: String,
}

impl RequestContext {
    pub fn new<S: Into<String>>(user_id: S) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .ok_or_else(|| WebError::resource_not_found(ResourceType::User))
    }
}
