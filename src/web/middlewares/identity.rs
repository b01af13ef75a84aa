use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::web::{AppState, RequestContext};

pub async fn demo_identity_fn(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    req.extensions_mut()
        .insert(RequestContext::new(state.demo_user()));
    next.run(req).await
}
