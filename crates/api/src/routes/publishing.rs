//! Route definitions for on-demand publishing.

use axum::routing::post;
use axum::Router;

use crate::handlers::publishing;
use crate::state::AppState;

/// Routes mounted at `/admin/publishing`.
///
/// `{kind}` is one of `editions`, `organisations`, `unpublishings`,
/// `statistics-announcements`.
///
/// ```text
/// POST /{kind}/{id}/publish    -> publish
/// POST /{kind}/{id}/republish  -> republish
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{kind}/{id}/publish", post(publishing::publish))
        .route("/{kind}/{id}/republish", post(publishing::republish))
}
