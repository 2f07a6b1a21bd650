//! Route definitions for the statistics announcement admin.

use axum::routing::get;
use axum::Router;

use crate::handlers::statistics_announcement as handlers;
use crate::state::AppState;

/// Routes mounted at `/admin/statistics-announcements`.
///
/// ```text
/// GET  /              -> index
/// POST /              -> create
/// GET  /new           -> new_form
/// GET  /{id}          -> show
/// PUT  /{id}          -> update
/// GET  /{id}/edit     -> edit
/// GET  /{id}/cancel   -> cancel
/// POST /{id}/cancel   -> publish_cancellation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::index).post(handlers::create))
        .route("/new", get(handlers::new_form))
        .route("/{id}", get(handlers::show).put(handlers::update))
        .route("/{id}/edit", get(handlers::edit))
        .route(
            "/{id}/cancel",
            get(handlers::cancel).post(handlers::publish_cancellation),
        )
}
