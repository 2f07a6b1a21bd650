pub mod health;
pub mod publishing;
pub mod statistics_announcement;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /admin/statistics-announcements                    index, create
/// /admin/statistics-announcements/new                blank form
/// /admin/statistics-announcements/{id}               show, update
/// /admin/statistics-announcements/{id}/edit          edit form
/// /admin/statistics-announcements/{id}/cancel        cancel form, cancel (POST)
///
/// /admin/publishing/{kind}/{id}/publish              publish (admin only)
/// /admin/publishing/{kind}/{id}/republish            republish (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest(
            "/admin/statistics-announcements",
            statistics_announcement::router(),
        )
        .nest("/admin/publishing", publishing::router())
}
