//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Mutations that the
//! admin UI confirms to the user also carry a `notice`.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "data": T, "notice": "..." }` returned by successful form submissions.
#[derive(Debug, Serialize)]
pub struct NoticeResponse<T: Serialize> {
    pub data: T,
    pub notice: &'static str,
}

/// One page of a listing plus the numbers needed to paginate it.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub data: Vec<T>,
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
}
