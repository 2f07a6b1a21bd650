//! Handlers for the statistics announcement admin.
//!
//! Announcements are created with a first release date, edited (a new date
//! supersedes the current one), and eventually cancelled. A cancelled
//! announcement cannot be cancelled again; both cancel actions send the
//! client back to the announcement instead.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use herald_core::error::{CoreError, FieldErrors};
use herald_core::slug::slugify;
use herald_core::statistics_announcement::{
    self as rules, AnnouncementAttributes, ReleaseDatePrecision,
};
use herald_core::types::DbId;
use herald_db::models::statistics_announcement::{
    CancelStatisticsAnnouncement, CreateStatisticsAnnouncement, ReleaseDateAttributes,
    StatisticsAnnouncementFilter, UpdateStatisticsAnnouncement,
};
use herald_db::repositories::StatisticsAnnouncementRepo;
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::CurrentUser;
use crate::response::{DataResponse, NoticeResponse, PageResponse};
use crate::state::AppState;

/// Where the announcement admin is mounted.
pub const BASE_PATH: &str = "/api/v1/admin/statistics-announcements";

pub const NOTICE_CREATED: &str = "Announcement published successfully";
pub const NOTICE_UPDATED: &str = "Announcement updated successfully";
pub const NOTICE_CANCELLED: &str = "Announcement has been cancelled";

/// Blank form returned by `new`.
#[derive(Debug, Serialize)]
pub struct AnnouncementForm {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub organisation_id: Option<DbId>,
    pub topic_id: Option<DbId>,
    pub publication_type_id: Option<i16>,
    pub current_release_date_attributes: ReleaseDateAttributes,
}

fn show_path(id: DbId) -> String {
    format!("{BASE_PATH}/{id}")
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "StatisticsAnnouncement",
        id,
    })
}

fn redirect_to_show(id: DbId) -> Response {
    tracing::debug!(announcement_id = id, "Announcement already cancelled, redirecting");
    Redirect::to(&show_path(id)).into_response()
}

fn dto_errors<T: Validate>(input: &T) -> FieldErrors {
    input.validate().err().map(FieldErrors::from).unwrap_or_default()
}

/// Slug for a title, recording an error when a non-blank title has nothing
/// to slug (e.g. only punctuation). Blank titles are reported elsewhere.
fn slug_for(title: &str, errors: &mut FieldErrors) -> String {
    let slug = slugify(title);
    if slug.is_empty() && !title.trim().is_empty() {
        errors.add("title", "must contain at least one letter or number");
    }
    slug
}

// ---------------------------------------------------------------------------
// Listing and forms
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/statistics-announcements
///
/// Page through announcements, soonest release first. Without an explicit
/// `organisation_id` the listing is scoped to the current user's organisation.
pub async fn index(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Query(mut filter): Query<StatisticsAnnouncementFilter>,
) -> AppResult<impl IntoResponse> {
    if filter.organisation_id.is_none() {
        filter.organisation_id = user.organisation_id;
    }

    let (items, total) = StatisticsAnnouncementRepo::list(&state.pool, &filter).await?;

    Ok(Json(PageResponse {
        data: items,
        page: filter.page(),
        per_page: filter.per_page(),
        total,
    }))
}

/// GET /api/v1/admin/statistics-announcements/new
pub async fn new_form(CurrentUser(user): CurrentUser) -> AppResult<impl IntoResponse> {
    let form = AnnouncementForm {
        title: None,
        summary: None,
        organisation_id: user.organisation_id,
        topic_id: None,
        publication_type_id: None,
        current_release_date_attributes: ReleaseDateAttributes {
            precision: Some(ReleaseDatePrecision::TwoMonth.id()),
            ..Default::default()
        },
    };

    Ok(Json(DataResponse { data: form }))
}

/// GET /api/v1/admin/statistics-announcements/{id}
pub async fn show(
    CurrentUser(_user): CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let detail = StatisticsAnnouncementRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(DataResponse { data: detail }))
}

/// GET /api/v1/admin/statistics-announcements/{id}/edit
///
/// Same payload as `show`; the client renders it as a form.
pub async fn edit(
    user: CurrentUser,
    state: State<AppState>,
    id: Path<DbId>,
) -> AppResult<impl IntoResponse> {
    show(user, state, id).await
}

// ---------------------------------------------------------------------------
// Create / update
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/statistics-announcements
///
/// Create an announcement and its first release date, both credited to the
/// current user.
pub async fn create(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Json(input): Json<CreateStatisticsAnnouncement>,
) -> AppResult<impl IntoResponse> {
    let mut errors = dto_errors(&input);
    errors.merge(rules::validate_announcement(&AnnouncementAttributes {
        title: input.title.as_deref(),
        summary: input.summary.as_deref(),
        organisation_id: input.organisation_id,
        topic_id: input.topic_id,
        publication_type_id: input.publication_type_id,
    }));

    let date = input.current_release_date_attributes.as_ref();
    errors.merge(rules::validate_release_date(
        date.and_then(|d| d.release_date),
        date.and_then(|d| d.precision),
        date.and_then(|d| d.confirmed).unwrap_or(false),
    ));

    let slug = slug_for(input.title.as_deref().unwrap_or_default(), &mut errors);
    errors.into_result()?;

    let detail = StatisticsAnnouncementRepo::create(&state.pool, user.id, &slug, &input).await?;

    tracing::info!(
        announcement_id = detail.announcement.id,
        slug = %detail.announcement.slug,
        user_id = user.id,
        "Statistics announcement created",
    );

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, show_path(detail.announcement.id))],
        Json(NoticeResponse {
            data: detail,
            notice: NOTICE_CREATED,
        }),
    ))
}

/// PUT /api/v1/admin/statistics-announcements/{id}
///
/// Apply the supplied attributes. Nested release date attributes with an
/// `id` amend that date; without one they record a new current date.
pub async fn update(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStatisticsAnnouncement>,
) -> AppResult<impl IntoResponse> {
    let existing = StatisticsAnnouncementRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let mut errors = dto_errors(&input);
    errors.merge(rules::validate_announcement(&AnnouncementAttributes {
        title: input.title.as_deref().or(Some(existing.title.as_str())),
        summary: input.summary.as_deref().or(Some(existing.summary.as_str())),
        organisation_id: input.organisation_id.or(Some(existing.organisation_id)),
        topic_id: input.topic_id.or(Some(existing.topic_id)),
        publication_type_id: input
            .publication_type_id
            .or(Some(existing.publication_type_id)),
    }));

    if let Some(attrs) = &input.current_release_date_attributes {
        validate_date_change(&state, id, attrs, &mut errors).await?;
    }

    let slug = input.title.as_deref().map(|t| slug_for(t, &mut errors));
    errors.into_result()?;

    let detail =
        StatisticsAnnouncementRepo::update(&state.pool, id, user.id, slug.as_deref(), &input)
            .await?
            .ok_or_else(|| not_found(id))?;

    tracing::info!(announcement_id = id, user_id = user.id, "Statistics announcement updated");

    Ok(Json(NoticeResponse {
        data: detail,
        notice: NOTICE_UPDATED,
    }))
}

/// Validate nested release date attributes against the date they amend,
/// if any. Unsupplied values keep the amended date's values.
async fn validate_date_change(
    state: &AppState,
    announcement_id: DbId,
    attrs: &ReleaseDateAttributes,
    errors: &mut FieldErrors,
) -> AppResult<()> {
    let amended = match attrs.id {
        Some(date_id) => {
            let dates =
                StatisticsAnnouncementRepo::release_dates(&state.pool, announcement_id).await?;
            match dates.into_iter().find(|d| d.id == date_id) {
                Some(date) => Some(date),
                None => {
                    errors.add(
                        "current_release_date.id",
                        "does not belong to this announcement",
                    );
                    return Ok(());
                }
            }
        }
        None => None,
    };

    errors.merge(rules::validate_release_date(
        attrs
            .release_date
            .or(amended.as_ref().map(|d| d.release_date)),
        attrs.precision.or(amended.as_ref().map(|d| d.precision)),
        attrs
            .confirmed
            .or(amended.as_ref().map(|d| d.confirmed))
            .unwrap_or(false),
    ));
    Ok(())
}

// ---------------------------------------------------------------------------
// Cancellation
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/statistics-announcements/{id}/cancel
///
/// Cancellation form data, or 303 to `show` if already cancelled.
pub async fn cancel(
    CurrentUser(_user): CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let detail = StatisticsAnnouncementRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if detail.announcement.is_cancelled() {
        return Ok(redirect_to_show(id));
    }

    Ok(Json(DataResponse { data: detail }).into_response())
}

/// POST /api/v1/admin/statistics-announcements/{id}/cancel
///
/// Record the cancellation reason. 303 to `show` if already cancelled.
pub async fn publish_cancellation(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CancelStatisticsAnnouncement>,
) -> AppResult<Response> {
    let existing = StatisticsAnnouncementRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if existing.is_cancelled() {
        return Ok(redirect_to_show(id));
    }

    let reason = input.cancellation_reason.as_deref().map(str::trim);
    let mut errors = dto_errors(&input);
    errors.merge(rules::validate_cancellation_reason(reason));
    errors.into_result()?;

    // Lost a race with another cancellation.
    if StatisticsAnnouncementRepo::cancel(&state.pool, id, reason.unwrap_or_default(), user.id)
        .await?
        .is_none()
    {
        return Ok(redirect_to_show(id));
    }

    let detail = StatisticsAnnouncementRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(announcement_id = id, user_id = user.id, "Statistics announcement cancelled");

    Ok(Json(NoticeResponse {
        data: detail,
        notice: NOTICE_CANCELLED,
    })
    .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_for_punctuation_only_title_is_an_error() {
        let mut errors = FieldErrors::new();
        assert_eq!(slug_for("!!!", &mut errors), "");
        assert!(errors.get("title").is_some());
    }

    #[test]
    fn slug_for_blank_title_defers_to_presence_rule() {
        let mut errors = FieldErrors::new();
        slug_for("   ", &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn slug_for_regular_title() {
        let mut errors = FieldErrors::new();
        assert_eq!(
            slug_for("Crime in England & Wales", &mut errors),
            "crime-in-england-wales"
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn show_path_is_under_base_path() {
        assert_eq!(show_path(7), "/api/v1/admin/statistics-announcements/7");
    }
}
