//! Handlers for sending records to the Publishing API on demand.

use std::str::FromStr;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use herald_core::error::CoreError;
use herald_core::types::DbId;
use herald_db::repositories::{
    EditionRepo, OrganisationRepo, StatisticsAnnouncementRepo, UnpublishingRepo,
};
use herald_publishing::{PublishOutcome, Publishable, PublishingApi, PublishingError};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Record types that can be published, as they appear in the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Editions,
    Organisations,
    Unpublishings,
    StatisticsAnnouncements,
}

impl FromStr for ContentKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "editions" => Ok(Self::Editions),
            "organisations" => Ok(Self::Organisations),
            "unpublishings" => Ok(Self::Unpublishings),
            "statistics-announcements" => Ok(Self::StatisticsAnnouncements),
            other => Err(AppError::BadRequest(format!(
                "Unknown content kind '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Publish,
    Republish,
}

/// POST /api/v1/admin/publishing/{kind}/{id}/publish
pub async fn publish(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, DbId)>,
) -> AppResult<impl IntoResponse> {
    let outcome = dispatch(&state, &kind, id, Action::Publish).await?;
    tracing::info!(kind = %kind, id, user_id = admin.user_id, "Record published on demand");
    Ok(Json(DataResponse { data: outcome }))
}

/// POST /api/v1/admin/publishing/{kind}/{id}/republish
///
/// 422 if the record is not publicly visible.
pub async fn republish(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, DbId)>,
) -> AppResult<impl IntoResponse> {
    let outcome = dispatch(&state, &kind, id, Action::Republish).await?;
    tracing::info!(kind = %kind, id, user_id = admin.user_id, "Record republished on demand");
    Ok(Json(DataResponse { data: outcome }))
}

async fn dispatch(
    state: &AppState,
    kind: &str,
    id: DbId,
    action: Action,
) -> AppResult<PublishOutcome> {
    let api = state.publishing.as_ref();
    let outcome = match kind.parse::<ContentKind>()? {
        ContentKind::Editions => {
            let edition = EditionRepo::find_translated(&state.pool, id)
                .await?
                .ok_or_else(|| not_found("Edition", id))?;
            send(api, &edition, action).await?
        }
        ContentKind::Organisations => {
            let organisation = OrganisationRepo::find_translated(&state.pool, id)
                .await?
                .ok_or_else(|| not_found("Organisation", id))?;
            send(api, &organisation, action).await?
        }
        ContentKind::Unpublishings => {
            let unpublishing = UnpublishingRepo::find_with_edition(&state.pool, id)
                .await?
                .ok_or_else(|| not_found("Unpublishing", id))?;
            send(api, &unpublishing, action).await?
        }
        ContentKind::StatisticsAnnouncements => {
            let announcement = StatisticsAnnouncementRepo::find_detail(&state.pool, id)
                .await?
                .ok_or_else(|| not_found("StatisticsAnnouncement", id))?;
            send(api, &announcement, action).await?
        }
    };
    Ok(outcome)
}

async fn send<P>(
    api: &PublishingApi,
    item: &P,
    action: Action,
) -> Result<PublishOutcome, PublishingError>
where
    P: Publishable + Sync,
{
    match action {
        Action::Publish => api.publish(item).await,
        Action::Republish => api.republish(item).await,
    }
}

fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}
