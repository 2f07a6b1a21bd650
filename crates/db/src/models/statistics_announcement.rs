//! Statistics announcement model, release dates, and DTOs.

use herald_core::statistics_announcement::{
    self as rules, ReleaseDatePrecision, ReleaseStatus,
};
use herald_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A row from the `statistics_announcements` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatisticsAnnouncement {
    pub id: DbId,
    pub content_id: Uuid,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub organisation_id: DbId,
    pub topic_id: DbId,
    pub publication_type_id: i16,
    pub publication_id: Option<DbId>,
    pub creator_id: DbId,
    pub cancellation_reason: Option<String>,
    pub cancelled_at: Option<Timestamp>,
    pub cancelled_by_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl StatisticsAnnouncement {
    pub fn is_cancelled(&self) -> bool {
        self.cancelled_at.is_some()
    }
}

/// A row from the `statistics_announcement_dates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatisticsAnnouncementDate {
    pub id: DbId,
    pub statistics_announcement_id: DbId,
    pub release_date: Timestamp,
    pub precision: i16,
    pub confirmed: bool,
    pub change_note: Option<String>,
    pub creator_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl StatisticsAnnouncementDate {
    pub fn release_precision(&self) -> Option<ReleaseDatePrecision> {
        ReleaseDatePrecision::from_id(self.precision)
    }

    pub fn display_date(&self) -> Option<String> {
        self.release_precision()
            .map(|p| rules::display_date(self.release_date, p))
    }
}

/// An announcement with its current (most recent) release date and the
/// values derived from them.
#[derive(Debug, Clone, Serialize)]
pub struct StatisticsAnnouncementDetail {
    #[serde(flatten)]
    pub announcement: StatisticsAnnouncement,
    pub current_release_date: Option<StatisticsAnnouncementDate>,
    pub display_date: Option<String>,
    pub release_status: ReleaseStatus,
}

impl StatisticsAnnouncementDetail {
    pub fn new(
        announcement: StatisticsAnnouncement,
        current_release_date: Option<StatisticsAnnouncementDate>,
    ) -> Self {
        let display_date = current_release_date
            .as_ref()
            .and_then(StatisticsAnnouncementDate::display_date);
        let confirmed = current_release_date.as_ref().is_some_and(|d| d.confirmed);
        let release_status = rules::release_status(announcement.is_cancelled(), confirmed);
        Self {
            announcement,
            current_release_date,
            display_date,
            release_status,
        }
    }
}

/// Index row: announcement columns joined with its current release date.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatisticsAnnouncementSummary {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub organisation_id: DbId,
    pub publication_type_id: i16,
    pub cancelled_at: Option<Timestamp>,
    pub release_date: Option<Timestamp>,
    pub precision: Option<i16>,
    pub confirmed: Option<bool>,
}

/// Nested release date attributes accepted by create and update.
///
/// With an `id`, the identified date row is updated in place; without one a
/// new current release date is recorded.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct ReleaseDateAttributes {
    pub id: Option<DbId>,
    pub release_date: Option<Timestamp>,
    pub precision: Option<i16>,
    pub confirmed: Option<bool>,
    #[validate(length(max = 255, message = "is too long (maximum is 255 characters)"))]
    pub change_note: Option<String>,
}

/// DTO for creating an announcement.
///
/// Required attributes are optional here so a missing value surfaces as a
/// field error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateStatisticsAnnouncement {
    #[validate(length(max = 255, message = "is too long (maximum is 255 characters)"))]
    pub title: Option<String>,
    #[validate(length(max = 2000, message = "is too long (maximum is 2000 characters)"))]
    pub summary: Option<String>,
    pub organisation_id: Option<DbId>,
    pub topic_id: Option<DbId>,
    pub publication_type_id: Option<i16>,
    pub publication_id: Option<DbId>,
    #[validate(nested)]
    pub current_release_date_attributes: Option<ReleaseDateAttributes>,
}

/// DTO for updating an announcement. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStatisticsAnnouncement {
    #[validate(length(max = 255, message = "is too long (maximum is 255 characters)"))]
    pub title: Option<String>,
    #[validate(length(max = 2000, message = "is too long (maximum is 2000 characters)"))]
    pub summary: Option<String>,
    pub organisation_id: Option<DbId>,
    pub topic_id: Option<DbId>,
    pub publication_type_id: Option<i16>,
    /// Absent keeps the link, `null` clears it.
    #[serde(default, deserialize_with = "super::present_or_null")]
    pub publication_id: Option<Option<DbId>>,
    #[validate(nested)]
    pub current_release_date_attributes: Option<ReleaseDateAttributes>,
}

/// Body of the cancellation form.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CancelStatisticsAnnouncement {
    #[validate(length(max = 1000, message = "is too long (maximum is 1000 characters)"))]
    pub cancellation_reason: Option<String>,
}

/// Index filter (`?title=&organisation_id=&page=&per_page=`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatisticsAnnouncementFilter {
    pub title: Option<String>,
    pub organisation_id: Option<DbId>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl StatisticsAnnouncementFilter {
    /// 1-based page number, never below 1.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Page size clamped to `1..=MAX_PER_PAGE`.
    pub fn per_page(&self) -> i64 {
        self.per_page
            .unwrap_or(rules::DEFAULT_PER_PAGE)
            .clamp(1, rules::MAX_PER_PAGE)
    }

    /// Saturates for absurd page numbers; the query then returns no rows.
    pub fn offset(&self) -> i64 {
        (self.page() - 1).saturating_mul(self.per_page())
    }
}
