//! Repository for the `statistics_announcements` and
//! `statistics_announcement_dates` tables.

use herald_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::models::statistics_announcement::{
    CreateStatisticsAnnouncement, ReleaseDateAttributes, StatisticsAnnouncement,
    StatisticsAnnouncementDate, StatisticsAnnouncementDetail, StatisticsAnnouncementFilter,
    StatisticsAnnouncementSummary, UpdateStatisticsAnnouncement,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, content_id, title, slug, summary, organisation_id, topic_id, \
                       publication_type_id, publication_id, creator_id, cancellation_reason, \
                       cancelled_at, cancelled_by_id, created_at, updated_at";

const DATE_COLUMNS: &str = "id, statistics_announcement_id, release_date, precision, confirmed, \
                            change_note, creator_id, created_at, updated_at";

/// Shared WHERE clause for the index query and its count.
const FILTER_CLAUSE: &str = "($1::TEXT IS NULL OR a.title ILIKE '%' || $1 || '%' ESCAPE '\\')
                             AND ($2::BIGINT IS NULL OR a.organisation_id = $2)";

/// Provides CRUD operations for statistics announcements.
pub struct StatisticsAnnouncementRepo;

impl StatisticsAnnouncementRepo {
    /// Insert an announcement and, when supplied, its first release date in a
    /// single transaction. Both rows record `creator_id` as their creator.
    pub async fn create(
        pool: &PgPool,
        creator_id: DbId,
        slug: &str,
        input: &CreateStatisticsAnnouncement,
    ) -> Result<StatisticsAnnouncementDetail, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO statistics_announcements
                (content_id, title, slug, summary, organisation_id, topic_id,
                 publication_type_id, publication_id, creator_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        let announcement = sqlx::query_as::<_, StatisticsAnnouncement>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.title)
            .bind(slug)
            .bind(&input.summary)
            .bind(input.organisation_id)
            .bind(input.topic_id)
            .bind(input.publication_type_id)
            .bind(input.publication_id)
            .bind(creator_id)
            .fetch_one(&mut *tx)
            .await?;

        let current_release_date = match &input.current_release_date_attributes {
            Some(attrs) => {
                Some(Self::insert_date(&mut tx, announcement.id, creator_id, attrs).await?)
            }
            None => None,
        };

        tx.commit().await?;

        Ok(StatisticsAnnouncementDetail::new(
            announcement,
            current_release_date,
        ))
    }

    /// Find an announcement by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<StatisticsAnnouncement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM statistics_announcements WHERE id = $1");
        sqlx::query_as::<_, StatisticsAnnouncement>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an announcement together with its current release date.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<StatisticsAnnouncementDetail>, sqlx::Error> {
        let Some(announcement) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let current = Self::current_release_date(pool, id).await?;
        Ok(Some(StatisticsAnnouncementDetail::new(announcement, current)))
    }

    /// The most recently recorded release date of an announcement.
    pub async fn current_release_date(
        pool: &PgPool,
        announcement_id: DbId,
    ) -> Result<Option<StatisticsAnnouncementDate>, sqlx::Error> {
        let query = format!(
            "SELECT {DATE_COLUMNS} FROM statistics_announcement_dates
             WHERE statistics_announcement_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, StatisticsAnnouncementDate>(&query)
            .bind(announcement_id)
            .fetch_optional(pool)
            .await
    }

    /// Every release date recorded for an announcement, newest first.
    pub async fn release_dates(
        pool: &PgPool,
        announcement_id: DbId,
    ) -> Result<Vec<StatisticsAnnouncementDate>, sqlx::Error> {
        let query = format!(
            "SELECT {DATE_COLUMNS} FROM statistics_announcement_dates
             WHERE statistics_announcement_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, StatisticsAnnouncementDate>(&query)
            .bind(announcement_id)
            .fetch_all(pool)
            .await
    }

    /// List announcements matching `filter`, ordered by current release date
    /// (soonest first, undated last). Returns the page and the total match count.
    pub async fn list(
        pool: &PgPool,
        filter: &StatisticsAnnouncementFilter,
    ) -> Result<(Vec<StatisticsAnnouncementSummary>, i64), sqlx::Error> {
        let title = filter
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(escape_like);

        let query = format!(
            "SELECT a.id, a.title, a.slug, a.organisation_id, a.publication_type_id,
                    a.cancelled_at, d.release_date, d.precision, d.confirmed
             FROM statistics_announcements a
             LEFT JOIN LATERAL (
                 SELECT release_date, precision, confirmed
                 FROM statistics_announcement_dates
                 WHERE statistics_announcement_id = a.id
                 ORDER BY created_at DESC, id DESC
                 LIMIT 1
             ) d ON TRUE
             WHERE {FILTER_CLAUSE}
             ORDER BY d.release_date ASC NULLS LAST, a.id ASC
             LIMIT $3 OFFSET $4"
        );
        let items = sqlx::query_as::<_, StatisticsAnnouncementSummary>(&query)
            .bind(&title)
            .bind(filter.organisation_id)
            .bind(filter.per_page())
            .bind(filter.offset())
            .fetch_all(pool)
            .await?;

        let count_query =
            format!("SELECT COUNT(*) FROM statistics_announcements a WHERE {FILTER_CLAUSE}");
        let total = sqlx::query_scalar::<_, i64>(&count_query)
            .bind(&title)
            .bind(filter.organisation_id)
            .fetch_one(pool)
            .await?;

        Ok((items, total))
    }

    /// Update an announcement. Only non-`None` fields in `input` are applied;
    /// `publication_id: Some(None)` unlinks the publication.
    ///
    /// Nested release date attributes with an `id` update that date row (it
    /// must belong to this announcement, otherwise `RowNotFound`); without an
    /// `id` a new current release date is recorded with `actor_id` as creator.
    ///
    /// Returns `None` if no announcement with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        actor_id: DbId,
        slug: Option<&str>,
        input: &UpdateStatisticsAnnouncement,
    ) -> Result<Option<StatisticsAnnouncementDetail>, sqlx::Error> {
        let publication_id_provided = input.publication_id.is_some();
        let publication_id = input.publication_id.flatten();

        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE statistics_announcements SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                summary = COALESCE($4, summary),
                organisation_id = COALESCE($5, organisation_id),
                topic_id = COALESCE($6, topic_id),
                publication_type_id = COALESCE($7, publication_type_id),
                publication_id = CASE WHEN $8 THEN $9 ELSE publication_id END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(announcement) = sqlx::query_as::<_, StatisticsAnnouncement>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.summary)
            .bind(input.organisation_id)
            .bind(input.topic_id)
            .bind(input.publication_type_id)
            .bind(publication_id_provided)
            .bind(publication_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        if let Some(attrs) = &input.current_release_date_attributes {
            match attrs.id {
                Some(date_id) => {
                    Self::update_date(&mut tx, id, date_id, attrs).await?;
                }
                None => {
                    Self::insert_date(&mut tx, id, actor_id, attrs).await?;
                }
            }
        }

        tx.commit().await?;

        let current = Self::current_release_date(pool, id).await?;
        Ok(Some(StatisticsAnnouncementDetail::new(announcement, current)))
    }

    /// Mark an announcement as cancelled.
    ///
    /// Returns `None` if the announcement does not exist or is already
    /// cancelled; an existing cancellation is never overwritten.
    pub async fn cancel(
        pool: &PgPool,
        id: DbId,
        reason: &str,
        actor_id: DbId,
    ) -> Result<Option<StatisticsAnnouncement>, sqlx::Error> {
        let query = format!(
            "UPDATE statistics_announcements SET
                cancellation_reason = $2,
                cancelled_at = NOW(),
                cancelled_by_id = $3,
                updated_at = NOW()
             WHERE id = $1 AND cancelled_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StatisticsAnnouncement>(&query)
            .bind(id)
            .bind(reason)
            .bind(actor_id)
            .fetch_optional(pool)
            .await
    }

    async fn insert_date(
        tx: &mut Transaction<'_, Postgres>,
        announcement_id: DbId,
        creator_id: DbId,
        attrs: &ReleaseDateAttributes,
    ) -> Result<StatisticsAnnouncementDate, sqlx::Error> {
        let query = format!(
            "INSERT INTO statistics_announcement_dates
                (statistics_announcement_id, release_date, precision, confirmed,
                 change_note, creator_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {DATE_COLUMNS}"
        );
        sqlx::query_as::<_, StatisticsAnnouncementDate>(&query)
            .bind(announcement_id)
            .bind(attrs.release_date)
            .bind(attrs.precision)
            .bind(attrs.confirmed.unwrap_or(false))
            .bind(&attrs.change_note)
            .bind(creator_id)
            .fetch_one(&mut **tx)
            .await
    }

    async fn update_date(
        tx: &mut Transaction<'_, Postgres>,
        announcement_id: DbId,
        date_id: DbId,
        attrs: &ReleaseDateAttributes,
    ) -> Result<StatisticsAnnouncementDate, sqlx::Error> {
        let query = format!(
            "UPDATE statistics_announcement_dates SET
                release_date = COALESCE($3, release_date),
                precision = COALESCE($4, precision),
                confirmed = COALESCE($5, confirmed),
                change_note = COALESCE($6, change_note),
                updated_at = NOW()
             WHERE id = $1 AND statistics_announcement_id = $2
             RETURNING {DATE_COLUMNS}"
        );
        sqlx::query_as::<_, StatisticsAnnouncementDate>(&query)
            .bind(date_id)
            .bind(announcement_id)
            .bind(attrs.release_date)
            .bind(attrs.precision)
            .bind(attrs.confirmed)
            .bind(&attrs.change_note)
            .fetch_optional(&mut **tx)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }
}

/// Escape `LIKE` metacharacters so a title filter matches literally.
fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
