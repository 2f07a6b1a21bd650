//! Repository for the `unpublishings` table.

use herald_core::types::DbId;
use sqlx::PgPool;

use crate::models::unpublishing::{CreateUnpublishing, Unpublishing, UnpublishingWithEdition};
use crate::repositories::EditionRepo;

const COLUMNS: &str = "id, edition_id, unpublishing_reason_id, explanation, alternative_url, \
                       redirect, created_at, updated_at";

/// Provides CRUD operations for unpublishings.
pub struct UnpublishingRepo;

impl UnpublishingRepo {
    /// Insert a new unpublishing, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateUnpublishing,
    ) -> Result<Unpublishing, sqlx::Error> {
        let query = format!(
            "INSERT INTO unpublishings
                (edition_id, unpublishing_reason_id, explanation, alternative_url, redirect)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Unpublishing>(&query)
            .bind(input.edition_id)
            .bind(input.unpublishing_reason_id)
            .bind(&input.explanation)
            .bind(&input.alternative_url)
            .bind(input.redirect)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Unpublishing>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM unpublishings WHERE id = $1");
        sqlx::query_as::<_, Unpublishing>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Load an unpublishing together with its edition and the edition's
    /// translations.
    pub async fn find_with_edition(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<UnpublishingWithEdition>, sqlx::Error> {
        let Some(unpublishing) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let Some(edition) = EditionRepo::find_translated(pool, unpublishing.edition_id).await?
        else {
            return Ok(None);
        };
        Ok(Some(UnpublishingWithEdition {
            unpublishing,
            edition,
        }))
    }
}
