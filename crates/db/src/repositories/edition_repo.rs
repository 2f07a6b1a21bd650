//! Repository for the `editions` and `edition_translations` tables.

use herald_core::edition::EditionState;
use herald_core::locale::DEFAULT_LOCALE;
use herald_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::edition::{
    CreateEdition, Edition, EditionTranslation, TranslatedEdition, UpsertEditionTranslation,
};

const COLUMNS: &str = "id, content_id, document_type, slug, state, first_published_at, \
                       public_updated_at, created_at, updated_at";

const TRANSLATION_COLUMNS: &str =
    "id, edition_id, locale, title, summary, body, created_at, updated_at";

/// Provides CRUD operations for editions and their translations.
pub struct EditionRepo;

impl EditionRepo {
    /// Insert an edition and its default-locale translation.
    ///
    /// If `state` is `None` in the input, defaults to `draft`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateEdition,
    ) -> Result<TranslatedEdition, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO editions
                (content_id, document_type, slug, state, first_published_at, public_updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let edition = sqlx::query_as::<_, Edition>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.document_type)
            .bind(&input.slug)
            .bind(input.state.unwrap_or(EditionState::Draft).as_str())
            .bind(input.first_published_at)
            .bind(input.public_updated_at)
            .fetch_one(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO edition_translations (edition_id, locale, title, summary, body)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {TRANSLATION_COLUMNS}"
        );
        let translation = sqlx::query_as::<_, EditionTranslation>(&query)
            .bind(edition.id)
            .bind(DEFAULT_LOCALE)
            .bind(&input.title)
            .bind(&input.summary)
            .bind(&input.body)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(TranslatedEdition {
            edition,
            translations: vec![translation],
        })
    }

    /// Insert a translation, or replace the existing one for the same locale.
    pub async fn upsert_translation(
        pool: &PgPool,
        edition_id: DbId,
        input: &UpsertEditionTranslation,
    ) -> Result<EditionTranslation, sqlx::Error> {
        let query = format!(
            "INSERT INTO edition_translations (edition_id, locale, title, summary, body)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT ON CONSTRAINT uq_edition_translations_locale
             DO UPDATE SET title = EXCLUDED.title, summary = EXCLUDED.summary,
                           body = EXCLUDED.body, updated_at = NOW()
             RETURNING {TRANSLATION_COLUMNS}"
        );
        sqlx::query_as::<_, EditionTranslation>(&query)
            .bind(edition_id)
            .bind(input.locale.as_str())
            .bind(&input.title)
            .bind(&input.summary)
            .bind(&input.body)
            .fetch_one(pool)
            .await
    }

    /// Move an edition to a new lifecycle state.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_state(
        pool: &PgPool,
        id: DbId,
        state: EditionState,
    ) -> Result<Option<Edition>, sqlx::Error> {
        let query = format!(
            "UPDATE editions SET state = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Edition>(&query)
            .bind(id)
            .bind(state.as_str())
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Edition>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM editions WHERE id = $1");
        sqlx::query_as::<_, Edition>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Load an edition with every translation, in insertion order.
    pub async fn find_translated(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TranslatedEdition>, sqlx::Error> {
        let Some(edition) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let translations = Self::translations(pool, id).await?;
        Ok(Some(TranslatedEdition {
            edition,
            translations,
        }))
    }

    /// All translations of an edition, oldest first.
    pub async fn translations(
        pool: &PgPool,
        edition_id: DbId,
    ) -> Result<Vec<EditionTranslation>, sqlx::Error> {
        let query = format!(
            "SELECT {TRANSLATION_COLUMNS} FROM edition_translations
             WHERE edition_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, EditionTranslation>(&query)
            .bind(edition_id)
            .fetch_all(pool)
            .await
    }
}
