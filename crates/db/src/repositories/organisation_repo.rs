//! Repository for the `organisations` and `organisation_translations` tables.

use herald_core::locale::DEFAULT_LOCALE;
use herald_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::organisation::{
    CreateOrganisation, Organisation, OrganisationTranslation, TranslatedOrganisation,
    UpsertOrganisationTranslation,
};

const COLUMNS: &str = "id, content_id, slug, created_at, updated_at";

const TRANSLATION_COLUMNS: &str =
    "id, organisation_id, locale, name, acronym, created_at, updated_at";

/// Provides CRUD operations for organisations and their translations.
pub struct OrganisationRepo;

impl OrganisationRepo {
    /// Insert an organisation and its default-locale translation.
    pub async fn create(
        pool: &PgPool,
        input: &CreateOrganisation,
    ) -> Result<TranslatedOrganisation, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO organisations (content_id, slug) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        let organisation = sqlx::query_as::<_, Organisation>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.slug)
            .fetch_one(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO organisation_translations (organisation_id, locale, name, acronym)
             VALUES ($1, $2, $3, $4)
             RETURNING {TRANSLATION_COLUMNS}"
        );
        let translation = sqlx::query_as::<_, OrganisationTranslation>(&query)
            .bind(organisation.id)
            .bind(DEFAULT_LOCALE)
            .bind(&input.name)
            .bind(&input.acronym)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(TranslatedOrganisation {
            organisation,
            translations: vec![translation],
        })
    }

    /// Insert a translation, or replace the existing one for the same locale.
    pub async fn upsert_translation(
        pool: &PgPool,
        organisation_id: DbId,
        input: &UpsertOrganisationTranslation,
    ) -> Result<OrganisationTranslation, sqlx::Error> {
        let query = format!(
            "INSERT INTO organisation_translations (organisation_id, locale, name, acronym)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT ON CONSTRAINT uq_organisation_translations_locale
             DO UPDATE SET name = EXCLUDED.name, acronym = EXCLUDED.acronym, updated_at = NOW()
             RETURNING {TRANSLATION_COLUMNS}"
        );
        sqlx::query_as::<_, OrganisationTranslation>(&query)
            .bind(organisation_id)
            .bind(input.locale.as_str())
            .bind(&input.name)
            .bind(&input.acronym)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Organisation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM organisations WHERE id = $1");
        sqlx::query_as::<_, Organisation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Load an organisation with every translation, in insertion order.
    pub async fn find_translated(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TranslatedOrganisation>, sqlx::Error> {
        let Some(organisation) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let query = format!(
            "SELECT {TRANSLATION_COLUMNS} FROM organisation_translations
             WHERE organisation_id = $1 ORDER BY id"
        );
        let translations = sqlx::query_as::<_, OrganisationTranslation>(&query)
            .bind(id)
            .fetch_all(pool)
            .await?;

        Ok(Some(TranslatedOrganisation {
            organisation,
            translations,
        }))
    }
}
