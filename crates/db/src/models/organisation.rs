//! Organisation entity model, translations, and DTOs.

use herald_core::locale::Locale;
use herald_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::translation::{self, Translation};

/// A row from the `organisations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Organisation {
    pub id: DbId,
    pub content_id: Uuid,
    pub slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `organisation_translations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrganisationTranslation {
    pub id: DbId,
    pub organisation_id: DbId,
    pub locale: String,
    pub name: String,
    pub acronym: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Translation for OrganisationTranslation {
    fn locale_code(&self) -> &str {
        &self.locale
    }
}

/// An organisation together with all of its translations.
#[derive(Debug, Clone, Serialize)]
pub struct TranslatedOrganisation {
    pub organisation: Organisation,
    pub translations: Vec<OrganisationTranslation>,
}

impl TranslatedOrganisation {
    pub fn available_locales(&self) -> Vec<Locale> {
        translation::available_locales(&self.translations)
    }

    pub fn translation(&self, locale: &Locale) -> Option<&OrganisationTranslation> {
        translation::translation_for(&self.translations, locale)
    }
}

/// DTO for creating an organisation with its default-locale name.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrganisation {
    pub slug: String,
    pub name: String,
    pub acronym: Option<String>,
}

/// DTO for inserting or replacing one translation of an organisation.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertOrganisationTranslation {
    pub locale: Locale,
    pub name: String,
    pub acronym: Option<String>,
}
