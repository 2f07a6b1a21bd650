//! Edition entity model, translations, and DTOs.

use herald_core::edition::EditionState;
use herald_core::locale::Locale;
use herald_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::translation::{self, Translation};

/// A row from the `editions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Edition {
    pub id: DbId,
    pub content_id: Uuid,
    pub document_type: String,
    pub slug: String,
    pub state: String,
    pub first_published_at: Option<Timestamp>,
    pub public_updated_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Edition {
    /// Parsed lifecycle state. `None` for a value this build does not know.
    pub fn edition_state(&self) -> Option<EditionState> {
        self.state.parse().ok()
    }
}

/// A row from the `edition_translations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EditionTranslation {
    pub id: DbId,
    pub edition_id: DbId,
    pub locale: String,
    pub title: String,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Translation for EditionTranslation {
    fn locale_code(&self) -> &str {
        &self.locale
    }
}

/// An edition together with all of its translations.
#[derive(Debug, Clone, Serialize)]
pub struct TranslatedEdition {
    pub edition: Edition,
    pub translations: Vec<EditionTranslation>,
}

impl TranslatedEdition {
    pub fn available_locales(&self) -> Vec<Locale> {
        translation::available_locales(&self.translations)
    }

    pub fn translation(&self, locale: &Locale) -> Option<&EditionTranslation> {
        translation::translation_for(&self.translations, locale)
    }
}

/// DTO for creating an edition with its default-locale content.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEdition {
    pub document_type: String,
    pub slug: String,
    /// Defaults to `draft` if omitted.
    pub state: Option<EditionState>,
    pub title: String,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub first_published_at: Option<Timestamp>,
    pub public_updated_at: Option<Timestamp>,
}

/// DTO for inserting or replacing one translation of an edition.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertEditionTranslation {
    pub locale: Locale,
    pub title: String,
    pub summary: Option<String>,
    pub body: Option<String>,
}
