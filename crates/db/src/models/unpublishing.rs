//! Unpublishing entity model and DTOs.

use herald_core::types::{DbId, Timestamp};
use herald_core::unpublishing::{self, UnpublishingReason};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::edition::TranslatedEdition;

/// A row from the `unpublishings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Unpublishing {
    pub id: DbId,
    pub edition_id: DbId,
    pub unpublishing_reason_id: i16,
    pub explanation: Option<String>,
    pub alternative_url: Option<String>,
    pub redirect: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Unpublishing {
    pub fn reason(&self) -> Option<UnpublishingReason> {
        UnpublishingReason::from_id(self.unpublishing_reason_id)
    }

    /// Whether this record satisfies the unpublishing rules.
    pub fn is_valid(&self) -> bool {
        unpublishing::validate(
            self.unpublishing_reason_id,
            self.redirect,
            self.alternative_url.as_deref(),
        )
        .is_ok()
    }
}

/// An unpublishing together with the edition it withdrew.
#[derive(Debug, Clone, Serialize)]
pub struct UnpublishingWithEdition {
    pub unpublishing: Unpublishing,
    pub edition: TranslatedEdition,
}

/// DTO for creating an unpublishing.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUnpublishing {
    pub edition_id: DbId,
    pub unpublishing_reason_id: i16,
    pub explanation: Option<String>,
    pub alternative_url: Option<String>,
    #[serde(default)]
    pub redirect: bool,
}
