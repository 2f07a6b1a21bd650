//! Topic entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use herald_core::types::{DbId, Timestamp};

/// A row from the `topics` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Topic {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a topic.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTopic {
    pub name: String,
    pub slug: String,
}
