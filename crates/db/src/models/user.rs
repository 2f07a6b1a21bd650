//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use herald_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub organisation_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    /// Defaults to `writer` if omitted.
    pub role: Option<String>,
    pub organisation_id: Option<DbId>,
}
