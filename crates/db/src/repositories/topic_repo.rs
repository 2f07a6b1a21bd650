//! Repository for the `topics` table.

use herald_core::types::DbId;
use sqlx::PgPool;

use crate::models::topic::{CreateTopic, Topic};

const COLUMNS: &str = "id, name, slug, created_at, updated_at";

/// Provides lookups and inserts for topics.
pub struct TopicRepo;

impl TopicRepo {
    /// Insert a new topic, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTopic) -> Result<Topic, sqlx::Error> {
        let query = format!("INSERT INTO topics (name, slug) VALUES ($1, $2) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Topic>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Topic>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM topics WHERE id = $1");
        sqlx::query_as::<_, Topic>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
