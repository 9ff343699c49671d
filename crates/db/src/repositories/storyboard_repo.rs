//! Repository for the `storyboards` table.

use sqlx::PgPool;

use reelboard_core::types::DbId;

use crate::models::storyboard::{
    CreateStoryboard, Storyboard, StoryboardStatus, UpdateStoryboard,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, initial_prompt, script_content, status, created_at, updated_at";

/// Provides CRUD and status operations for storyboards.
pub struct StoryboardRepo;

impl StoryboardRepo {
    /// Insert a new storyboard, returning the created row. Status defaults
    /// to `draft` at the schema level.
    pub async fn create(
        pool: &PgPool,
        input: &CreateStoryboard,
    ) -> Result<Storyboard, sqlx::Error> {
        let query = format!(
            "INSERT INTO storyboards (title, initial_prompt, script_content)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Storyboard>(&query)
            .bind(&input.title)
            .bind(&input.initial_prompt)
            .bind(&input.script_content)
            .fetch_one(pool)
            .await
    }

    /// Find a storyboard by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Storyboard>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM storyboards WHERE id = $1");
        sqlx::query_as::<_, Storyboard>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all storyboards in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Storyboard>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM storyboards ORDER BY id ASC");
        sqlx::query_as::<_, Storyboard>(&query).fetch_all(pool).await
    }

    /// Ungated patch of title/status. Only non-`None` fields are applied;
    /// `updated_at` is always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStoryboard,
    ) -> Result<Option<Storyboard>, sqlx::Error> {
        let query = format!(
            "UPDATE storyboards SET
                title = COALESCE($2, title),
                status = COALESCE($3, status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Storyboard>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.status)
            .fetch_optional(pool)
            .await
    }

    /// Single-column status write used by the lifecycle controller.
    /// Refreshes `updated_at`; returns `true` if a row was updated.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: StoryboardStatus,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE storyboards SET status = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(status)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
