//! Repository for the `scenes` table.

use sqlx::PgPool;

use reelboard_core::types::DbId;

use crate::models::scene::{CreateScene, Scene, UpdateScene};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, storyboard_id, sequence_number, title, description, \
    location_id, created_at, updated_at";

/// Provides CRUD operations for scenes.
pub struct SceneRepo;

impl SceneRepo {
    /// Insert a new scene, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateScene) -> Result<Scene, sqlx::Error> {
        let query = format!(
            "INSERT INTO scenes
                (storyboard_id, sequence_number, title, description, location_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Scene>(&query)
            .bind(input.storyboard_id)
            .bind(input.sequence_number)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.location_id)
            .fetch_one(pool)
            .await
    }

    /// Find a scene by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Scene>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scenes WHERE id = $1");
        sqlx::query_as::<_, Scene>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all scenes for a storyboard, ordered by sequence number
    /// ascending (id breaks ties for a stable order).
    pub async fn list_by_storyboard(
        pool: &PgPool,
        storyboard_id: DbId,
    ) -> Result<Vec<Scene>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM scenes
             WHERE storyboard_id = $1
             ORDER BY sequence_number ASC, id ASC"
        );
        sqlx::query_as::<_, Scene>(&query)
            .bind(storyboard_id)
            .fetch_all(pool)
            .await
    }

    /// Update a scene. `title`/`description` apply only when present;
    /// `location_id` is tri-state (inner `None` detaches the location).
    /// `updated_at` is always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateScene,
    ) -> Result<Option<Scene>, sqlx::Error> {
        let query = format!(
            "UPDATE scenes SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                location_id = CASE WHEN $4 THEN $5 ELSE location_id END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Scene>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.location_id.is_some())
            .bind(input.location_id.flatten())
            .fetch_optional(pool)
            .await
    }
}
