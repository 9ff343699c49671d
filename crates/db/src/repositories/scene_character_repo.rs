//! Repository for the `scene_characters` junction table.

use sqlx::PgPool;

use reelboard_core::types::DbId;

use crate::models::character::Character;
use crate::models::scene_character::SceneCharacter;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, scene_id, character_id, created_at";

/// Provides assignment operations for the scene/character many-to-many.
pub struct SceneCharacterRepo;

impl SceneCharacterRepo {
    /// Insert an assignment, returning the created row. The table's
    /// `uq_scene_characters_scene_character` constraint backs the
    /// handler-level duplicate pre-check.
    pub async fn assign(
        pool: &PgPool,
        scene_id: DbId,
        character_id: DbId,
    ) -> Result<SceneCharacter, sqlx::Error> {
        let query = format!(
            "INSERT INTO scene_characters (scene_id, character_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SceneCharacter>(&query)
            .bind(scene_id)
            .bind(character_id)
            .fetch_one(pool)
            .await
    }

    /// Whether an assignment already exists for the pair.
    pub async fn exists(
        pool: &PgPool,
        scene_id: DbId,
        character_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let row: Option<(DbId,)> = sqlx::query_as(
            "SELECT id FROM scene_characters WHERE scene_id = $1 AND character_id = $2",
        )
        .bind(scene_id)
        .bind(character_id)
        .fetch_optional(pool)
        .await?;
        Ok(row.is_some())
    }

    /// Delete an assignment by pair. Returns `true` if a row existed and
    /// was removed; `false` otherwise (including unknown ids). Never
    /// errors on absence.
    pub async fn remove(
        pool: &PgPool,
        scene_id: DbId,
        character_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM scene_characters WHERE scene_id = $1 AND character_id = $2",
        )
        .bind(scene_id)
        .bind(character_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the characters assigned to a scene, in assignment order.
    pub async fn list_characters_for_scene(
        pool: &PgPool,
        scene_id: DbId,
    ) -> Result<Vec<Character>, sqlx::Error> {
        sqlx::query_as::<_, Character>(
            "SELECT c.id, c.name, c.description, c.created_at
             FROM scene_characters sc
             INNER JOIN characters c ON c.id = sc.character_id
             WHERE sc.scene_id = $1
             ORDER BY sc.id ASC",
        )
        .bind(scene_id)
        .fetch_all(pool)
        .await
    }
}
