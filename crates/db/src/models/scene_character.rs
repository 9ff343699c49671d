//! Scene/character junction row.

use serde::Serialize;
use sqlx::FromRow;

use reelboard_core::types::{DbId, Timestamp};

/// A row from the `scene_characters` junction table. The
/// (scene_id, character_id) pair is unique.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SceneCharacter {
    pub id: DbId,
    pub scene_id: DbId,
    pub character_id: DbId,
    pub created_at: Timestamp,
}
