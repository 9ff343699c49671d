//! Scene entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use reelboard_core::types::{DbId, Timestamp};

/// A row from the `scenes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Scene {
    pub id: DbId,
    pub storyboard_id: DbId,
    pub sequence_number: i32,
    pub title: String,
    pub description: String,
    pub location_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new scene. The handler verifies the storyboard and
/// (when non-null) location exist before inserting.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateScene {
    #[serde(default)]
    pub storyboard_id: DbId,
    pub sequence_number: i32,
    pub title: String,
    pub description: String,
    pub location_id: Option<DbId>,
}

/// DTO for updating an existing scene. `title`/`description` are
/// `COALESCE`-patched (NOT NULL columns); `location_id` is tri-state so an
/// explicit null detaches the scene from its location.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateScene {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::models::patch_field")]
    pub location_id: Option<Option<DbId>>,
}
