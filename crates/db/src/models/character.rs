//! Character entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use reelboard_core::types::{DbId, Timestamp};

/// A row from the `characters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new character.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCharacter {
    pub name: String,
    pub description: Option<String>,
}

/// DTO for updating an existing character. `name` is `COALESCE`-patched;
/// `description` is tri-state (absent / null-to-clear / value).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCharacter {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::models::patch_field")]
    pub description: Option<Option<String>>,
}
