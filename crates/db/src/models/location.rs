//! Location entity model and DTOs. Same mutation rules as Character.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use reelboard_core::types::{DbId, Timestamp};

/// A row from the `locations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Location {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new location.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLocation {
    pub name: String,
    pub description: Option<String>,
}

/// DTO for updating an existing location.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLocation {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::models::patch_field")]
    pub description: Option<Option<String>>,
}
