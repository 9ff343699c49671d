//! Storyboard entity model, lifecycle status enum, and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use reelboard_core::types::{DbId, Timestamp};

/// Lifecycle status of a storyboard.
///
/// Normal flow is monotonic (`draft` -> `generating` -> `completed` ->
/// `exported`); the single permitted backward transition is
/// `generating` -> `draft` when scene generation fails. Only the
/// generate/export operations are gated on this; `UpdateStoryboard` is an
/// ungated administrative patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "storyboard_status", rename_all = "lowercase")]
pub enum StoryboardStatus {
    Draft,
    Generating,
    Completed,
    Exported,
}

impl StoryboardStatus {
    /// Wire string for the status, as stored in Postgres and serialized
    /// to JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            StoryboardStatus::Draft => "draft",
            StoryboardStatus::Generating => "generating",
            StoryboardStatus::Completed => "completed",
            StoryboardStatus::Exported => "exported",
        }
    }
}

/// A row from the `storyboards` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Storyboard {
    pub id: DbId,
    pub title: String,
    pub initial_prompt: Option<String>,
    pub script_content: Option<String>,
    pub status: StoryboardStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new storyboard. Status always starts at `draft`.
///
/// Invariant (checked by the handler): at least one of `initial_prompt`
/// or `script_content` must be present.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStoryboard {
    pub title: String,
    pub initial_prompt: Option<String>,
    pub script_content: Option<String>,
}

/// DTO for the ungated storyboard patch. Both fields `COALESCE`-patched;
/// neither is clearable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStoryboard {
    pub title: Option<String>,
    pub status: Option<StoryboardStatus>,
}
