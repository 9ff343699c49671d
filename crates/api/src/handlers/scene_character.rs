//! Handlers for the scene/character assignment sub-resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use serde::Deserialize;

use reelboard_core::error::CoreError;
use reelboard_core::types::DbId;
use reelboard_db::models::character::Character;
use reelboard_db::models::scene_character::SceneCharacter;
use reelboard_db::repositories::{CharacterRepo, SceneCharacterRepo, SceneRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for assigning a character to a scene.
#[derive(Debug, Deserialize)]
pub struct AssignCharacterRequest {
    pub character_id: DbId,
}

/// POST /api/v1/scenes/{scene_id}/characters
///
/// Fails 404 if the scene or character is missing, 409 if the pair
/// already exists.
pub async fn assign(
    State(state): State<AppState>,
    Path(scene_id): Path<DbId>,
    Json(body): Json<AssignCharacterRequest>,
) -> AppResult<(StatusCode, Json<SceneCharacter>)> {
    let character_id = body.character_id;

    SceneRepo::find_by_id(&state.pool, scene_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Scene",
            id: scene_id,
        }))?;

    CharacterRepo::find_by_id(&state.pool, character_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id: character_id,
        }))?;

    if SceneCharacterRepo::exists(&state.pool, scene_id, character_id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Character {character_id} is already assigned to scene {scene_id}"
        ))));
    }

    let assignment = SceneCharacterRepo::assign(&state.pool, scene_id, character_id).await?;

    tracing::info!(scene_id, character_id, "Character assigned to scene");
    Ok((StatusCode::CREATED, Json(assignment)))
}

/// DELETE /api/v1/scenes/{scene_id}/characters/{character_id}
///
/// Idempotent: returns `true` exactly when a row existed and was removed,
/// `false` otherwise -- including for ids that never existed.
pub async fn remove(
    State(state): State<AppState>,
    Path((scene_id, character_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<bool>> {
    let removed = SceneCharacterRepo::remove(&state.pool, scene_id, character_id).await?;

    tracing::info!(scene_id, character_id, removed, "Character removal from scene");
    Ok(Json(removed))
}

/// GET /api/v1/scenes/{scene_id}/characters
///
/// Plain read: an unknown scene id yields an empty list, not a 404.
pub async fn list_characters(
    State(state): State<AppState>,
    Path(scene_id): Path<DbId>,
) -> AppResult<Json<Vec<Character>>> {
    let characters = SceneCharacterRepo::list_characters_for_scene(&state.pool, scene_id).await?;
    Ok(Json(characters))
}
