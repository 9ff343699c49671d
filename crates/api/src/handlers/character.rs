//! Handlers for the `/characters` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use reelboard_core::error::CoreError;
use reelboard_core::storyboard::validate_required_text;
use reelboard_core::types::DbId;
use reelboard_db::models::character::{Character, CreateCharacter, UpdateCharacter};
use reelboard_db::repositories::CharacterRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/characters
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCharacter>,
) -> AppResult<(StatusCode, Json<Character>)> {
    validate_required_text(&input.name, "name")?;

    let character = CharacterRepo::create(&state.pool, &input).await?;

    tracing::info!(character_id = character.id, "Character created");
    Ok((StatusCode::CREATED, Json(character)))
}

/// GET /api/v1/characters
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Character>>> {
    let characters = CharacterRepo::list(&state.pool).await?;
    Ok(Json(characters))
}

/// PUT /api/v1/characters/{id}
///
/// Patch semantics: absent fields are untouched; an explicit null
/// `description` clears it.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCharacter>,
) -> AppResult<Json<Character>> {
    if let Some(name) = &input.name {
        validate_required_text(name, "name")?;
    }

    let character = CharacterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;
    Ok(Json(character))
}
