//! Handlers for scenes, nested under their owning storyboard for
//! create/list and addressed directly for updates.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use reelboard_core::error::CoreError;
use reelboard_core::storyboard::{validate_required_text, validate_sequence_number};
use reelboard_core::types::DbId;
use reelboard_db::models::scene::{CreateScene, Scene, UpdateScene};
use reelboard_db::repositories::{LocationRepo, SceneRepo, StoryboardRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/storyboards/{id}/scenes
///
/// Overrides `input.storyboard_id` with the value from the URL path, then
/// verifies the storyboard and (when non-null) the location exist before
/// inserting.
pub async fn create(
    State(state): State<AppState>,
    Path(storyboard_id): Path<DbId>,
    Json(mut input): Json<CreateScene>,
) -> AppResult<(StatusCode, Json<Scene>)> {
    input.storyboard_id = storyboard_id;

    validate_sequence_number(input.sequence_number)?;
    validate_required_text(&input.title, "title")?;
    validate_required_text(&input.description, "description")?;

    StoryboardRepo::find_by_id(&state.pool, storyboard_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Storyboard",
            id: storyboard_id,
        }))?;

    if let Some(location_id) = input.location_id {
        LocationRepo::find_by_id(&state.pool, location_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Location",
                id: location_id,
            }))?;
    }

    let scene = SceneRepo::create(&state.pool, &input).await?;

    tracing::info!(
        scene_id = scene.id,
        storyboard_id,
        sequence_number = scene.sequence_number,
        "Scene created"
    );
    Ok((StatusCode::CREATED, Json(scene)))
}

/// GET /api/v1/storyboards/{id}/scenes
///
/// Always ordered by ascending sequence number.
pub async fn list_by_storyboard(
    State(state): State<AppState>,
    Path(storyboard_id): Path<DbId>,
) -> AppResult<Json<Vec<Scene>>> {
    let scenes = SceneRepo::list_by_storyboard(&state.pool, storyboard_id).await?;
    Ok(Json(scenes))
}

/// PUT /api/v1/scenes/{id}
///
/// An explicit null `location_id` detaches the scene from its location; a
/// non-null `location_id` must reference an existing location.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateScene>,
) -> AppResult<Json<Scene>> {
    if let Some(title) = &input.title {
        validate_required_text(title, "title")?;
    }
    if let Some(description) = &input.description {
        validate_required_text(description, "description")?;
    }

    if let Some(Some(location_id)) = input.location_id {
        LocationRepo::find_by_id(&state.pool, location_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Location",
                id: location_id,
            }))?;
    }

    let scene = SceneRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Scene", id }))?;
    Ok(Json(scene))
}
