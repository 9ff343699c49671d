//! Handlers for the `/storyboards` resource, including the lifecycle
//! controller for the two gated bulk operations.
//!
//! `generate` and `export` are the only status-transition-checked paths:
//! generate walks draft -> generating -> completed (reverting to draft on
//! failure), export finishes at exported. The plain `update` handler is an
//! intentionally ungated administrative patch and can set any status.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use serde::{Deserialize, Serialize};

use reelboard_core::error::CoreError;
use reelboard_core::export::{
    self, CharacterRef, ExportFormat, LocationRef, SceneExport, StoryboardExport,
    StoryboardSummary,
};
use reelboard_core::storyboard::{
    generation_source, validate_required_text, validate_storyboard_content,
};
use reelboard_core::synthesis::synthesize;
use reelboard_core::types::DbId;
use reelboard_db::models::scene::CreateScene;
use reelboard_db::models::scene::Scene;
use reelboard_db::models::storyboard::{
    CreateStoryboard, Storyboard, StoryboardStatus, UpdateStoryboard,
};
use reelboard_db::repositories::{
    LocationRepo, SceneCharacterRepo, SceneRepo, StoryboardRepo,
};
use reelboard_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// POST /api/v1/storyboards
///
/// Fails validation unless at least one of `initial_prompt` or
/// `script_content` is provided.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateStoryboard>,
) -> AppResult<(StatusCode, Json<Storyboard>)> {
    validate_required_text(&input.title, "title")?;
    validate_storyboard_content(
        input.initial_prompt.as_deref(),
        input.script_content.as_deref(),
    )?;

    let storyboard = StoryboardRepo::create(&state.pool, &input).await?;

    tracing::info!(storyboard_id = storyboard.id, "Storyboard created");
    Ok((StatusCode::CREATED, Json(storyboard)))
}

/// GET /api/v1/storyboards
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Storyboard>>> {
    let storyboards = StoryboardRepo::list(&state.pool).await?;
    Ok(Json(storyboards))
}

/// GET /api/v1/storyboards/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Storyboard>> {
    let storyboard = StoryboardRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Storyboard",
            id,
        }))?;
    Ok(Json(storyboard))
}

/// PUT /api/v1/storyboards/{id}
///
/// Unconditional field patch of title/status; deliberately not checked
/// against the lifecycle transition table.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStoryboard>,
) -> AppResult<Json<Storyboard>> {
    if let Some(title) = &input.title {
        validate_required_text(title, "title")?;
    }

    let storyboard = StoryboardRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Storyboard",
            id,
        }))?;
    Ok(Json(storyboard))
}

// ---------------------------------------------------------------------------
// POST /storyboards/{id}/generate
// ---------------------------------------------------------------------------

/// Run the scene synthesizer over the storyboard's text and persist the
/// resulting scenes.
///
/// Preconditions: the storyboard exists and has `script_content` or
/// `initial_prompt` (checked before any status write, so a validation
/// failure leaves the storyboard at `draft`). On success the storyboard
/// ends at `completed` with N new scenes numbered 1..N in synthesizer
/// order.
///
/// If anything fails after entering `generating`, the status is reverted
/// to `draft` best-effort and the original error is returned. Scenes
/// inserted before the failure are not retracted.
pub async fn generate(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, Json<Vec<Scene>>)> {
    let storyboard = StoryboardRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Storyboard",
            id,
        }))?;

    let source = generation_source(
        storyboard.initial_prompt.as_deref(),
        storyboard.script_content.as_deref(),
    )?
    .to_owned();

    StoryboardRepo::set_status(&state.pool, id, StoryboardStatus::Generating).await?;

    match persist_generated_scenes(&state.pool, id, &source).await {
        Ok(scenes) => {
            tracing::info!(storyboard_id = id, scene_count = scenes.len(), "Scenes generated");
            Ok((StatusCode::CREATED, Json(scenes)))
        }
        Err(err) => {
            tracing::error!(storyboard_id = id, error = %err, "Scene generation failed");
            if let Err(revert_err) =
                StoryboardRepo::set_status(&state.pool, id, StoryboardStatus::Draft).await
            {
                // Never mask the original error with the revert failure.
                tracing::error!(
                    storyboard_id = id,
                    error = %revert_err,
                    "Failed to revert storyboard status to draft"
                );
            }
            Err(err)
        }
    }
}

/// Fallible tail of `generate`: synthesize drafts, insert them as scenes
/// numbered from 1, then mark the storyboard completed.
async fn persist_generated_scenes(
    pool: &DbPool,
    storyboard_id: DbId,
    source: &str,
) -> Result<Vec<Scene>, AppError> {
    let drafts = synthesize(source);

    let mut scenes = Vec::with_capacity(drafts.len());
    for (index, draft) in drafts.iter().enumerate() {
        let input = CreateScene {
            storyboard_id,
            sequence_number: index as i32 + 1,
            title: draft.title.to_string(),
            description: draft.description.to_string(),
            // Locations are assigned later, never by generation.
            location_id: None,
        };
        scenes.push(SceneRepo::create(pool, &input).await?);
    }

    StoryboardRepo::set_status(pool, storyboard_id, StoryboardStatus::Completed).await?;
    Ok(scenes)
}

// ---------------------------------------------------------------------------
// POST /storyboards/{id}/export
// ---------------------------------------------------------------------------

/// Request body for exporting a storyboard.
#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub format: ExportFormat,
}

/// Serialized export payload plus suggested download filename.
#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub data: String,
    pub filename: String,
}

/// Assemble the denormalized snapshot, serialize it, and mark the
/// storyboard `exported` (regardless of format).
pub async fn export(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<ExportRequest>,
) -> AppResult<Json<ExportResponse>> {
    let storyboard = StoryboardRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Storyboard",
            id,
        }))?;

    let scenes = SceneRepo::list_by_storyboard(&state.pool, id).await?;

    let mut scene_exports = Vec::with_capacity(scenes.len());
    for scene in scenes {
        let location = match scene.location_id {
            Some(location_id) => LocationRepo::find_by_id(&state.pool, location_id)
                .await?
                .map(|l| LocationRef {
                    id: l.id,
                    name: l.name,
                    description: l.description,
                }),
            None => None,
        };

        let characters = SceneCharacterRepo::list_characters_for_scene(&state.pool, scene.id)
            .await?
            .into_iter()
            .map(|c| CharacterRef {
                id: c.id,
                name: c.name,
                description: c.description,
            })
            .collect();

        scene_exports.push(SceneExport {
            id: scene.id,
            sequence_number: scene.sequence_number,
            title: scene.title,
            description: scene.description,
            location,
            characters,
            created_at: scene.created_at,
            updated_at: scene.updated_at,
        });
    }

    let snapshot = StoryboardExport {
        storyboard: StoryboardSummary {
            id: storyboard.id,
            title: storyboard.title,
            initial_prompt: storyboard.initial_prompt,
            script_content: storyboard.script_content,
            status: storyboard.status.as_str().to_string(),
            created_at: storyboard.created_at,
            updated_at: storyboard.updated_at,
        },
        scenes: scene_exports,
    };

    let data = export::render(&snapshot, body.format)?;
    let filename = body.format.filename(id);

    StoryboardRepo::set_status(&state.pool, id, StoryboardStatus::Exported).await?;

    tracing::info!(storyboard_id = id, format = ?body.format, "Storyboard exported");
    Ok(Json(ExportResponse { data, filename }))
}
