//! Handlers for the `/locations` resource. Shapes mirror `/characters`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use reelboard_core::error::CoreError;
use reelboard_core::storyboard::validate_required_text;
use reelboard_core::types::DbId;
use reelboard_db::models::location::{CreateLocation, Location, UpdateLocation};
use reelboard_db::repositories::LocationRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/locations
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLocation>,
) -> AppResult<(StatusCode, Json<Location>)> {
    validate_required_text(&input.name, "name")?;

    let location = LocationRepo::create(&state.pool, &input).await?;

    tracing::info!(location_id = location.id, "Location created");
    Ok((StatusCode::CREATED, Json(location)))
}

/// GET /api/v1/locations
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Location>>> {
    let locations = LocationRepo::list(&state.pool).await?;
    Ok(Json(locations))
}

/// PUT /api/v1/locations/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLocation>,
) -> AppResult<Json<Location>> {
    if let Some(name) = &input.name {
        validate_required_text(name, "name")?;
    }

    let location = LocationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Location",
            id,
        }))?;
    Ok(Json(location))
}
