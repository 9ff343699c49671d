//! Route definitions for directly-addressed scenes and the
//! scene/character assignment sub-resource.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::{scene, scene_character};
use crate::state::AppState;

/// Routes mounted at `/scenes`.
///
/// ```text
/// PUT    /{id}                              update
/// GET    /{id}/characters                   list_characters
/// POST   /{id}/characters                   assign
/// DELETE /{id}/characters/{character_id}    remove
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", put(scene::update))
        .route(
            "/{id}/characters",
            get(scene_character::list_characters).post(scene_character::assign),
        )
        .route(
            "/{id}/characters/{character_id}",
            delete(scene_character::remove),
        )
}
