//! Route definitions for the storyboard resource and its scene
//! sub-resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{scene, storyboard};
use crate::state::AppState;

/// Routes mounted at `/storyboards`.
///
/// ```text
/// GET    /                   list
/// POST   /                   create
/// GET    /{id}               get_by_id
/// PUT    /{id}               update
/// POST   /{id}/generate      generate
/// POST   /{id}/export        export
/// GET    /{id}/scenes        list_by_storyboard
/// POST   /{id}/scenes        create scene
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(storyboard::list).post(storyboard::create))
        .route(
            "/{id}",
            get(storyboard::get_by_id).put(storyboard::update),
        )
        .route("/{id}/generate", post(storyboard::generate))
        .route("/{id}/export", post(storyboard::export))
        .route(
            "/{id}/scenes",
            get(scene::list_by_storyboard).post(scene::create),
        )
}
