pub mod character;
pub mod health;
pub mod location;
pub mod scene;
pub mod storyboard;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /storyboards                       list, create
/// /storyboards/{id}                  get, update (ungated patch)
/// /storyboards/{id}/generate         generate scenes (POST)
/// /storyboards/{id}/export           export snapshot (POST)
/// /storyboards/{id}/scenes           list, create
///
/// /scenes/{id}                       update
/// /scenes/{id}/characters            list, assign (POST)
/// /scenes/{id}/characters/{char_id}  remove (DELETE)
///
/// /characters                        list, create
/// /characters/{id}                   update
///
/// /locations                         list, create
/// /locations/{id}                    update
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/storyboards", storyboard::router())
        .nest("/scenes", scene::router())
        .nest("/characters", character::router())
        .nest("/locations", location::router())
}
