//! Route definitions for the character resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::character;
use crate::state::AppState;

/// Routes mounted at `/characters`.
///
/// ```text
/// GET    /       list
/// POST   /       create
/// PUT    /{id}   update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(character::list).post(character::create))
        .route("/{id}", put(character::update))
}
