use crate::types::DbId;

/// Domain-level error taxonomy shared by all crates.
///
/// - `NotFound` -- a referenced entity id does not exist at the point an
///   operation requires it to.
/// - `Validation` -- malformed or constraint-violating input.
/// - `Conflict` -- attempted duplicate of a unique relationship.
/// - `Internal` -- unclassified failure (storage or serialization).
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
