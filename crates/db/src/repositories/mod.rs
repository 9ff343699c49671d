//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Referential-integrity
//! pre-checks (does the parent exist?) belong to the callers.

pub mod character_repo;
pub mod location_repo;
pub mod scene_character_repo;
pub mod scene_repo;
pub mod storyboard_repo;

pub use character_repo::CharacterRepo;
pub use location_repo::LocationRepo;
pub use scene_character_repo::SceneCharacterRepo;
pub use scene_repo::SceneRepo;
pub use storyboard_repo::StoryboardRepo;
