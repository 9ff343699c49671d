//! HTTP handlers, one module per resource.
//!
//! Plain CRUD goes straight through the repositories; referential checks
//! (parent storyboard, referenced location, scene/character pair) happen
//! here, not in the repo layer. `storyboard` additionally hosts the
//! lifecycle controller for the two gated bulk operations, generate and
//! export.

pub mod character;
pub mod location;
pub mod scene;
pub mod scene_character;
pub mod storyboard;
