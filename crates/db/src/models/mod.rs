//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO for patches
//!
//! Patch DTOs distinguish "field absent" from "field explicitly null" for
//! nullable columns (`description`, `location_id`) with a double-`Option`:
//! the outer `Option` is presence, the inner is the new value. Plain
//! required columns use a single `Option` where `None` means untouched.

pub mod character;
pub mod location;
pub mod scene;
pub mod scene_character;
pub mod storyboard;

use serde::{Deserialize, Deserializer};

/// Deserializer for double-`Option` patch fields. Pair with
/// `#[serde(default, deserialize_with = "patch_field")]`: a missing key
/// stays `None` (untouched) while an explicit `null` becomes
/// `Some(None)` (clear).
pub fn patch_field<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
