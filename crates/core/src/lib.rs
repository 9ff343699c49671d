//! Domain logic for the reelboard storyboard service.
//!
//! This crate is free of database and HTTP dependencies: it holds the
//! shared ID/timestamp types, the error taxonomy, storyboard validation
//! helpers, the rule-based scene synthesizer, and the export serializers.
//! The `db` and `api` crates build on top of it.

pub mod error;
pub mod export;
pub mod storyboard;
pub mod synthesis;
pub mod types;
