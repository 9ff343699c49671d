//! Storyboard input validation helpers.
//!
//! Used by the API handlers before any row is written. Referential checks
//! (does the storyboard/location exist?) stay in the handlers because they
//! need the store; the rules here are purely structural.

use crate::error::CoreError;

/// Validate that a required text field is non-empty after trimming.
///
/// `field` names the offending field in the error message.
pub fn validate_required_text(value: &str, field: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Validate the storyboard creation invariant: at least one of
/// `initial_prompt` or `script_content` must be present.
pub fn validate_storyboard_content(
    initial_prompt: Option<&str>,
    script_content: Option<&str>,
) -> Result<(), CoreError> {
    if initial_prompt.is_none() && script_content.is_none() {
        return Err(CoreError::Validation(
            "Either initial_prompt or script_content must be provided".to_string(),
        ));
    }
    Ok(())
}

/// Pick the text the scene synthesizer runs on: `script_content` if
/// present, else `initial_prompt`.
///
/// Both absent means the storyboard has nothing to generate from, which is
/// a validation failure (the storyboard stays in `draft`).
pub fn generation_source<'a>(
    initial_prompt: Option<&'a str>,
    script_content: Option<&'a str>,
) -> Result<&'a str, CoreError> {
    script_content.or(initial_prompt).ok_or_else(|| {
        CoreError::Validation(
            "Storyboard must have either initial_prompt or script_content to generate scenes"
                .to_string(),
        )
    })
}

/// Validate that a scene sequence number is non-negative.
pub fn validate_sequence_number(sequence_number: i32) -> Result<(), CoreError> {
    if sequence_number < 0 {
        return Err(CoreError::Validation(format!(
            "sequence_number must be >= 0, got {sequence_number}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
