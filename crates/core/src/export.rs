//! Export pipeline serializers.
//!
//! The API layer assembles a denormalized [`StoryboardExport`] snapshot
//! (storyboard, its scenes, each scene's resolved location and characters)
//! and hands it to [`render`]. Serialization is pure; the status side
//! effect (marking the storyboard `exported`) stays with the caller.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Snapshot types
// ---------------------------------------------------------------------------

/// Denormalized storyboard snapshot. Field order here is the JSON field
/// order of the export payload.
#[derive(Debug, Clone, Serialize)]
pub struct StoryboardExport {
    pub storyboard: StoryboardSummary,
    pub scenes: Vec<SceneExport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoryboardSummary {
    pub id: DbId,
    pub title: String,
    pub initial_prompt: Option<String>,
    pub script_content: Option<String>,
    /// Lifecycle status rendered as its wire string (`draft`, `generating`,
    /// `completed`, `exported`).
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Serialize)]
pub struct SceneExport {
    pub id: DbId,
    pub sequence_number: i32,
    pub title: String,
    pub description: String,
    pub location: Option<LocationRef>,
    pub characters: Vec<CharacterRef>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationRef {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CharacterRef {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Formats
// ---------------------------------------------------------------------------

/// Supported export formats.
///
/// `pdf` is structured plain text, not a binary PDF; the identifier and
/// the `.pdf` filename extension are kept as-is from the product boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
    Pdf,
}

impl ExportFormat {
    /// Filename extension for the suggested download name.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// Suggested filename for an exported storyboard.
    pub fn filename(self, storyboard_id: DbId) -> String {
        format!("storyboard_{storyboard_id}.{}", self.extension())
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Serialize a snapshot into the requested format.
pub fn render(export: &StoryboardExport, format: ExportFormat) -> Result<String, CoreError> {
    match format {
        ExportFormat::Json => serde_json::to_string_pretty(export)
            .map_err(|e| CoreError::Internal(format!("JSON serialization failed: {e}"))),
        ExportFormat::Csv => Ok(render_csv(export)),
        ExportFormat::Pdf => Ok(render_pdf_text(export)),
    }
}

/// Quote a CSV field: wrap in double quotes, doubling internal quotes.
fn csv_quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// One header row, one row per scene. Title/Description/Location/Characters
/// are always quoted; ids, sequence numbers and timestamps are not.
fn render_csv(export: &StoryboardExport) -> String {
    let mut rows =
        vec!["Scene ID,Sequence,Title,Description,Location,Characters,Created At,Updated At"
            .to_string()];

    for scene in &export.scenes {
        let location_name = scene.location.as_ref().map(|l| l.name.as_str()).unwrap_or("");
        let character_names = scene
            .characters
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join("; ");

        rows.push(
            [
                scene.id.to_string(),
                scene.sequence_number.to_string(),
                csv_quote(&scene.title),
                csv_quote(&scene.description),
                csv_quote(location_name),
                csv_quote(&character_names),
                scene.created_at.to_rfc3339(),
                scene.updated_at.to_rfc3339(),
            ]
            .join(","),
        );
    }

    rows.join("\n")
}

/// Structured text document: header block, optional prompt/script blocks,
/// then one block per scene. Location and character lines are omitted when
/// the scene has none.
fn render_pdf_text(export: &StoryboardExport) -> String {
    let storyboard = &export.storyboard;
    let mut lines = vec![
        format!("STORYBOARD: {}", storyboard.title),
        format!("Created: {}", storyboard.created_at.to_rfc3339()),
        format!("Status: {}", storyboard.status),
        String::new(),
    ];

    if let Some(prompt) = &storyboard.initial_prompt {
        lines.push(format!("Initial Prompt: {prompt}"));
        lines.push(String::new());
    }

    if let Some(script) = &storyboard.script_content {
        lines.push(format!("Script Content: {script}"));
        lines.push(String::new());
    }

    lines.push("SCENES:".to_string());
    lines.push(String::new());

    for scene in &export.scenes {
        lines.push(format!("Scene {}: {}", scene.sequence_number, scene.title));
        lines.push(format!("Description: {}", scene.description));

        if let Some(location) = &scene.location {
            lines.push(format!("Location: {}", location.name));
        }

        if !scene.characters.is_empty() {
            let names = scene
                .characters
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("Characters: {names}"));
        }

        lines.push(String::new());
    }

    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts() -> Timestamp {
        chrono::Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn sample_export() -> StoryboardExport {
        StoryboardExport {
            storyboard: StoryboardSummary {
                id: 7,
                title: "The Long Night".to_string(),
                initial_prompt: Some("A hero faces a challenge".to_string()),
                script_content: None,
                status: "completed".to_string(),
                created_at: ts(),
                updated_at: ts(),
            },
            scenes: vec![
                SceneExport {
                    id: 21,
                    sequence_number: 1,
                    title: "Character Introduction".to_string(),
                    description: "The hero said \"never\"".to_string(),
                    location: Some(LocationRef {
                        id: 3,
                        name: "Harbor".to_string(),
                        description: None,
                    }),
                    characters: vec![
                        CharacterRef {
                            id: 1,
                            name: "Mara".to_string(),
                            description: Some("Captain".to_string()),
                        },
                        CharacterRef {
                            id: 2,
                            name: "Ilya".to_string(),
                            description: None,
                        },
                    ],
                    created_at: ts(),
                    updated_at: ts(),
                },
                SceneExport {
                    id: 22,
                    sequence_number: 2,
                    title: "Rising Conflict".to_string(),
                    description: "Stakes are raised".to_string(),
                    location: None,
                    characters: vec![],
                    created_at: ts(),
                    updated_at: ts(),
                },
            ],
        }
    }

    fn empty_export() -> StoryboardExport {
        StoryboardExport {
            storyboard: StoryboardSummary {
                id: 9,
                title: "Empty".to_string(),
                initial_prompt: None,
                script_content: Some("INT. NOWHERE".to_string()),
                status: "draft".to_string(),
                created_at: ts(),
                updated_at: ts(),
            },
            scenes: vec![],
        }
    }

    // -- filenames -----------------------------------------------------------

    #[test]
    fn filenames_use_format_extension() {
        assert_eq!(ExportFormat::Json.filename(5), "storyboard_5.json");
        assert_eq!(ExportFormat::Csv.filename(5), "storyboard_5.csv");
        assert_eq!(ExportFormat::Pdf.filename(5), "storyboard_5.pdf");
    }

    #[test]
    fn format_deserializes_from_lowercase() {
        let format: ExportFormat = serde_json::from_str("\"pdf\"").unwrap();
        assert_eq!(format, ExportFormat::Pdf);
    }

    // -- JSON ----------------------------------------------------------------

    #[test]
    fn json_round_trips_structure() {
        let payload = render(&sample_export(), ExportFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&payload).unwrap();

        assert_eq!(parsed["storyboard"]["id"], 7);
        assert_eq!(parsed["storyboard"]["status"], "completed");
        assert_eq!(parsed["scenes"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["scenes"][0]["location"]["name"], "Harbor");
        assert_eq!(parsed["scenes"][0]["characters"][1]["name"], "Ilya");
        assert!(parsed["scenes"][1]["location"].is_null());
        assert_eq!(parsed["scenes"][1]["characters"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn json_export_with_zero_scenes_has_empty_array() {
        let payload = render(&empty_export(), ExportFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(parsed["scenes"].as_array().unwrap().len(), 0);
    }

    // -- CSV -----------------------------------------------------------------

    #[test]
    fn csv_has_header_and_one_row_per_scene() {
        let payload = render(&sample_export(), ExportFormat::Csv).unwrap();
        let lines: Vec<_> = payload.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Scene ID,Sequence,Title,Description,Location,Characters,Created At,Updated At"
        );
    }

    #[test]
    fn csv_doubles_internal_quotes() {
        let payload = render(&sample_export(), ExportFormat::Csv).unwrap();
        assert!(payload.contains("\"The hero said \"\"never\"\"\""));
    }

    #[test]
    fn csv_joins_character_names_with_semicolons() {
        let payload = render(&sample_export(), ExportFormat::Csv).unwrap();
        assert!(payload.contains("\"Mara; Ilya\""));
    }

    #[test]
    fn csv_renders_missing_location_and_characters_as_empty_quoted() {
        let payload = render(&sample_export(), ExportFormat::Csv).unwrap();
        let second_row = payload.lines().nth(2).unwrap();
        assert!(second_row.contains(",\"\",\"\","));
    }

    #[test]
    fn csv_export_with_zero_scenes_is_header_only() {
        let payload = render(&empty_export(), ExportFormat::Csv).unwrap();
        assert_eq!(payload.lines().count(), 1);
    }

    // -- PDF text ------------------------------------------------------------

    #[test]
    fn pdf_text_has_title_status_and_scene_blocks() {
        let payload = render(&sample_export(), ExportFormat::Pdf).unwrap();
        assert!(payload.starts_with("STORYBOARD: The Long Night\n"));
        assert!(payload.contains("Status: completed"));
        assert!(payload.contains("Initial Prompt: A hero faces a challenge"));
        assert!(payload.contains("Scene 1: Character Introduction"));
        assert!(payload.contains("Location: Harbor"));
        assert!(payload.contains("Characters: Mara, Ilya"));
    }

    #[test]
    fn pdf_text_omits_absent_blocks() {
        let payload = render(&sample_export(), ExportFormat::Pdf).unwrap();
        // No script content on the sample storyboard.
        assert!(!payload.contains("Script Content:"));
        // Scene 2 has no location and no characters.
        let scene_two = payload.split("Scene 2:").nth(1).unwrap();
        assert!(!scene_two.contains("Location:"));
        assert!(!scene_two.contains("Characters:"));
    }

    #[test]
    fn pdf_text_with_zero_scenes_still_has_scenes_heading() {
        let payload = render(&empty_export(), ExportFormat::Pdf).unwrap();
        assert!(payload.contains("SCENES:"));
        assert!(payload.contains("Script Content: INT. NOWHERE"));
    }
}
