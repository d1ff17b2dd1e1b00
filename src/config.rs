//! Survey column configuration.
//!
//! [`SurveyConfig`] names the question-ID columns feeding each composite
//! score, the delivery-format indicator columns, and the free-text feedback
//! columns. The default matches the Qualtrics course-feedback export; a JSON
//! file can rewire the IDs for a different survey program.

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SurveyConfig {
    /// Columns pooled into the "Instructor CSAT" score.
    pub instructor_columns: Vec<String>,
    /// Columns pooled into the "Overall Satisfaction" score.
    pub overall_columns: Vec<String>,
    /// Columns pooled into the "Content" score.
    pub content_columns: Vec<String>,
    /// Answered only in virtual sessions; any rated response here marks the
    /// whole table as virtual delivery.
    pub virtual_indicator: String,
    /// In-person counterpart to the virtual indicator.
    pub in_person_indicator: String,
    /// Classroom column shared by both delivery formats.
    pub shared_classroom: String,
    /// Free-text column holding improvement suggestions.
    pub recommendations_column: String,
    /// Free-text column holding course highlights.
    pub highlights_column: String,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            instructor_columns: vec!["QID127".into(), "QID128".into(), "QID129".into()],
            overall_columns: vec!["QID1".into(), "QID2".into()],
            content_columns: vec!["QID31".into(), "QID67".into(), "QID32".into()],
            virtual_indicator: "QID130".into(),
            in_person_indicator: "QID58".into(),
            shared_classroom: "QID59".into(),
            recommendations_column: "QID138_TEXT".into(),
            highlights_column: "QID142_TEXT".into(),
        }
    }
}

impl SurveyConfig {
    /// Loads the config from a JSON file at `path`. Missing keys fall back
    /// to the Qualtrics defaults.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read survey config '{path}'"))?;
        let config: SurveyConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse survey config '{path}'"))?;
        Ok(config)
    }
}
