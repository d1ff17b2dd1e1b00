//! Result types produced by the analysis pass.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Delivery format for the whole table. A survey export covers one session
/// delivery, never a mixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryFormat {
    Virtual,
    InPerson,
}

impl DeliveryFormat {
    /// The label emitted in reports.
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryFormat::Virtual => "Virtual (VILT)",
            DeliveryFormat::InPerson => "In-Person (ILT)",
        }
    }
}

/// Free-text feedback pulled from the designated comment columns, in row
/// order, trimmed, with empty entries dropped.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackBundle {
    pub recommendations: Vec<String>,
    pub highlights: Vec<String>,
}

impl FeedbackBundle {
    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty() && self.highlights.is_empty()
    }
}

/// Response-rate metrics. Unlike the score groups these are always present,
/// even when every value is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResponseRate {
    pub response_rate: f64,
    pub total_responses: usize,
    pub total_learners: u32,
}

/// The combined analysis output handed to the presentation layer.
///
/// Field names follow the report contract consumed downstream. A score group
/// with no contributing responses is an absent key, not null; presentation
/// must treat absence as "insufficient data", never as a failure.
#[derive(Debug, Serialize)]
pub struct AnalysisResult {
    #[serde(rename = "Instructor CSAT", skip_serializing_if = "Option::is_none")]
    pub instructor_csat: Option<f64>,
    #[serde(
        rename = "Overall Satisfaction",
        skip_serializing_if = "Option::is_none"
    )]
    pub overall_satisfaction: Option<f64>,
    #[serde(rename = "Content", skip_serializing_if = "Option::is_none")]
    pub content: Option<f64>,
    #[serde(rename = "Classroom", skip_serializing_if = "Option::is_none")]
    pub classroom: Option<f64>,
    /// Present only when the Classroom score is present.
    #[serde(rename = "Delivery_Type", skip_serializing_if = "Option::is_none")]
    pub delivery_type: Option<String>,
    #[serde(flatten)]
    pub response_rate: ResponseRate,
    pub feedback: FeedbackBundle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
}

/// One flattened row of the append-only run log CSV.
#[derive(Debug, Default, Serialize)]
pub struct SummaryRow {
    pub timestamp: DateTime<Utc>,
    pub source: Option<String>,
    pub instructor_csat: Option<f64>,
    pub overall_satisfaction: Option<f64>,
    pub content: Option<f64>,
    pub classroom: Option<f64>,
    pub delivery_type: Option<String>,
    pub response_rate: f64,
    pub total_responses: usize,
    pub total_learners: u32,
    pub recommendations: usize,
    pub highlights: usize,
    pub has_summary: bool,

    // error tracking
    pub error_type: Option<String>,
    pub error_message: Option<String>,
}

impl SummaryRow {
    pub fn from_result(result: &AnalysisResult) -> Self {
        SummaryRow {
            timestamp: Utc::now(),
            source: None,
            instructor_csat: result.instructor_csat,
            overall_satisfaction: result.overall_satisfaction,
            content: result.content,
            classroom: result.classroom,
            delivery_type: result.delivery_type.clone(),
            response_rate: result.response_rate.response_rate,
            total_responses: result.response_rate.total_responses,
            total_learners: result.response_rate.total_learners,
            recommendations: result.feedback.recommendations.len(),
            highlights: result.feedback.highlights.len(),
            has_summary: result.ai_summary.is_some(),
            error_type: None,
            error_message: None,
        }
    }

    /// Create an error record with timestamp and error information
    pub fn from_error(error_type: &str, error_message: &str) -> Self {
        SummaryRow {
            timestamp: Utc::now(),
            error_type: Some(error_type.to_string()),
            error_message: Some(error_message.to_string()),
            ..Default::default()
        }
    }

    /// Set the source the row was produced from (file path or URL)
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }
}
