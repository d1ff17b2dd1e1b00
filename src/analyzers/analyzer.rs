//! The full analysis pass over one survey export.

use anyhow::Result;
use tracing::{debug, info};

use crate::analyzers::feedback::extract_feedback;
use crate::analyzers::modality::{classify, classroom_columns};
use crate::analyzers::response_rate::response_rate;
use crate::analyzers::scores::pooled_mean;
use crate::analyzers::types::AnalysisResult;
use crate::config::SurveyConfig;
use crate::parser::ResponseTable;
use crate::summary::{Summarizer, request_summary};

/// Scores one parsed survey export into an [`AnalysisResult`].
///
/// `total_learners` is the expected respondent count (0 when unknown).
/// `summarizer` is `None` when AI summarization is disabled; when enabled it
/// is only invoked if any free-text feedback was collected, and its failures
/// never surface — the summary field is simply omitted.
///
/// Partial data is never an error: score groups with no contributing
/// responses and the delivery label tied to the Classroom score are absent
/// fields in the result.
#[tracing::instrument(skip_all, fields(rows = table.row_count(), total_learners))]
pub async fn analyze(
    table: &ResponseTable,
    config: &SurveyConfig,
    total_learners: u32,
    summarizer: Option<&dyn Summarizer>,
) -> Result<AnalysisResult> {
    let rate = response_rate(table, total_learners);

    let instructor_csat = pooled_mean(table, &config.instructor_columns);
    let overall_satisfaction = pooled_mean(table, &config.overall_columns);
    let content = pooled_mean(table, &config.content_columns);

    let format = classify(table, config);
    let classroom = pooled_mean(table, &classroom_columns(format, config));
    // Delivery label and Classroom score stay in lockstep: no score, no label.
    let delivery_type = classroom.map(|_| format.label().to_string());

    let feedback = extract_feedback(table, config);

    debug!(
        instructor_csat,
        overall_satisfaction,
        content,
        classroom,
        delivery = delivery_type.as_deref(),
        recommendations = feedback.recommendations.len(),
        highlights = feedback.highlights.len(),
        "Scores computed"
    );

    let ai_summary = match summarizer {
        Some(summarizer) if !feedback.is_empty() => {
            request_summary(summarizer, &feedback).await
        }
        _ => None,
    };

    info!(
        total_responses = rate.total_responses,
        response_rate = rate.response_rate,
        has_summary = ai_summary.is_some(),
        "Survey export analyzed"
    );

    Ok(AnalysisResult {
        instructor_csat,
        overall_satisfaction,
        content,
        classroom,
        delivery_type,
        response_rate: rate,
        feedback,
        ai_summary,
    })
}
