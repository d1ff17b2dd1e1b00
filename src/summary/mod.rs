//! Feedback summarization.
//!
//! [`Summarizer`] is the async trait for turning a feedback bundle into a
//! natural-language synthesis. [`BedrockSummarizer`] implements it against
//! AWS Bedrock. [`request_summary`] wraps a call so that any failure
//! degrades to "no summary" instead of reaching the caller.

mod bedrock;

pub use bedrock::BedrockSummarizer;

use crate::analyzers::types::FeedbackBundle;
use anyhow::Result;
use tracing::{debug, warn};

/// Produces a natural-language synthesis of collected feedback.
#[async_trait::async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, feedback: &FeedbackBundle) -> Result<String>;
}

/// Requests a summary, tolerating failure.
///
/// A service error of any kind (network, auth, malformed response) is logged
/// and collapsed to `None`; the analysis result simply omits the summary.
pub async fn request_summary(
    summarizer: &dyn Summarizer,
    feedback: &FeedbackBundle,
) -> Option<String> {
    match summarizer.summarize(feedback).await {
        Ok(summary) => {
            let summary = summary.trim().to_string();
            debug!(chars = summary.len(), "Feedback summary received");
            if summary.is_empty() { None } else { Some(summary) }
        }
        Err(e) => {
            warn!(error = %e, "Feedback summarization failed, continuing without summary");
            None
        }
    }
}
