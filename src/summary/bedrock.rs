use anyhow::{Context, Result};
use aws_sdk_bedrockruntime::primitives::Blob;
use tracing::debug;

use super::Summarizer;
use crate::analyzers::types::FeedbackBundle;

const DEFAULT_MODEL_ID: &str = "anthropic.claude-v2";
const DEFAULT_REGION: &str = "us-east-1";

/// Summarizes feedback through an AWS Bedrock text-generation model.
///
/// Uses the ambient AWS credentials (env vars, instance profile, etc.); the
/// model and region can be overridden with `BEDROCK_MODEL_ID` and
/// `BEDROCK_REGION`.
pub struct BedrockSummarizer {
    client: aws_sdk_bedrockruntime::Client,
    model_id: String,
}

impl BedrockSummarizer {
    pub async fn new() -> Self {
        let region = std::env::var("BEDROCK_REGION").unwrap_or_else(|_| DEFAULT_REGION.into());
        let config = aws_config::from_env()
            .region(aws_config::Region::new(region))
            .load()
            .await;

        Self {
            client: aws_sdk_bedrockruntime::Client::new(&config),
            model_id: std::env::var("BEDROCK_MODEL_ID")
                .unwrap_or_else(|_| DEFAULT_MODEL_ID.into()),
        }
    }
}

#[async_trait::async_trait]
impl Summarizer for BedrockSummarizer {
    async fn summarize(&self, feedback: &FeedbackBundle) -> Result<String> {
        let prompt = build_prompt(feedback);

        let body = serde_json::to_vec(&serde_json::json!({
            "prompt": prompt,
            "max_tokens_to_sample": 2000,
            "temperature": 0.7,
            "top_p": 1,
        }))?;

        debug!(model_id = %self.model_id, prompt_chars = prompt.len(), "Invoking Bedrock model");

        let response = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body))
            .send()
            .await
            .with_context(|| format!("Bedrock InvokeModel failed for '{}'", self.model_id))?;

        let json: serde_json::Value = serde_json::from_slice(response.body.as_ref())
            .context("Bedrock response body is not valid JSON")?;

        json["completion"]
            .as_str()
            .map(|s| s.trim().to_string())
            .ok_or_else(|| anyhow::anyhow!("Bedrock response has no 'completion' field"))
    }
}

fn build_prompt(feedback: &FeedbackBundle) -> String {
    let positive_feedback = feedback.highlights.join("\n");
    let improvement_feedback = feedback.recommendations.join("\n");

    format!(
        "Human: Please analyze these course feedback comments and provide a concise summary:\n\n\
         Positive Feedback:\n{positive_feedback}\n\n\
         Areas for Improvement:\n{improvement_feedback}\n\n\
         Please provide a brief summary that includes:\n\
         1. Key positive themes\n\
         2. Main areas for improvement\n\
         3. Overall sentiment\n\n\
         Assistant: "
    )
}
