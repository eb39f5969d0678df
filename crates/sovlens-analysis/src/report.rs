//! Cross-keyword, cross-platform strategy report.

use std::sync::Arc;

use sovlens_core::KeywordSummary;

use crate::error::ReasoningError;
use crate::reasoner::{Reasoner, ReasoningRequest, ReasoningTask};

const TEMPERATURE: f32 = 0.4;

/// Report body returned when synthesis fails.
pub const REPORT_FAILURE_SENTINEL: &str = "Error: Could not generate the final strategic report.";

/// Turns the full set of keyword summaries into one executive narrative.
pub struct ReportSynthesizer {
    reasoner: Arc<dyn Reasoner>,
}

impl ReportSynthesizer {
    pub fn new(reasoner: Arc<dyn Reasoner>) -> Self {
        Self { reasoner }
    }

    /// Produce the markdown report, or [`REPORT_FAILURE_SENTINEL`] on failure.
    pub async fn synthesize(&self, summaries: &[KeywordSummary], brand_name: &str) -> String {
        tracing::info!(
            summaries = summaries.len(),
            "synthesizing final strategic report"
        );

        match self.try_synthesize(summaries, brand_name).await {
            Ok(report) => {
                tracing::info!("final strategic report generated");
                report
            }
            Err(e) => {
                tracing::warn!(error = %e, "final report generation failed");
                REPORT_FAILURE_SENTINEL.to_string()
            }
        }
    }

    /// Synthesize without the sentinel fallback.
    ///
    /// # Errors
    ///
    /// Returns the reasoning call's error, or [`ReasoningError::EmptyCompletion`]
    /// if the reply is blank.
    pub async fn try_synthesize(
        &self,
        summaries: &[KeywordSummary],
        brand_name: &str,
    ) -> Result<String, ReasoningError> {
        let prompt = report_prompt(summaries, brand_name)?;
        let reply = self
            .reasoner
            .complete(ReasoningRequest::text(
                ReasoningTask::StrategicReport,
                prompt,
                TEMPERATURE,
            ))
            .await?;

        let report = reply.trim();
        if report.is_empty() {
            return Err(ReasoningError::EmptyCompletion);
        }
        Ok(report.to_string())
    }
}

fn report_prompt(summaries: &[KeywordSummary], brand_name: &str) -> Result<String, ReasoningError> {
    let data = serde_json::to_string_pretty(summaries)
        .map_err(|e| ReasoningError::malformed("keyword summaries", e))?;

    Ok(format!(
        r#"You are the Head of Marketing Strategy at "{brand_name}". You have received an analysis covering both web search and video search for multiple keywords.
Synthesize this multi-platform data into a single, high-level executive report.

Data from all keyword analyses (entries with an "error" key could not be analyzed):
{data}

Structure the report as follows:
1. Executive Summary: our brand's overall digital presence.
2. Platform Performance Analysis: compare web search and video. Are we stronger in text content or video content? Where is our sentiment better?
3. Keyword Opportunity Analysis: rank the keywords by growth opportunity on each platform.
4. Strategic Recommendations: exactly 3 high-level, actionable recommendations, each explicitly connecting an insight from web search with one from video. For example, "Create video reviews for topics we already rank well for in web search."

Write it as a polished, final markdown report."#
    ))
}
