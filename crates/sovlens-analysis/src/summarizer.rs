//! Per-keyword share-of-voice metrics.
//!
//! The reasoning model judges brand mentions and sentiment and applies the
//! formulas; this module only validates what comes back.

use std::sync::Arc;

use serde::Deserialize;
use sovlens_core::{KeywordBundle, KeywordSummary, VideoAnalysis, WebAnalysis};

use crate::error::ReasoningError;
use crate::reasoner::{parse_structured, Reasoner, ReasoningRequest, ReasoningTask};

const TEMPERATURE: f32 = 0.2;

/// Error text for a keyword with no records from any source.
pub const NO_DATA_MESSAGE: &str = "No data found on any platform.";

#[derive(Debug, Deserialize)]
struct MetricReply {
    #[serde(alias = "google_analysis")]
    web_analysis: WebAnalysis,
    #[serde(alias = "youtube_analysis")]
    video_analysis: VideoAnalysis,
    #[serde(default)]
    combined_insight: String,
}

/// Derives web and video metrics for one keyword bundle.
pub struct MetricSummarizer {
    reasoner: Arc<dyn Reasoner>,
}

impl MetricSummarizer {
    pub fn new(reasoner: Arc<dyn Reasoner>) -> Self {
        Self { reasoner }
    }

    /// Summarize one bundle. Never fails: problems become
    /// [`KeywordSummary::Failed`] carrying the bundle's keyword.
    ///
    /// An empty bundle short-circuits without a reasoning call.
    pub async fn summarize(&self, bundle: &KeywordBundle, brand_name: &str) -> KeywordSummary {
        if bundle.is_empty() {
            tracing::info!(
                keyword = %bundle.keyword,
                "no results from any source, skipping metric summary"
            );
            return KeywordSummary::failed(&bundle.keyword, NO_DATA_MESSAGE);
        }

        tracing::info!(keyword = %bundle.keyword, "generating metric summary");
        match self.try_summarize(bundle, brand_name).await {
            Ok(summary) => {
                tracing::info!(keyword = %bundle.keyword, "metric summary created");
                summary
            }
            Err(e) => {
                tracing::warn!(
                    keyword = %bundle.keyword,
                    error = %e,
                    "metric summary failed"
                );
                KeywordSummary::failed(&bundle.keyword, e.to_string())
            }
        }
    }

    /// Run the reasoning call and validate its reply.
    ///
    /// # Errors
    ///
    /// Returns the reasoning call's error, or [`ReasoningError::Malformed`]
    /// if the reply lacks numeric metrics for either source.
    pub async fn try_summarize(
        &self,
        bundle: &KeywordBundle,
        brand_name: &str,
    ) -> Result<KeywordSummary, ReasoningError> {
        let prompt = metric_prompt(bundle, brand_name)?;
        let reply = self
            .reasoner
            .complete(ReasoningRequest::structured(
                ReasoningTask::MetricSummary,
                prompt,
                TEMPERATURE,
            ))
            .await?;

        parse_metric_reply(&bundle.keyword, &reply)
    }
}

fn parse_metric_reply(keyword: &str, reply: &str) -> Result<KeywordSummary, ReasoningError> {
    const CONTEXT: &str = "metric summary";

    let value = parse_structured(reply, CONTEXT)?;
    let metrics: MetricReply =
        serde_json::from_value(value).map_err(|e| ReasoningError::malformed(CONTEXT, e))?;

    Ok(KeywordSummary::Analyzed {
        keyword: keyword.to_string(),
        web_analysis: WebAnalysis {
            sov: clamp_percentage(keyword, "web_analysis.sov", metrics.web_analysis.sov),
            sopv: clamp_percentage(keyword, "web_analysis.sopv", metrics.web_analysis.sopv),
        },
        video_analysis: VideoAnalysis {
            wsov: clamp_percentage(keyword, "video_analysis.wsov", metrics.video_analysis.wsov),
            sopv: clamp_percentage(keyword, "video_analysis.sopv", metrics.video_analysis.sopv),
        },
        combined_insight: metrics.combined_insight.trim().to_string(),
    })
}

fn clamp_percentage(keyword: &str, field: &'static str, value: f64) -> f64 {
    if (0.0..=100.0).contains(&value) {
        return value;
    }
    let clamped = value.clamp(0.0, 100.0);
    tracing::warn!(keyword, field, value, clamped, "metric outside [0, 100], clamping");
    clamped
}

fn metric_prompt(bundle: &KeywordBundle, brand_name: &str) -> Result<String, ReasoningError> {
    let keyword = &bundle.keyword;
    let data = serde_json::to_string_pretty(&serde_json::json!({
        "web_results": bundle.web_results,
        "video_results": bundle.video_results,
    }))
    .map_err(|e| ReasoningError::malformed("keyword bundle", e))?;

    Ok(format!(
        r#"Analyze the following data for the keyword "{keyword}" and the brand "{brand_name}".
The data holds two result sets: "web_results" (web search) and "video_results" (video search, with view counts).
Data: {data}

Calculate metrics for EACH source separately.

1. Web search results:
   - sov: (number of web results mentioning "{brand_name}") / (total web results) * 100
   - sopv: (number of web results mentioning "{brand_name}" with POSITIVE sentiment) / (number of web results mentioning "{brand_name}") * 100

2. Video results:
   - wsov: (total views of videos mentioning "{brand_name}") / (total views of all videos) * 100
   - sopv: (total views of POSITIVE sentiment videos mentioning "{brand_name}") / (total views of all videos mentioning "{brand_name}") * 100

If a denominator is zero, use 0 for that metric. Every metric is a number between 0 and 100.

Return a single JSON object with keys "web_analysis", "video_analysis" and "combined_insight" (one or two sentences).
Example: {{"keyword": "{keyword}", "web_analysis": {{"sov": 10.0, "sopv": 75.0}}, "video_analysis": {{"wsov": 5.5, "sopv": 90.0}}, "combined_insight": "Brand has low visibility but high positive sentiment on both platforms."}}"#
    ))
}
