//! Pipeline orchestration.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use sovlens_core::{AppConfig, BrandContext, KeywordBundle, KeywordSummary, SearchResult, VideoResult};
use sovlens_sources::SourceFetcher;

use crate::keywords::KeywordExpander;
use crate::reasoner::Reasoner;
use crate::report::ReportSynthesizer;
use crate::summarizer::MetricSummarizer;

/// Knobs for one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSettings {
    /// Keywords requested from the expander.
    pub keyword_count: usize,
    /// Records per source per keyword.
    pub result_limit: usize,
    /// Keyword units processed at once. `1` is strictly sequential.
    pub max_concurrent_keywords: usize,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            keyword_count: 5,
            result_limit: 10,
            max_concurrent_keywords: 1,
        }
    }
}

impl PipelineSettings {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            keyword_count: config.keyword_count,
            result_limit: config.result_limit,
            max_concurrent_keywords: config.max_concurrent_keywords,
        }
    }
}

/// Terminal state of a run.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    /// Every keyword's summary, in keyword order, plus the synthesized report.
    Completed {
        summaries: Vec<KeywordSummary>,
        report: String,
    },
    /// Nothing was analyzed, so no report was requested.
    NoData,
}

/// Drives expand → fetch → summarize → synthesize for one brand.
pub struct Orchestrator<W, V> {
    context: BrandContext,
    settings: PipelineSettings,
    expander: KeywordExpander,
    web: W,
    video: V,
    summarizer: MetricSummarizer,
    synthesizer: ReportSynthesizer,
}

impl<W, V> Orchestrator<W, V>
where
    W: SourceFetcher<Record = SearchResult>,
    V: SourceFetcher<Record = VideoResult>,
{
    pub fn new(
        context: BrandContext,
        settings: PipelineSettings,
        reasoner: Arc<dyn Reasoner>,
        web: W,
        video: V,
    ) -> Self {
        Self {
            context,
            settings,
            expander: KeywordExpander::new(Arc::clone(&reasoner)),
            web,
            video,
            summarizer: MetricSummarizer::new(Arc::clone(&reasoner)),
            synthesizer: ReportSynthesizer::new(reasoner),
        }
    }

    #[must_use]
    pub fn context(&self) -> &BrandContext {
        &self.context
    }

    /// Run the full pipeline from a seed keyword.
    pub async fn run(&self, seed: &str) -> PipelineOutcome {
        tracing::info!(
            seed,
            brand = %self.context.brand_name,
            competitors = ?self.context.competitors,
            "starting share-of-voice run"
        );

        let keywords = self
            .expander
            .expand(seed, &self.context.brand_name, self.settings.keyword_count)
            .await;

        let summaries = self.analyze_keywords(&keywords).await;
        self.report(summaries).await
    }

    /// Analyze each keyword independently.
    ///
    /// Returns exactly one summary per input keyword, in input order, even
    /// when keyword units run concurrently.
    pub async fn analyze_keywords(&self, keywords: &[String]) -> Vec<KeywordSummary> {
        let max_concurrent = self.settings.max_concurrent_keywords.max(1);
        tracing::info!(
            keywords = keywords.len(),
            max_concurrent,
            "starting multi-keyword analysis"
        );

        stream::iter(keywords)
            .map(|keyword| self.analyze_keyword(keyword))
            .buffered(max_concurrent)
            .collect()
            .await
    }

    /// Fetch both sources for one keyword and summarize the bundle.
    pub async fn analyze_keyword(&self, keyword: &str) -> KeywordSummary {
        let limit = self.settings.result_limit;
        let (web_results, video_results) = tokio::join!(
            self.web.fetch(keyword, limit),
            self.video.fetch(keyword, limit)
        );

        tracing::debug!(
            keyword,
            web = web_results.len(),
            video = video_results.len(),
            "assembled keyword bundle"
        );

        let bundle = KeywordBundle {
            keyword: keyword.to_string(),
            web_results,
            video_results,
        };
        self.summarizer
            .summarize(&bundle, &self.context.brand_name)
            .await
    }

    /// Synthesize the final report over `summaries`, or report no data.
    pub async fn report(&self, summaries: Vec<KeywordSummary>) -> PipelineOutcome {
        if summaries.is_empty() {
            tracing::warn!("no keywords were analyzed, skipping final report");
            return PipelineOutcome::NoData;
        }

        let failed = summaries.iter().filter(|s| s.is_error()).count();
        if failed > 0 {
            tracing::warn!(
                failed,
                total = summaries.len(),
                "some keywords could not be analyzed"
            );
        }

        let report = self
            .synthesizer
            .synthesize(&summaries, &self.context.brand_name)
            .await;
        PipelineOutcome::Completed { summaries, report }
    }
}
