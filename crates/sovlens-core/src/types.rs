use serde::{Deserialize, Serialize};

/// One organic web search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub link: String,
    pub snippet: String,
}

/// One video search hit with its engagement count already normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoResult {
    pub title: String,
    /// Parsed view count. `0` when the provider text was unparseable.
    pub views: u64,
    pub snippet: String,
}

/// Raw records fetched for one keyword from both sources.
#[derive(Debug, Clone, Serialize)]
pub struct KeywordBundle {
    pub keyword: String,
    pub web_results: Vec<SearchResult>,
    pub video_results: Vec<VideoResult>,
}

impl KeywordBundle {
    /// `true` when neither source returned a record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.web_results.is_empty() && self.video_results.is_empty()
    }
}

/// Web search metrics, both percentages in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WebAnalysis {
    /// Share of voice: brand-mentioning results over all results.
    pub sov: f64,
    /// Share of positive voice among brand-mentioning results.
    pub sopv: f64,
}

/// Video search metrics, both percentages in `[0, 100]`, weighted by views.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VideoAnalysis {
    /// View-weighted share of voice.
    pub wsov: f64,
    /// View-weighted share of positive voice among brand-mentioning videos.
    pub sopv: f64,
}

/// Outcome of summarizing one keyword.
///
/// Serializes untagged so the report prompt sees either the metric object or
/// `{"keyword": .., "error": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeywordSummary {
    Analyzed {
        keyword: String,
        web_analysis: WebAnalysis,
        video_analysis: VideoAnalysis,
        combined_insight: String,
    },
    Failed {
        keyword: String,
        error: String,
    },
}

impl KeywordSummary {
    pub fn failed(keyword: impl Into<String>, error: impl Into<String>) -> Self {
        Self::Failed {
            keyword: keyword.into(),
            error: error.into(),
        }
    }

    #[must_use]
    pub fn keyword(&self) -> &str {
        match self {
            Self::Analyzed { keyword, .. } | Self::Failed { keyword, .. } => keyword,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Read-only run context shared by every keyword unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandContext {
    pub brand_name: String,
    /// Competitor names. Carried for competitor deltas; the current metric
    /// formulas only look at `brand_name`.
    pub competitors: Vec<String>,
}

impl BrandContext {
    pub fn new(brand_name: impl Into<String>, competitors: Vec<String>) -> Self {
        Self {
            brand_name: brand_name.into(),
            competitors,
        }
    }
}
