//! Google organic results via SerpApi.

use async_trait::async_trait;
use sovlens_core::SearchResult;

use crate::client::SerpApiClient;
use crate::error::SourceError;
use crate::fetcher::{records_or_empty, SourceFetcher};
use crate::types::{GoogleSearchResponse, OrganicResult};

const ENGINE: &str = "google";
const SOURCE: &str = "web";

/// Fetches organic web search results for a keyword.
#[derive(Clone)]
pub struct WebResultFetcher {
    client: SerpApiClient,
}

impl WebResultFetcher {
    #[must_use]
    pub fn new(client: SerpApiClient) -> Self {
        Self { client }
    }

    /// Fetch and normalize results, surfacing failures.
    ///
    /// # Errors
    ///
    /// Returns any [`SourceError`] from the client or from decoding the body.
    pub async fn try_fetch(
        &self,
        keyword: &str,
        limit: usize,
    ) -> Result<Vec<SearchResult>, SourceError> {
        let num = limit.to_string();
        let body = self
            .client
            .search(ENGINE, &[("q", keyword), ("num", &num)])
            .await?;

        let response: GoogleSearchResponse =
            serde_json::from_value(body).map_err(|e| SourceError::Deserialize {
                context: format!("google(q={keyword})"),
                source: e,
            })?;

        Ok(response
            .organic_results
            .into_iter()
            .take(limit)
            .map(normalize_organic)
            .collect())
    }
}

fn normalize_organic(result: OrganicResult) -> SearchResult {
    SearchResult {
        title: result.title.unwrap_or_default(),
        link: result.link.unwrap_or_default(),
        snippet: result.snippet.unwrap_or_default(),
    }
}

#[async_trait]
impl SourceFetcher for WebResultFetcher {
    type Record = SearchResult;

    async fn fetch(&self, keyword: &str, limit: usize) -> Vec<SearchResult> {
        tracing::info!(keyword, source = SOURCE, "fetching web search results");
        records_or_empty(SOURCE, keyword, self.try_fetch(keyword, limit).await)
    }
}
