//! `YouTube` video results via SerpApi.

use async_trait::async_trait;
use serde_json::Value;
use sovlens_core::{parse_view_value, VideoResult};

use crate::client::SerpApiClient;
use crate::error::SourceError;
use crate::fetcher::{records_or_empty, SourceFetcher};
use crate::types::{YoutubeSearchResponse, YoutubeVideoResult};

const ENGINE: &str = "youtube";
const SOURCE: &str = "video";

/// Fetches video search results for a keyword, parsing view counts.
#[derive(Clone)]
pub struct VideoResultFetcher {
    client: SerpApiClient,
}

impl VideoResultFetcher {
    #[must_use]
    pub fn new(client: SerpApiClient) -> Self {
        Self { client }
    }

    /// Fetch and normalize results, surfacing failures.
    ///
    /// The `YouTube` engine has no result-count parameter, so `limit` is
    /// applied after the response arrives.
    ///
    /// # Errors
    ///
    /// Returns any [`SourceError`] from the client or from decoding the body.
    pub async fn try_fetch(
        &self,
        keyword: &str,
        limit: usize,
    ) -> Result<Vec<VideoResult>, SourceError> {
        let body = self
            .client
            .search(ENGINE, &[("search_query", keyword)])
            .await?;

        let response: YoutubeSearchResponse =
            serde_json::from_value(body).map_err(|e| SourceError::Deserialize {
                context: format!("youtube(search_query={keyword})"),
                source: e,
            })?;

        Ok(response
            .video_results
            .into_iter()
            .take(limit)
            .map(normalize_video)
            .collect())
    }
}

fn normalize_video(result: YoutubeVideoResult) -> VideoResult {
    let views = result.view_count_text.as_ref().map_or(0, parse_view_value);
    let snippet = result
        .description
        .as_ref()
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    VideoResult {
        title: result.title.unwrap_or_default(),
        views,
        snippet,
    }
}

#[async_trait]
impl SourceFetcher for VideoResultFetcher {
    type Record = VideoResult;

    async fn fetch(&self, keyword: &str, limit: usize) -> Vec<VideoResult> {
        tracing::info!(keyword, source = SOURCE, "fetching video search results");
        records_or_empty(SOURCE, keyword, self.try_fetch(keyword, limit).await)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn view_text_is_parsed() {
        let video = normalize_video(YoutubeVideoResult {
            title: Some("Atomberg Renesa review".to_string()),
            view_count_text: Some(json!("1.2M views")),
            description: Some(json!("Full review")),
        });
        assert_eq!(video.views, 1_200_000);
        assert_eq!(video.snippet, "Full review");
    }

    #[test]
    fn missing_or_odd_fields_degrade() {
        let video = normalize_video(YoutubeVideoResult {
            title: None,
            view_count_text: Some(json!(4200)),
            description: Some(json!({"extensions": []})),
        });
        assert_eq!(video.title, "");
        assert_eq!(video.views, 0);
        assert_eq!(video.snippet, "");
    }
}
