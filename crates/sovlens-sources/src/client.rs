//! HTTP client for the SerpApi `/search` endpoint.
//!
//! One client serves every engine. Each call is a single GET with no retry;
//! the configured timeout bounds it.

use std::time::Duration;

use reqwest::{Client, Url};
use sovlens_core::AppConfig;

use crate::error::SourceError;

const DEFAULT_BASE_URL: &str = "https://serpapi.com";

/// Client for the SerpApi search endpoint.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct SerpApiClient {
    client: Client,
    api_key: Option<String>,
    search_url: Url,
}

impl SerpApiClient {
    /// Creates a client pointed at the production SerpApi host.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: Option<&str>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, SourceError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SourceError::Api`] if `base_url` is not a
    /// valid URL.
    pub fn with_base_url(
        api_key: Option<&str>,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let search_url = Url::parse(&format!("{}/search", base_url.trim_end_matches('/')))
            .map_err(|e| SourceError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.map(str::to_owned),
            search_url,
        })
    }

    /// Builds a client from the application config.
    ///
    /// # Errors
    ///
    /// See [`SerpApiClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, SourceError> {
        Self::with_base_url(
            config.serpapi_api_key.as_deref(),
            config.request_timeout_secs,
            &config.user_agent,
            &config.serpapi_base_url,
        )
    }

    /// Runs one search against `engine` and returns the raw JSON body.
    ///
    /// # Errors
    ///
    /// - [`SourceError::MissingApiKey`] if no key is configured; no request is sent.
    /// - [`SourceError::Http`] on network failure, timeout, or non-2xx status.
    /// - [`SourceError::Deserialize`] if the body is not JSON.
    /// - [`SourceError::Api`] if the body carries an `"error"` message.
    pub async fn search(
        &self,
        engine: &str,
        params: &[(&str, &str)],
    ) -> Result<serde_json::Value, SourceError> {
        let api_key = self.api_key.as_deref().ok_or(SourceError::MissingApiKey)?;
        let url = self.build_url(engine, params, api_key);

        tracing::debug!(engine, "SerpApi search request");

        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        let json: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| SourceError::Deserialize {
                context: format!("search(engine={engine})"),
                source: e,
            })?;

        Self::check_api_error(&json)?;
        Ok(json)
    }

    /// Builds the request URL with percent-encoded query parameters.
    fn build_url(&self, engine: &str, extra: &[(&str, &str)], api_key: &str) -> Url {
        let mut url = self.search_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("engine", engine);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("api_key", api_key);
        }
        url
    }

    fn check_api_error(body: &serde_json::Value) -> Result<(), SourceError> {
        match body.get("error").and_then(serde_json::Value::as_str) {
            Some(msg) => Err(SourceError::Api(msg.to_string())),
            None => Ok(()),
        }
    }
}
