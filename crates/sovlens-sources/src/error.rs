use thiserror::Error;

/// Errors returned by the SerpApi client.
#[derive(Debug, Error)]
pub enum SourceError {
    /// No `SERPAPI_API_KEY` was configured.
    #[error("search API key is not configured")]
    MissingApiKey,

    /// Network, TLS, timeout, or non-2xx failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// SerpApi answered with a top-level `"error"` message.
    #[error("SerpApi error: {0}")]
    Api(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
