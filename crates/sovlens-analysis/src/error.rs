use thiserror::Error;

/// Errors returned by a reasoning call or by parsing its reply.
#[derive(Debug, Error)]
pub enum ReasoningError {
    /// No `OPENAI_API_KEY` was configured.
    #[error("reasoning API key is not configured")]
    MissingApiKey,

    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("reasoning API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The completion carried no message content.
    #[error("reasoning API returned no content")]
    EmptyCompletion,

    /// The reply did not have the expected structured shape.
    #[error("malformed reasoning output for {context}: {reason}")]
    Malformed { context: String, reason: String },
}

impl ReasoningError {
    pub(crate) fn malformed(context: &str, reason: impl std::fmt::Display) -> Self {
        Self::Malformed {
            context: context.to_string(),
            reason: reason.to_string(),
        }
    }
}
