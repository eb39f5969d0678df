//! The reasoning seam: one prompt in, one reply out.
//!
//! [`OpenAiReasoner`] talks to an OpenAI-compatible `/chat/completions`
//! endpoint. Each call is a single user message with no conversation state.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use sovlens_core::AppConfig;

use crate::error::ReasoningError;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Which pipeline stage issued a reasoning call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReasoningTask {
    KeywordExpansion,
    MetricSummary,
    StrategicReport,
}

impl ReasoningTask {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::KeywordExpansion => "keyword_expansion",
            Self::MetricSummary => "metric_summary",
            Self::StrategicReport => "strategic_report",
        }
    }
}

/// A single reasoning call.
#[derive(Debug, Clone)]
pub struct ReasoningRequest {
    pub task: ReasoningTask,
    pub prompt: String,
    pub temperature: f32,
    /// Ask the provider for a JSON object reply.
    pub structured: bool,
}

impl ReasoningRequest {
    pub fn structured(task: ReasoningTask, prompt: impl Into<String>, temperature: f32) -> Self {
        Self {
            task,
            prompt: prompt.into(),
            temperature,
            structured: true,
        }
    }

    pub fn text(task: ReasoningTask, prompt: impl Into<String>, temperature: f32) -> Self {
        Self {
            task,
            prompt: prompt.into(),
            temperature,
            structured: false,
        }
    }
}

/// An external text-generation capability.
#[async_trait]
pub trait Reasoner: Send + Sync {
    /// Run one prompt and return the raw reply text.
    async fn complete(&self, request: ReasoningRequest) -> Result<String, ReasoningError>;
}

/// Parse a structured reply into JSON, tolerating markdown code fences.
///
/// # Errors
///
/// Returns [`ReasoningError::Malformed`] if the text is not valid JSON.
pub fn parse_structured(text: &str, context: &str) -> Result<serde_json::Value, ReasoningError> {
    serde_json::from_str(strip_code_blocks(text)).map_err(|e| ReasoningError::malformed(context, e))
}

fn strip_code_blocks(response: &str) -> &str {
    response
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// [`Reasoner`] backed by an OpenAI-compatible chat completions API.
pub struct OpenAiReasoner {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl OpenAiReasoner {
    /// Creates a reasoner pointed at the production OpenAI API.
    ///
    /// # Errors
    ///
    /// Returns [`ReasoningError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(
        api_key: Option<&str>,
        model: &str,
        timeout_secs: u64,
    ) -> Result<Self, ReasoningError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a reasoner with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ReasoningError::Http`] if the `reqwest::Client` cannot be built.
    pub fn with_base_url(
        api_key: Option<&str>,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, ReasoningError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.map(str::to_owned),
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Builds a reasoner from the application config.
    ///
    /// # Errors
    ///
    /// Returns [`ReasoningError::Http`] if the `reqwest::Client` cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, ReasoningError> {
        Self::with_base_url(
            config.openai_api_key.as_deref(),
            &config.openai_model,
            config.request_timeout_secs,
            &config.openai_base_url,
        )
    }
}

#[async_trait]
impl Reasoner for OpenAiReasoner {
    async fn complete(&self, request: ReasoningRequest) -> Result<String, ReasoningError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ReasoningError::MissingApiKey)?;
        let url = format!("{}/chat/completions", self.base_url);

        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
            temperature: request.temperature,
            response_format: request.structured.then_some(ResponseFormat {
                kind: "json_object",
            }),
        };

        tracing::debug!(
            model = %self.model,
            task = request.task.as_str(),
            structured = request.structured,
            "chat completion request"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ReasoningError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let chat: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| ReasoningError::malformed("chat completion response", e))?;

        chat.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(ReasoningError::EmptyCompletion)
    }
}
