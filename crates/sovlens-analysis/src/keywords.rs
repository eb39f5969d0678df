//! Seed keyword expansion.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ReasoningError;
use crate::reasoner::{parse_structured, Reasoner, ReasoningRequest, ReasoningTask};

const TEMPERATURE: f32 = 0.4;
const LIST_KEY: &str = "keywords";

/// The two reply shapes accepted for a keyword list: a bare JSON array, or
/// an object wrapping one (`{"keywords": [...]}`). JSON mode forces the
/// latter on most models.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum KeywordListResponse {
    Bare(Vec<Value>),
    Wrapped(Map<String, Value>),
}

impl KeywordListResponse {
    /// The list itself, or from a wrapping object the `"keywords"` array,
    /// else its first array value in reply order.
    fn into_items(self) -> Option<Vec<Value>> {
        match self {
            Self::Bare(items) => Some(items),
            Self::Wrapped(map) => {
                let mut first = None;
                for (key, value) in map {
                    if let Value::Array(items) = value {
                        if key == LIST_KEY {
                            return Some(items);
                        }
                        first.get_or_insert(items);
                    }
                }
                first
            }
        }
    }
}

/// Brainstorms related keywords for a seed keyword.
pub struct KeywordExpander {
    reasoner: Arc<dyn Reasoner>,
}

impl KeywordExpander {
    pub fn new(reasoner: Arc<dyn Reasoner>) -> Self {
        Self { reasoner }
    }

    /// Expand `seed` into at most `count` keywords.
    ///
    /// Always returns at least one keyword: on any failure, or an empty
    /// list, the result is exactly `[seed]`.
    pub async fn expand(&self, seed: &str, brand_name: &str, count: usize) -> Vec<String> {
        tracing::info!(seed, "brainstorming related keywords");

        match self.try_expand(seed, brand_name, count).await {
            Ok(keywords) if !keywords.is_empty() => {
                tracing::info!(seed, keywords = ?keywords, "brainstormed keywords");
                keywords
            }
            Ok(_) => {
                tracing::warn!(seed, "keyword list was empty, falling back to seed keyword");
                vec![seed.to_string()]
            }
            Err(e) => {
                tracing::warn!(
                    seed,
                    error = %e,
                    "keyword expansion failed, falling back to seed keyword"
                );
                vec![seed.to_string()]
            }
        }
    }

    /// Expand without the seed fallback.
    ///
    /// # Errors
    ///
    /// Returns the reasoning call's error, or [`ReasoningError::Malformed`]
    /// if the reply is neither a list nor an object wrapping one.
    pub async fn try_expand(
        &self,
        seed: &str,
        brand_name: &str,
        count: usize,
    ) -> Result<Vec<String>, ReasoningError> {
        let prompt = expansion_prompt(seed, brand_name, count);
        let reply = self
            .reasoner
            .complete(ReasoningRequest::structured(
                ReasoningTask::KeywordExpansion,
                prompt,
                TEMPERATURE,
            ))
            .await?;

        let items = parse_keyword_list(&reply)?;
        Ok(normalize_keywords(items, count))
    }
}

fn parse_keyword_list(reply: &str) -> Result<Vec<Value>, ReasoningError> {
    const CONTEXT: &str = "keyword list";

    let value = parse_structured(reply, CONTEXT)?;
    let response: KeywordListResponse =
        serde_json::from_value(value).map_err(|e| ReasoningError::malformed(CONTEXT, e))?;
    response
        .into_items()
        .ok_or_else(|| ReasoningError::malformed(CONTEXT, "reply does not contain a list"))
}

/// Keep trimmed, non-empty, first-seen string items, up to `count`.
fn normalize_keywords(items: Vec<Value>, count: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s.trim().to_string()),
            _ => None,
        })
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.to_lowercase()))
        .take(count)
        .collect()
}

fn expansion_prompt(seed: &str, brand_name: &str, count: usize) -> String {
    format!(
        r#"You are an expert SEO and marketing strategist for the brand "{brand_name}".
Brainstorm related search keywords for the seed keyword "{seed}".

Cover different user intents:
- Informational: e.g. "how do smart fans work"
- Commercial investigation: e.g. "best {seed}", "{brand_name} vs competitor"
- Long-tail: e.g. "energy efficient {seed} with light and remote"

Generate exactly {count} unique, high-value keywords.
Return a JSON object with a single key "{LIST_KEY}" holding an array of strings.
Example: {{"{LIST_KEY}": ["keyword 1", "keyword 2", "keyword 3"]}}"#
    )
}
