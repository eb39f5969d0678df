//! SerpApi response shapes. Only the fields the fetchers read are modelled.

use serde::Deserialize;
use serde_json::Value;

/// Body of `engine=google`.
#[derive(Debug, Deserialize)]
pub struct GoogleSearchResponse {
    #[serde(default)]
    pub organic_results: Vec<OrganicResult>,
}

#[derive(Debug, Deserialize)]
pub struct OrganicResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
}

/// Body of `engine=youtube`.
#[derive(Debug, Deserialize)]
pub struct YoutubeSearchResponse {
    #[serde(default)]
    pub video_results: Vec<YoutubeVideoResult>,
}

/// `view_count_text` and `description` vary in type across result kinds
/// (shorts, live streams), so they stay loosely typed.
#[derive(Debug, Deserialize)]
pub struct YoutubeVideoResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub view_count_text: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
}
