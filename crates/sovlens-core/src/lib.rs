//! Shared types and configuration for the `sovlens` share-of-voice pipeline.

mod app_config;
mod config;
mod types;
mod views;

pub use app_config::AppConfig;
pub use config::load_app_config_from_env;
pub use types::{
    BrandContext, KeywordBundle, KeywordSummary, SearchResult, VideoAnalysis, VideoResult,
    WebAnalysis,
};
pub use views::{parse_view_value, parse_views};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
