//! Search-provider fetchers for the share-of-voice pipeline.
//!
//! Wraps SerpApi's Google and `YouTube` engines behind [`SourceFetcher`], mapping
//! each provider schema onto the normalized records in `sovlens-core`. Fetchers
//! never fail: transport and parse errors are logged and become an empty list.

pub mod client;
pub mod error;
pub mod fetcher;
pub mod types;
pub mod video;
pub mod web;

pub use client::SerpApiClient;
pub use error::SourceError;
pub use fetcher::SourceFetcher;
pub use video::VideoResultFetcher;
pub use web::WebResultFetcher;
