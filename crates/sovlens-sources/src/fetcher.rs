use async_trait::async_trait;

use crate::error::SourceError;

/// A single-source keyword search returning normalized records.
///
/// Implementations never fail: any transport or parse problem is logged and
/// reported as an empty list, so callers only ever see data or nothing.
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    type Record: Send;

    /// Fetch at most `limit` records for `keyword`.
    async fn fetch(&self, keyword: &str, limit: usize) -> Vec<Self::Record>;
}

/// Collapse a fetch result into records, logging the outcome under `source`.
pub(crate) fn records_or_empty<R>(
    source: &'static str,
    keyword: &str,
    result: Result<Vec<R>, SourceError>,
) -> Vec<R> {
    match result {
        Ok(records) => {
            if records.is_empty() {
                tracing::info!(keyword, source, "provider returned no results");
            } else {
                tracing::debug!(keyword, source, count = records.len(), "collected results");
            }
            records
        }
        Err(e) => {
            tracing::warn!(keyword, source, error = %e, "search fetch failed");
            Vec::new()
        }
    }
}
