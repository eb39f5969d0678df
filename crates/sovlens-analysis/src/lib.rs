//! Share-of-voice analysis pipeline.
//!
//! Expands a seed keyword, fetches web and video results per keyword, has a
//! reasoning model derive per-source share-of-voice metrics, and synthesizes a
//! cross-platform strategy report. Every stage degrades instead of failing:
//! a broken provider yields an error summary or a sentinel report, never a
//! crashed run.

pub mod error;
pub mod keywords;
pub mod pipeline;
pub mod reasoner;
pub mod report;
pub mod summarizer;

pub use error::ReasoningError;
pub use keywords::KeywordExpander;
pub use pipeline::{Orchestrator, PipelineOutcome, PipelineSettings};
pub use reasoner::{OpenAiReasoner, Reasoner, ReasoningRequest, ReasoningTask};
pub use report::{ReportSynthesizer, REPORT_FAILURE_SENTINEL};
pub use summarizer::{MetricSummarizer, NO_DATA_MESSAGE};
