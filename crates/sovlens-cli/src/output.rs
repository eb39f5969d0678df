//! Console rendering of a finished run.

use chrono::{DateTime, Utc};
use sovlens_analysis::PipelineOutcome;
use sovlens_core::KeywordSummary;

const NO_DATA_NOTICE: &str = "No data was analyzed. Final report could not be generated.";

pub(crate) fn render_outcome(
    outcome: &PipelineOutcome,
    brand_name: &str,
    generated_at: DateTime<Utc>,
) -> String {
    match outcome {
        PipelineOutcome::NoData => NO_DATA_NOTICE.to_string(),
        PipelineOutcome::Completed { summaries, report } => {
            let rule = "=".repeat(50);
            let mut out = String::new();
            out.push_str(&format!("\n{rule}\n    Keyword Metrics\n{rule}\n"));
            for summary in summaries {
                out.push_str(&summary_line(summary));
                out.push('\n');
            }
            out.push_str(&format!(
                "\n{rule}\n    Final Multi-Keyword Strategic Report\n    {brand_name} | {}\n{rule}\n\n",
                generated_at.format("%Y-%m-%d %H:%M UTC")
            ));
            out.push_str(report);
            out
        }
    }
}

fn summary_line(summary: &KeywordSummary) -> String {
    match summary {
        KeywordSummary::Analyzed {
            keyword,
            web_analysis,
            video_analysis,
            ..
        } => format!(
            "- {keyword}: web SoV {:.1}% / SoPV {:.1}% | video wSoV {:.1}% / SoPV {:.1}%",
            web_analysis.sov, web_analysis.sopv, video_analysis.wsov, video_analysis.sopv
        ),
        KeywordSummary::Failed { keyword, error } => format!("- {keyword}: error: {error}"),
    }
}
