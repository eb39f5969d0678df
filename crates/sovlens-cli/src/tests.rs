use chrono::{TimeZone, Utc};
use sovlens_analysis::PipelineOutcome;
use sovlens_core::{KeywordSummary, VideoAnalysis, WebAnalysis};

use super::*;

#[test]
fn defaults_describe_the_reference_run() {
    let cli = Cli::try_parse_from(["sovlens"]).expect("expected valid cli args");
    assert_eq!(cli.brand, "Atomberg");
    assert_eq!(cli.seed, "smart fan");
    assert_eq!(
        cli.competitors,
        vec!["Usha", "Havells", "Bajaj", "Orient", "Crompton"]
    );
    assert!(cli.keywords.is_none());
    assert!(cli.concurrency.is_none());
}

#[test]
fn parses_brand_seed_and_competitors() {
    let cli = Cli::try_parse_from([
        "sovlens",
        "--brand",
        "Havells",
        "--seed",
        "bldc fan",
        "--competitors",
        "Atomberg, Usha,,",
    ])
    .expect("expected valid cli args");

    let context = cli.brand_context();
    assert_eq!(context.brand_name, "Havells");
    assert_eq!(context.competitors, vec!["Atomberg", "Usha"]);
    assert_eq!(cli.seed, "bldc fan");
}

#[test]
fn zero_keywords_is_rejected() {
    assert!(Cli::try_parse_from(["sovlens", "--keywords", "0"]).is_err());
}

#[test]
fn overrides_replace_config_settings() {
    let cli = Cli::try_parse_from(["sovlens", "--keywords", "3", "--concurrency", "2"])
        .expect("expected valid cli args");
    let config = AppConfig {
        serpapi_api_key: None,
        openai_api_key: None,
        openai_model: "gpt-4o".to_string(),
        serpapi_base_url: "https://serpapi.com".to_string(),
        openai_base_url: "https://api.openai.com/v1".to_string(),
        request_timeout_secs: 60,
        result_limit: 7,
        keyword_count: 5,
        max_concurrent_keywords: 1,
        user_agent: "ua".to_string(),
        log_level: "info".to_string(),
    };

    let settings = cli.settings(&config);
    assert_eq!(settings.keyword_count, 3);
    assert_eq!(settings.max_concurrent_keywords, 2);
    assert_eq!(settings.result_limit, 7);
}

#[test]
fn no_data_outcome_renders_notice() {
    let at = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();
    let rendered = output::render_outcome(&PipelineOutcome::NoData, "Atomberg", at);
    assert_eq!(
        rendered,
        "No data was analyzed. Final report could not be generated."
    );
}

#[test]
fn completed_outcome_renders_metrics_and_report() {
    let at = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();
    let outcome = PipelineOutcome::Completed {
        summaries: vec![
            KeywordSummary::Analyzed {
                keyword: "bldc fan".to_string(),
                web_analysis: WebAnalysis {
                    sov: 40.0,
                    sopv: 75.0,
                },
                video_analysis: VideoAnalysis {
                    wsov: 20.0,
                    sopv: 90.0,
                },
                combined_insight: String::new(),
            },
            KeywordSummary::failed("quiet fan", "No data found on any platform."),
        ],
        report: "# Executive Summary".to_string(),
    };

    let rendered = output::render_outcome(&outcome, "Atomberg", at);
    assert!(rendered.contains("- bldc fan: web SoV 40.0% / SoPV 75.0% | video wSoV 20.0% / SoPV 90.0%"));
    assert!(rendered.contains("- quiet fan: error: No data found on any platform."));
    assert!(rendered.contains("Final Multi-Keyword Strategic Report"));
    assert!(rendered.contains("Atomberg | 2026-10-16 09:30 UTC"));
    assert!(rendered.ends_with("# Executive Summary"));
}
