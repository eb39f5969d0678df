mod output;

use std::sync::Arc;

use clap::Parser;
use sovlens_analysis::{OpenAiReasoner, Orchestrator, PipelineSettings, Reasoner};
use sovlens_core::{AppConfig, BrandContext};
use sovlens_sources::{SerpApiClient, VideoResultFetcher, WebResultFetcher};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "sovlens")]
#[command(about = "Cross-platform share-of-voice report for a brand")]
struct Cli {
    /// Brand whose share of voice is measured
    #[arg(long, env = "SOVLENS_BRAND", default_value = "Atomberg")]
    brand: String,

    /// Competitor brands, comma separated
    #[arg(
        long,
        env = "SOVLENS_COMPETITORS",
        value_delimiter = ',',
        default_value = "Usha,Havells,Bajaj,Orient,Crompton"
    )]
    competitors: Vec<String>,

    /// Seed keyword to expand into related keywords
    #[arg(long, env = "SOVLENS_SEED_KEYWORD", default_value = "smart fan")]
    seed: String,

    /// Number of keywords to brainstorm (overrides `SOVLENS_KEYWORD_COUNT`)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    keywords: Option<u16>,

    /// Keywords analyzed at once (overrides `SOVLENS_MAX_CONCURRENT_KEYWORDS`)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    concurrency: Option<u16>,
}

impl Cli {
    fn brand_context(&self) -> BrandContext {
        let competitors = self
            .competitors
            .iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        BrandContext::new(self.brand.trim(), competitors)
    }

    fn settings(&self, config: &AppConfig) -> PipelineSettings {
        let mut settings = PipelineSettings::from_config(config);
        if let Some(n) = self.keywords {
            settings.keyword_count = usize::from(n);
        }
        if let Some(n) = self.concurrency {
            settings.max_concurrent_keywords = usize::from(n);
        }
        settings
    }
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = sovlens_core::load_app_config_from_env()?;
    init_tracing(&config.log_level);
    tracing::debug!(config = ?config, "loaded configuration");

    let reasoner: Arc<dyn Reasoner> = Arc::new(OpenAiReasoner::from_config(&config)?);
    let serpapi = SerpApiClient::from_config(&config)?;

    let orchestrator = Orchestrator::new(
        cli.brand_context(),
        cli.settings(&config),
        reasoner,
        WebResultFetcher::new(serpapi.clone()),
        VideoResultFetcher::new(serpapi),
    );

    let outcome = orchestrator.run(cli.seed.trim()).await;
    println!(
        "{}",
        output::render_outcome(
            &outcome,
            &orchestrator.context().brand_name,
            chrono::Utc::now()
        )
    );

    Ok(())
}

#[cfg(test)]
mod tests;
