mod run;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "stayrank")]
#[command(about = "Search rental listings and rank them against your trip preferences")]
struct Cli {
    /// Trip preferences JSON file (overrides STAYRANK_PREFERENCES_PATH)
    #[arg(long)]
    preferences: Option<PathBuf>,

    /// Where to write the ranked results (overrides STAYRANK_RESULTS_PATH)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Print the search criteria without contacting the search provider
    #[arg(long)]
    dry_run: bool,

    /// Number of best listings to print once results are saved
    #[arg(long, default_value_t = 5)]
    top: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = stayrank_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    let options = run::RunOptions {
        preferences_path: cli
            .preferences
            .unwrap_or_else(|| config.preferences_path.clone()),
        output_path: cli.output.unwrap_or_else(|| config.results_path.clone()),
        dry_run: cli.dry_run,
        top: cli.top,
    };

    run::run(&config, &options).await
}
