//! lynch-screen: score companies from the command line.
//!
//! Usage:
//!   lynch-screen screen AAPL MSFT --risk conservative
//!   lynch-screen screen --json --data fixtures.json
//!   lynch-screen universe
//!   lynch-screen profiles

mod report;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use fundamentals_provider::{load_fundamentals, StubProvider};
use lynch_scoring::{RiskProfile, Screener, ScoringConfig};
use screener_core::FundamentalsProvider;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "lynch-screen",
    about = "Peter Lynch-inspired fundamentals screen",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score tickers (the whole universe when none are given)
    Screen(ScreenArgs),
    /// List the tickers the data source can serve
    Universe(DataArgs),
    /// Show the risk profile thresholds
    Profiles,
}

#[derive(Args, Debug)]
struct DataArgs {
    /// JSON fixture to read instead of the bundled one
    #[arg(long, env = "STUB_DATA_PATH")]
    data: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ScreenArgs {
    /// Ticker symbols, e.g. AAPL MSFT
    tickers: Vec<String>,
    /// Risk tolerance profile
    #[arg(long, default_value = "balanced", value_parser = ["conservative", "balanced", "aggressive"])]
    risk: String,
    /// Print the full results as JSON
    #[arg(long)]
    json: bool,
    /// Scoring rubric overrides (JSON)
    #[arg(long, env = "SCORING_CONFIG_PATH")]
    config: Option<PathBuf>,
    #[command(flatten)]
    data: DataArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lynch_screen=info,lynch_scoring=warn,fundamentals_provider=warn".into()),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Screen(args) => run_screen(args).await,
        Command::Universe(args) => {
            let provider = open_provider(&args)?;
            for ticker in provider.list_universe().await? {
                println!("{}", ticker);
            }
            Ok(())
        }
        Command::Profiles => {
            println!("{}", report::format_profiles(RiskProfile::all()));
            Ok(())
        }
    }
}

fn open_provider(args: &DataArgs) -> anyhow::Result<StubProvider> {
    StubProvider::open(args.data.as_deref()).context("Failed to load fundamentals data")
}

async fn run_screen(args: ScreenArgs) -> anyhow::Result<()> {
    let provider = open_provider(&args.data)?;
    let config = match &args.config {
        Some(path) => ScoringConfig::from_path(path)?,
        None => ScoringConfig::default(),
    };

    let batch = load_fundamentals(&provider, &args.tickers).await?;

    let screener = Screener::new(RiskProfile::resolve(&args.risk), config)?;
    let results = screener.screen(&batch);
    tracing::info!("Screened {} companies", results.len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else if !results.is_empty() {
        println!("{}", report::format_results(&results));
    }
    Ok(())
}
