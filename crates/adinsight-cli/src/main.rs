use std::path::{Path, PathBuf};

use adinsight_core::AppConfig;
use adinsight_narrative::InsightOrchestrator;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod ingest;
mod report;

#[derive(Debug, Parser)]
#[command(name = "adinsight")]
#[command(about = "Advertising-performance insight reporting")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Aggregate a CSV of performance rows and produce insight bullets.
    Report {
        /// CSV file with columns date,impressions,clicks,spend,platform[,campaign_id].
        #[arg(long)]
        input: PathBuf,
        /// Optional free-text context file (e.g. client feedback).
        #[arg(long)]
        context: Option<PathBuf>,
        /// Chart artifact reference, passed through to document assembly untouched.
        #[arg(long)]
        chart: Option<PathBuf>,
        /// Write the JSON report bundle here instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = adinsight_core::load_app_config()?;
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Report {
            input,
            context,
            chart,
            output,
        } => run_report(&config, &input, context, chart, output).await,
    }
}

async fn run_report(
    config: &AppConfig,
    input: &Path,
    context: Option<PathBuf>,
    chart: Option<PathBuf>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let rows = ingest::load_rows(input)?;
    tracing::info!(rows = rows.len(), input = %input.display(), "loaded performance rows");

    let summary = adinsight_metrics::aggregate(&rows);
    let context_text = match context {
        Some(path) => Some(std::fs::read_to_string(path)?),
        None => None,
    };

    let orchestrator = InsightOrchestrator::from_config(config);
    let insights = orchestrator
        .produce_insights(&summary, context_text.as_deref())
        .await;

    let bundle = report::ReportBundle::new(summary, insights, chart);
    let json = serde_json::to_string_pretty(&bundle)?;
    match output {
        Some(path) => {
            std::fs::write(&path, json)?;
            tracing::info!(output = %path.display(), "report bundle written");
        }
        None => println!("{json}"),
    }

    Ok(())
}
