mod fetch;
mod pdf;
mod schedule;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use pdf::{PlainTextExtractor, TextExtractor};
use schedule::{RecoveryPolicy, ScheduleConfig};

#[derive(Parser)]
#[command(
    name = "schedule_scraper",
    about = "Meeting-occurrence extractor for published PDF schedules"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download a schedule PDF and print its meeting occurrences as JSON
    Scrape {
        /// URL of the published PDF
        url: String,
        /// Line-merge tolerance for text extraction
        #[arg(long, default_value_t = pdf::DEFAULT_LINE_MARGIN)]
        line_margin: f32,
        /// Abort on malformed date/time tokens instead of skipping them
        #[arg(long)]
        strict: bool,
    },
    /// Parse an already-downloaded PDF file
    Parse {
        /// Path to the PDF file
        file: PathBuf,
        /// URL the document was originally fetched from
        #[arg(long)]
        source_url: String,
        /// Line-merge tolerance for text extraction
        #[arg(long, default_value_t = pdf::DEFAULT_LINE_MARGIN)]
        line_margin: f32,
        /// Abort on malformed date/time tokens instead of skipping them
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scrape {
            url,
            line_margin,
            strict,
        } => {
            let bytes = fetch::fetch_pdf(&url).await?;
            run_pipeline(&bytes, &url, line_margin, strict)
        }
        Commands::Parse {
            file,
            source_url,
            line_margin,
            strict,
        } => {
            let bytes = std::fs::read(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            run_pipeline(&bytes, &source_url, line_margin, strict)
        }
    }
}

fn run_pipeline(
    bytes: &[u8],
    source_url: &str,
    line_margin: f32,
    strict: bool,
) -> anyhow::Result<()> {
    let extractor = PlainTextExtractor { line_margin };
    let text = extractor.extract(bytes)?;

    let mut config = ScheduleConfig::default();
    if strict {
        config.recovery = RecoveryPolicy::Abort;
    }

    let today = chrono::Local::now().date_naive();
    let occurrences = schedule::extract_schedule(&text, source_url, &config, today)?;

    println!("{}", serde_json::to_string_pretty(&occurrences)?);
    Ok(())
}
