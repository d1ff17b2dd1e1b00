//! CLI entry point for the Survey Rater tool.
//!
//! Provides subcommands for scoring a single course-feedback export and for
//! scoring every export in a directory, appending flattened results to a
//! run-log CSV.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use survey_rater::analyzers::analyzer::analyze;
use survey_rater::analyzers::types::SummaryRow;
use survey_rater::config::SurveyConfig;
use survey_rater::fetch::{BasicClient, fetch_export};
use survey_rater::output::{append_record, print_json, write_json};
use survey_rater::parser::parse_table;
use survey_rater::summary::{BedrockSummarizer, Summarizer};
use tracing::{error, info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "survey_rater")]
#[command(about = "A tool to score course-feedback survey exports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a survey export from a file or URL
    Analyze {
        /// Path to a CSV export, or a URL to fetch one from
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// Expected number of learners, for the response-rate metric
        #[arg(short = 'e', long, default_value_t = 0)]
        expected_learners: u32,

        /// Request an AI synthesis of the free-text feedback
        #[arg(long, default_value_t = false)]
        ai_summary: bool,

        /// Optional: write the full result as a JSON report to this path
        #[arg(short, long)]
        output: Option<String>,

        /// CSV run log to append a summary row to
        #[arg(short, long, default_value = "runs.csv")]
        log: String,

        /// Optional: JSON file overriding the Qualtrics question-ID layout
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Score every CSV export in a directory
    Batch {
        /// Directory containing CSV exports
        #[arg(short, long, default_value = "exports")]
        input_dir: String,

        /// CSV run log to append one summary row per export to
        #[arg(short, long, default_value = "runs.csv")]
        log: String,

        /// Optional: JSON file overriding the Qualtrics question-ID layout
        #[arg(short, long)]
        config: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/survey_rater.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("survey_rater.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            source,
            expected_learners,
            ai_summary,
            output,
            log,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let bytes = fetcher(&source).await?;
            let table = parse_table(&bytes)?;

            let bedrock;
            let summarizer: Option<&dyn Summarizer> = if ai_summary {
                bedrock = BedrockSummarizer::new().await;
                Some(&bedrock)
            } else {
                None
            };

            let result = analyze(&table, &config, expected_learners, summarizer).await?;

            print_json(&result)?;
            if let Some(path) = output {
                write_json(&path, &result)?;
            }
            append_record(&log, &SummaryRow::from_result(&result).with_source(&source))?;
        }
        Commands::Batch {
            input_dir,
            log,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            batch(&input_dir, &log, &config).await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&str>) -> Result<SurveyConfig> {
    match path {
        Some(path) => SurveyConfig::load(path),
        None => Ok(SurveyConfig::default()),
    }
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}

/// Loads export data from a local file path or fetches it over HTTP.
///
/// Local sources must carry a `.csv` extension; URLs are taken as-is.
#[tracing::instrument(fields(source = %source))]
async fn fetcher(source: &String) -> Result<Vec<u8>> {
    let bytes = if source.starts_with("http") {
        let client = BasicClient::new();
        fetch_export(&client, source).await?
    } else {
        if !is_csv(Path::new(source)) {
            anyhow::bail!("'{source}' is not a CSV file");
        }
        std::fs::read(source)?
    };
    Ok(bytes)
}

/// Scores every CSV export in a directory, appending one summary row per
/// file and recording per-file failures without aborting the run.
#[tracing::instrument(skip(config), fields(input_dir, log))]
async fn batch(input_dir: &str, log: &str, config: &SurveyConfig) -> Result<()> {
    let mut processed = 0;
    let mut failed = 0;

    for entry in std::fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || !is_csv(&path) {
            continue;
        }

        let source = path.display().to_string();

        let row = match score_file(&path, config).await {
            Ok(row) => {
                processed += 1;
                row
            }
            Err(e) => {
                failed += 1;
                error!(source = %source, error = %e, "Export analysis failed");
                SummaryRow::from_error("analysis_error", &e.to_string())
            }
        };

        if let Err(e) = append_record(log, &row.with_source(&source)) {
            error!(source = %source, error = %e, "Failed to append run-log row");
        }
    }

    if processed == 0 && failed == 0 {
        warn!(input_dir, "No CSV exports found");
    }
    info!(processed, failed, "Batch scoring complete");
    Ok(())
}

async fn score_file(path: &Path, config: &SurveyConfig) -> Result<SummaryRow> {
    let bytes = std::fs::read(path)?;
    let table = parse_table(&bytes)?;
    let result = analyze(&table, config, 0, None).await?;
    Ok(SummaryRow::from_result(&result))
}
