//! WanderWise - conversational trip planner
//!
//! CLI entry point for chatting and for offline reply extraction.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use eyre::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use wanderwise::cli::{Cli, Command, OutputFormat, get_log_path};
use wanderwise::config::Config;
use wanderwise::layout::column_for;
use wanderwise::recommend::{extract, looks_like_option_list, looks_like_preference_question};
use wanderwise::repl;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let log_path = get_log_path();
    if let Some(log_dir) = log_path.parent() {
        fs::create_dir_all(log_dir).context("Failed to create log directory")?;
    }

    // Priority: CLI --log-level > config file > default (INFO)
    let level = match cli_log_level.or(config_log_level).map(|s| s.to_uppercase()) {
        Some(s) => match s.as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(&log_path).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log level must be known before the full config load can log anything
    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        None => repl::run_interactive(&config, None).await,
        Some(Command::Chat { message }) => repl::run_interactive(&config, message).await,
        Some(Command::Extract { file, format, columns }) => {
            cmd_extract(file, &format, columns.unwrap_or(config.layout.columns))
        }
    }
}

#[derive(Debug, Serialize)]
struct ExtractReport {
    option_list: bool,
    preference_question: bool,
    records: Vec<ExtractedRecord>,
}

#[derive(Debug, Serialize)]
struct ExtractedRecord {
    heading: String,
    description: String,
    position: usize,
    column: usize,
}

fn cmd_extract(file: Option<PathBuf>, format: &OutputFormat, columns: usize) -> Result<()> {
    debug!(?file, %format, columns, "cmd_extract: called");
    let reply = match file {
        Some(path) => fs::read_to_string(&path).context(format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read reply from stdin")?;
            buf
        }
    };

    let option_list = looks_like_option_list(&reply);
    let records = if option_list { extract(&reply) } else { Vec::new() };

    let records = records
        .into_iter()
        .map(|r| -> Result<ExtractedRecord> {
            Ok(ExtractedRecord {
                column: column_for(r.position, columns)?,
                heading: r.heading,
                description: r.description,
                position: r.position,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let report = ExtractReport {
        option_list,
        preference_question: looks_like_preference_question(&reply),
        records,
    };
    info!(count = report.records.len(), "cmd_extract: extracted records");

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            println!("option list: {}", if report.option_list { "yes" } else { "no" });
            println!(
                "preference question: {}",
                if report.preference_question { "yes" } else { "no" }
            );
            for r in &report.records {
                println!("{}. [column {}] {}: {}", r.position + 1, r.column + 1, r.heading, r.description);
            }
        }
    }

    Ok(())
}
