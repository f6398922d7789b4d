//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

/// WanderWise - conversational trip planner
#[derive(Parser)]
#[command(name = "ww", version, about = "Plan trips by chatting; suggestions become illustrated cards")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute (defaults to chat)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start an interactive trip-planning chat
    Chat {
        /// First message to send before prompting
        message: Option<String>,
    },

    /// Extract recommendations from a saved assistant reply (no network)
    Extract {
        /// File containing the reply; reads stdin when omitted
        file: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Number of card columns (defaults to layout.columns from config)
        #[arg(long)]
        columns: Option<usize>,
    },
}

/// Log file location
pub fn get_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wanderwise")
        .join("logs")
        .join("wanderwise.log")
}

/// Output format for the extract command
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        debug!(%s, "OutputFormat::from_str: called");
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => {
                debug!(%s, "OutputFormat::from_str: unknown format");
                Err(format!("Unknown format: {}. Use: text or json", s))
            }
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_command() {
        let cli = Cli::parse_from(["ww"]);
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_parse_chat_with_message() {
        let cli = Cli::parse_from(["ww", "chat", "I want to see glaciers"]);
        match cli.command {
            Some(Command::Chat { message }) => assert_eq!(message.as_deref(), Some("I want to see glaciers")),
            other => panic!("Expected Chat, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_extract() {
        let cli = Cli::parse_from(["ww", "extract", "reply.txt", "--format", "json", "--columns", "2"]);
        match cli.command {
            Some(Command::Extract { file, format, columns }) => {
                assert_eq!(file, Some(PathBuf::from("reply.txt")));
                assert_eq!(format, OutputFormat::Json);
                assert_eq!(columns, Some(2));
            }
            other => panic!("Expected Extract, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::parse_from(["ww", "extract", "--log-level", "debug", "-c", "custom.yml"]);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.config, Some(PathBuf::from("custom.yml")));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("table".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_log_path_file_name() {
        assert!(get_log_path().ends_with("wanderwise/logs/wanderwise.log"));
    }
}
