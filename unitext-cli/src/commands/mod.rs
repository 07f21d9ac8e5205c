//! CLI command implementations

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::{create_formatter, OutputFormat, OutputFormatter};

pub mod check_end;
pub mod classify;
pub mod collapse;
pub mod list;
pub mod strip;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Remove punctuation, keeping contractions, decimals and other meaningful marks
    Strip(strip::StripArgs),

    /// Collapse runs of consecutive punctuation to their first mark
    Collapse(collapse::CollapseArgs),

    /// Check whether each line ends with sentence-end punctuation
    CheckEnd(check_end::CheckEndArgs),

    /// Report punctuation and CJK membership of each character
    Classify(classify::ClassifyArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List supported sentence-end languages
    Languages,

    /// List punctuation filter modes
    Modes,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Strip(args) => args.execute(),
            Commands::Collapse(args) => args.execute(),
            Commands::CheckEnd(args) => args.execute(),
            Commands::Classify(args) => args.execute(),
            Commands::List { subcommand } => list::execute(*subcommand),
        }
    }
}

/// Output and diagnostics flags shared by every processing command
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "UNITEXT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Initialize logging and load configuration
    pub fn prepare(&self) -> Result<CliConfig> {
        init_logging(self.verbose, self.quiet);
        CliConfig::load_or_default(self.config.as_deref())
    }

    /// Build the formatter, resolving the format against the configuration
    pub fn formatter(&self, config: &CliConfig) -> Result<Box<dyn OutputFormatter>> {
        let format = match self.format {
            Some(format) => format,
            None => parse_format(&config.output.default_format)?,
        };
        log::debug!("Output format: {format:?}");
        create_formatter(format, self.output.as_deref(), config.output.pretty_json)
    }
}

fn parse_format(name: &str) -> Result<OutputFormat> {
    <OutputFormat as clap::ValueEnum>::from_str(name, true)
        .map_err(|_| CliError::ConfigError(format!("Unknown output format: {name}")).into())
}

/// Parse a value that comes from the configuration file
pub(crate) fn parse_config_value<T>(value: &str) -> Result<T>
where
    T: FromStr<Err = unitext_core::Error>,
{
    value
        .parse()
        .map_err(|e: unitext_core::Error| CliError::ConfigError(e.to_string()).into())
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // Ignore repeated initialization (tests call commands more than once)
        let env = env_logger::Env::default().default_filter_or(log_level);
        let _ = env_logger::Builder::from_env(env).try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Languages,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Languages"));
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("json").unwrap(), OutputFormat::Json);
        assert_eq!(parse_format("TEXT").unwrap(), OutputFormat::Text);
        let err = parse_format("markdown").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_parse_config_value() {
        let mode: unitext_core::PunctuationMode = parse_config_value("general").unwrap();
        assert_eq!(mode, unitext_core::PunctuationMode::General);

        let err = parse_config_value::<unitext_core::Language>("fr").unwrap_err();
        assert!(err.to_string().contains("Unsupported language: fr"));
    }
}
