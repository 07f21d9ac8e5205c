//! Strip command implementation

use anyhow::Result;
use clap::Args;
use unitext_core::{remove_punctuations, PunctuationMode};

use super::{parse_config_value, CommonArgs};
use crate::input::InputArgs;
use crate::output::Record;

/// Arguments for the strip command
#[derive(Debug, Args)]
pub struct StripArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Filter mode (default: from config, else advanced)
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Filter modes accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Contractions, percent signs and hyphens
    General,
    /// General plus every period
    #[value(alias = "chinese-context")]
    Chinese,
    /// Contractions, possessives, decimals, dates, units, percent signs and hyphens
    Advanced,
}

impl From<Mode> for PunctuationMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::General => PunctuationMode::General,
            Mode::Chinese => PunctuationMode::ChineseContext,
            Mode::Advanced => PunctuationMode::Advanced,
        }
    }
}

impl StripArgs {
    /// Execute the strip command
    pub fn execute(&self) -> Result<()> {
        let config = self.common.prepare()?;
        let mode: PunctuationMode = match self.mode {
            Some(mode) => mode.into(),
            None => parse_config_value(&config.processing.default_mode)?,
        };
        log::info!("Removing punctuation in {mode} mode");

        let inputs = self.input.load(self.common.quiet)?;
        let mut formatter = self.common.formatter(&config)?;
        for input in inputs {
            formatter.write_record(&Record::Transformed {
                text: remove_punctuations(&input.content, mode),
                source: input.source,
            })?;
        }
        formatter.finish()
    }
}
