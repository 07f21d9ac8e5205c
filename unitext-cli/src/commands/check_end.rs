//! Check-end command implementation

use anyhow::Result;
use clap::Args;
use unitext_core::{is_sentence_end_with_punctuation, Language};

use super::CommonArgs;
use crate::error::CliError;
use crate::input::InputArgs;
use crate::output::Record;

/// Arguments for the check-end command
#[derive(Debug, Args)]
pub struct CheckEndArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Language tag: zh, en, ja or ko (default: from config, else en)
    #[arg(short, long, value_name = "TAG")]
    pub language: Option<String>,

    /// Skip blank (empty or whitespace-only) lines
    #[arg(long)]
    pub skip_blank: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl CheckEndArgs {
    /// Execute the check-end command
    pub fn execute(&self) -> Result<()> {
        let config = self.common.prepare()?;
        let tag = self
            .language
            .as_deref()
            .unwrap_or(config.processing.default_language.as_str());

        // Reject an unknown tag even when every line is blank
        let language = Language::from_code(tag).map_err(CliError::from)?;
        log::info!("Checking sentence ends for {language}");

        let inputs = self.input.load(self.common.quiet)?;
        let mut formatter = self.common.formatter(&config)?;
        for input in &inputs {
            // Lines are checked as-is: trailing whitespace means no punctuation at the end
            for (idx, line) in input.content.lines().enumerate() {
                if self.skip_blank && line.trim().is_empty() {
                    continue;
                }
                let ends = is_sentence_end_with_punctuation(line, language.code())
                    .map_err(CliError::from)?;
                formatter.write_record(&Record::SentenceEnd {
                    source: input.source.clone(),
                    line: idx + 1,
                    text: line.to_string(),
                    ends_with_punctuation: ends,
                })?;
            }
        }
        formatter.finish()
    }
}
