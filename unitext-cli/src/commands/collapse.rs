//! Collapse command implementation

use anyhow::Result;
use clap::Args;
use unitext_core::remove_consecutive_punctuations;

use super::CommonArgs;
use crate::input::InputArgs;
use crate::output::Record;

/// Arguments for the collapse command
#[derive(Debug, Args)]
pub struct CollapseArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl CollapseArgs {
    /// Execute the collapse command
    pub fn execute(&self) -> Result<()> {
        let config = self.common.prepare()?;
        let inputs = self.input.load(self.common.quiet)?;

        let mut formatter = self.common.formatter(&config)?;
        for input in inputs {
            formatter.write_record(&Record::Transformed {
                text: remove_consecutive_punctuations(&input.content),
                source: input.source,
            })?;
        }
        formatter.finish()
    }
}
