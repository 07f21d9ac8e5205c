//! Classify command implementation

use anyhow::Result;
use clap::Args;
use unitext_core::{is_cjk_char, is_punctuation_char};

use super::CommonArgs;
use crate::input::InputArgs;
use crate::output::Record;

/// Arguments for the classify command
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Report only punctuation characters
    #[arg(long)]
    pub punctuation_only: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl ClassifyArgs {
    /// Execute the classify command
    pub fn execute(&self) -> Result<()> {
        let config = self.common.prepare()?;
        let inputs = self.input.load(self.common.quiet)?;

        let mut formatter = self.common.formatter(&config)?;
        for input in &inputs {
            for ch in input.content.chars().filter(|c| !c.is_control()) {
                if self.punctuation_only && !is_punctuation_char(ch) {
                    continue;
                }
                formatter.write_record(&classify_char(ch))?;
            }
        }
        formatter.finish()
    }
}

/// Classification record for one character
pub fn classify_char(ch: char) -> Record {
    Record::Character {
        character: ch,
        code_point: format!("U+{:04X}", ch as u32),
        punctuation: is_punctuation_char(ch),
        cjk: is_cjk_char(ch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_char() {
        assert_eq!(
            classify_char('中'),
            Record::Character {
                character: '中',
                code_point: "U+4E2D".to_string(),
                punctuation: false,
                cjk: true,
            }
        );
        assert_eq!(
            classify_char('!'),
            Record::Character {
                character: '!',
                code_point: "U+0021".to_string(),
                punctuation: true,
                cjk: false,
            }
        );
    }

    #[test]
    fn test_supplementary_plane_code_point() {
        let Record::Character { code_point, .. } = classify_char('\u{20000}') else {
            panic!("expected character record");
        };
        assert_eq!(code_point, "U+20000");
    }
}
