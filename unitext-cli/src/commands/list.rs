//! List command implementation

use anyhow::Result;
use std::io::{self, Write};
use unitext_core::{Language, PunctuationMode};

use super::ListCommands;
use crate::error::CliError;

/// Execute a list subcommand, writing to stdout
pub fn execute(subcommand: ListCommands) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write_list(subcommand, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

/// Write a listing to any writer
pub fn write_list<W: Write>(subcommand: ListCommands, writer: &mut W) -> Result<()> {
    match subcommand {
        ListCommands::Languages => {
            for language in Language::ALL {
                let set = language.sentence_end_set().map_err(CliError::from)?;
                writeln!(
                    writer,
                    "{}\t{}\t{}",
                    language.code(),
                    language.name(),
                    set.patterns().join(" ")
                )?;
            }
        }
        ListCommands::Modes => {
            for mode in PunctuationMode::ALL {
                writeln!(writer, "{}\t{}", mode, mode.description())?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(subcommand: ListCommands) -> String {
        let mut out = Vec::new();
        write_list(subcommand, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_languages() {
        let out = render(ListCommands::Languages);
        let codes: Vec<_> = out.lines().map(|l| l.split('\t').next().unwrap()).collect();
        assert_eq!(codes, vec!["zh", "en", "ja", "ko"]);
        assert!(out.contains("Japanese\t。 ？ ！ ； ……"));
    }

    #[test]
    fn test_list_modes() {
        let out = render(ListCommands::Modes);
        assert_eq!(out.lines().count(), 3);
        assert!(out.starts_with("general\t"));
        assert!(out.contains("chinese-context\t"));
    }
}
