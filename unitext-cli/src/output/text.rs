//! Plain text output formatter

use super::{OutputFormatter, Record};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter
///
/// Transformed text is written as-is, one input after another. Line checks
/// and character classifications are written one per line, tab-separated.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn write_record(&mut self, record: &Record) -> Result<()> {
        match record {
            Record::Transformed { text, .. } => {
                self.writer.write_all(text.as_bytes())?;
                if !text.ends_with('\n') {
                    writeln!(self.writer)?;
                }
            }
            Record::SentenceEnd {
                source,
                line,
                text,
                ends_with_punctuation,
            } => {
                writeln!(self.writer, "{source}:{line}\t{ends_with_punctuation}\t{text}")?;
            }
            Record::Character {
                character,
                code_point,
                punctuation,
                cjk,
            } => {
                writeln!(
                    self.writer,
                    "{code_point}\t{character}\tpunctuation={punctuation}\tcjk={cjk}"
                )?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
