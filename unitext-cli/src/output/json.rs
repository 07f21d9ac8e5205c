//! JSON output formatter

use super::{OutputFormatter, Record};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs records as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<Record>,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            records: Vec::new(),
            pretty,
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn write_record(&mut self, record: &Record) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_records_are_tagged() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter
            .write_record(&Record::Transformed {
                source: "<text>".into(),
                text: "你好，世界".into(),
            })
            .unwrap();
        formatter
            .write_record(&Record::Character {
                character: '中',
                code_point: "U+4E2D".into(),
                punctuation: false,
                cjk: true,
            })
            .unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.into_inner()).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["kind"], "transformed");
        assert_eq!(value[0]["text"], "你好，世界");
        assert_eq!(value[1]["kind"], "character");
        assert_eq!(value[1]["character"], "中");
        assert_eq!(value[1]["cjk"], true);
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter.finish().unwrap();
        let out = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(out.trim(), "[]");
    }
}
