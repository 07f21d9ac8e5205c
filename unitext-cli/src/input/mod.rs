//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use clap::Args;
use rayon::prelude::*;

use crate::progress::ProgressReporter;

/// Label used for text given on the command line
pub const INLINE_SOURCE: &str = "<text>";
/// Label used for standard input
pub const STDIN_SOURCE: &str = "<stdin>";

/// One loaded input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputText {
    /// File path, or a label for inline text and stdin
    pub source: String,
    /// Full UTF-8 content
    pub content: String,
}

/// Where the text to process comes from
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Process this text instead of files (stdin is read when neither is given)
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,
}

impl InputArgs {
    /// Load every input, reading files in parallel
    pub fn load(&self, quiet: bool) -> Result<Vec<InputText>> {
        if let Some(text) = &self.text {
            return Ok(vec![InputText {
                source: INLINE_SOURCE.to_string(),
                content: text.clone(),
            }]);
        }

        if self.input.is_empty() {
            log::debug!("Reading standard input");
            return Ok(vec![InputText {
                source: STDIN_SOURCE.to_string(),
                content: FileReader::read_stdin()?,
            }]);
        }

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to process", files.len());

        let mut progress = ProgressReporter::new(quiet);
        progress.init_files(files.len() as u64);

        let inputs = files
            .par_iter()
            .map(|path| -> Result<InputText> {
                let content = FileReader::read_text(path)?;
                let source = path.display().to_string();
                progress.file_completed(&source);
                Ok(InputText { source, content })
            })
            .collect::<Result<Vec<_>>>();

        progress.finish();
        inputs
    }
}
