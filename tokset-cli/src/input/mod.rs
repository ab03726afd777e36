//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use crate::error::CliError;
use anyhow::Result;
use std::path::PathBuf;

/// A piece of text to tokenize
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text given directly on the command line
    Inline(String),
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Human-readable name for log messages
    pub fn label(&self) -> String {
        match self {
            InputSource::Inline(_) => "<inline>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    /// Load the text
    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::Inline(text) => Ok(text.clone()),
            InputSource::File(path) => FileReader::read_text(path),
        }
    }
}

/// Combine inline text and file patterns into an ordered list of sources.
///
/// Inline text comes first, then files sorted by path.
pub fn gather_sources(text: Option<&str>, patterns: &[String]) -> Result<Vec<InputSource>> {
    let mut sources = Vec::new();

    if let Some(text) = text {
        sources.push(InputSource::Inline(text.to_string()));
    }

    if !patterns.is_empty() {
        sources.extend(resolve_patterns(patterns)?.into_iter().map(InputSource::File));
    }

    if sources.is_empty() {
        return Err(CliError::MissingInput.into());
    }

    Ok(sources)
}
