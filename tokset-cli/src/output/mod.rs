//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single token, with its occurrence count if known
    fn format_token(&mut self, token: &str, count: Option<usize>) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line, control characters escaped
    #[default]
    Text,
    /// JSON array of tokens with their positions
    Json,
}

impl OutputFormat {
    /// Every format, in display order
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Text, OutputFormat::Json];

    /// Name as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Create a formatter for `format` writing to `writer`
pub fn formatter_for<'w, W: std::io::Write + 'w>(
    format: OutputFormat,
    writer: W,
    pretty_json: bool,
) -> Box<dyn OutputFormatter + 'w> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
    }
}
