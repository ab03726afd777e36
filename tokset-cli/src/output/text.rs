//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one token per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

/// Make tab, newline, carriage return and backslash visible
fn escape_token(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    for c in token.chars() {
        match c {
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\\' => out.push_str("\\\\"),
            other => out.push(other),
        }
    }
    out
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_token(&mut self, token: &str, count: Option<usize>) -> Result<()> {
        match count {
            Some(count) => writeln!(self.writer, "{}\t{}", escape_token(token), count)?,
            None => writeln!(self.writer, "{}", escape_token(token))?,
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
