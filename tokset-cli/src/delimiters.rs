//! Parsing of `--delimiters` arguments

use crate::error::CliError;
use tokset_core::DelimiterSet;

/// Parse a delimiter argument, expanding `\t`, `\n`, `\r`, `\s` (space) and
/// `\\` escapes.
pub fn parse_delimiters(raw: &str) -> Result<DelimiterSet, CliError> {
    let mut set = DelimiterSet::empty();
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            set.insert(c);
            continue;
        }
        let escaped = match chars.next() {
            Some('t') => '\t',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('s') => ' ',
            Some('\\') => '\\',
            Some(other) => {
                return Err(CliError::InvalidDelimiters(format!(
                    "unknown escape \\{other}"
                )))
            }
            None => {
                return Err(CliError::InvalidDelimiters(
                    "dangling escape at end of input".to_string(),
                ))
            }
        };
        set.insert(escaped);
    }

    Ok(set)
}
