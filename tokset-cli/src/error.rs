//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Malformed `--delimiters` argument
    InvalidDelimiters(String),
    /// Neither inline text nor input files were given
    MissingInput,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InvalidDelimiters(msg) => write!(f, "Invalid delimiters: {msg}"),
            CliError::MissingInput => write!(f, "No input: pass TEXT or --input"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("test.txt".to_string());
        assert_eq!(error.to_string(), "File not found: test.txt");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_invalid_delimiters_display() {
        let error = CliError::InvalidDelimiters("dangling escape".to_string());
        assert_eq!(error.to_string(), "Invalid delimiters: dangling escape");
    }

    #[test]
    fn test_missing_input_display() {
        assert_eq!(
            CliError::MissingInput.to_string(),
            "No input: pass TEXT or --input"
        );
    }

    #[test]
    fn test_cli_result_wraps_cli_error() {
        let failure: CliResult<()> = Err(CliError::MissingInput.into());
        let err = failure.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
