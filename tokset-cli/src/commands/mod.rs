//! CLI command implementations

use crate::config::CliConfig;
use crate::delimiters::parse_delimiters;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tokset_core::{DelimiterSet, TokenizerConfig};

pub mod tokenize;
pub mod unique;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text into tokens
    Tokenize(tokenize::TokenizeArgs),

    /// Print each distinct token once, in first-seen order
    Unique(unique::UniqueArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// Show the default delimiter characters
    Delimiters,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Tokenize(args) => args.execute(),
            Commands::Unique(args) => args.execute(),
            Commands::List { subcommand } => subcommand.run(io::stdout().lock()),
        }
    }
}

impl ListCommands {
    /// Write the listing to `writer`
    pub fn run<W: Write>(&self, mut writer: W) -> Result<()> {
        match self {
            ListCommands::Formats => {
                for format in OutputFormat::ALL {
                    writeln!(writer, "{}", format.name())?;
                }
            }
            ListCommands::Delimiters => {
                writeln!(writer, "{}", DelimiterSet::default())?;
            }
        }
        Ok(())
    }
}

/// Input, tokenizer and output options shared by every processing command
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Text to tokenize
    pub text: Option<String>,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Delimiter characters; \t \n \r \s and \\ are expanded
    #[arg(short, long, value_name = "CHARS")]
    pub delimiters: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Effective settings after merging the config file with flags
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Tokenizer configuration
    pub tokenizer: TokenizerConfig,
    /// Output format
    pub format: OutputFormat,
    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl SourceArgs {
    /// Merge defaults, the config file and command-line flags, in that order
    pub fn settings(&self) -> Result<Settings> {
        let config = CliConfig::load_or_default(self.config.as_deref())?;

        let mut tokenizer = config.tokenizer;
        if let Some(raw) = &self.delimiters {
            tokenizer.delimiters = parse_delimiters(raw)?;
        }

        Ok(Settings {
            tokenizer,
            format: self.format.unwrap_or(config.output.default_format),
            pretty_json: config.output.pretty_json,
        })
    }

    /// Open the output destination
    pub fn open_writer(&self) -> Result<Box<dyn Write>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout().lock())),
        }
    }

    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when commands run in-process
        let env = env_logger::Env::default().default_filter_or(log_level);
        let _ = env_logger::Builder::from_env(env).try_init();
    }
}

#[cfg(test)]
pub(crate) fn source_args(text: &str) -> SourceArgs {
    SourceArgs {
        text: Some(text.to_string()),
        input: Vec::new(),
        delimiters: None,
        config: None,
        format: None,
        output: None,
        quiet: true,
        verbose: 0,
    }
}
