//! Tokenize command implementation

use super::SourceArgs;
use crate::input::gather_sources;
use crate::output::formatter_for;
use anyhow::Result;
use clap::Args;
use std::io::Write;

/// Arguments for the tokenize command
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Emit every delimiter character as a token of its own
    #[arg(short, long)]
    pub retain: bool,
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self) -> Result<()> {
        self.source.init_logging();

        log::info!("Starting tokenization");
        log::debug!("Arguments: {:?}", self);

        let writer = self.source.open_writer()?;
        self.run(writer)
    }

    /// Tokenize every input and write the tokens to `writer`
    pub fn run<W: Write>(&self, writer: W) -> Result<()> {
        let mut settings = self.source.settings()?;
        if self.retain {
            settings.tokenizer.retain_delimiters = true;
        }

        let sources = gather_sources(self.source.text.as_deref(), &self.source.input)?;
        let mut formatter = formatter_for(settings.format, writer, settings.pretty_json);

        for source in &sources {
            let text = source.read()?;
            let mut tokenizer = settings.tokenizer.tokenizer(text);
            log::info!("Tokenizing {} ({} queued)", source.label(), tokenizer.token_count());

            while tokenizer.has_more_tokens() {
                let token = tokenizer.next_token()?;
                formatter.format_token(&token, None)?;
            }
        }

        formatter.finish()
    }
}
