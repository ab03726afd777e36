//! Unique command implementation

use super::SourceArgs;
use crate::input::gather_sources;
use crate::output::formatter_for;
use anyhow::Result;
use clap::Args;
use std::io::Write;
use tokset_core::{CollectionSupport, SetSupport, SupportCollection};

/// Arguments for the unique command
#[derive(Debug, Args)]
pub struct UniqueArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print how often each token occurred
    #[arg(long)]
    pub count: bool,

    /// Drop these tokens from the result
    #[arg(long, value_name = "TOKEN")]
    pub ignore: Vec<String>,

    /// Keep only these tokens
    #[arg(long, value_name = "TOKEN")]
    pub only: Vec<String>,
}

impl UniqueArgs {
    /// Execute the unique command
    pub fn execute(&self) -> Result<()> {
        self.source.init_logging();

        log::info!("Collecting distinct tokens");
        log::debug!("Arguments: {:?}", self);

        let writer = self.source.open_writer()?;
        self.run(writer)
    }

    /// Collect distinct tokens from every input and write them to `writer`
    pub fn run<W: Write>(&self, writer: W) -> Result<()> {
        let settings = self.source.settings()?;
        let sources = gather_sources(self.source.text.as_deref(), &self.source.input)?;

        let mut all: CollectionSupport<String> = CollectionSupport::new();
        for source in &sources {
            let text = source.read()?;
            all.add_all(settings.tokenizer.tokenizer(text));
        }

        let mut distinct: SetSupport<String> = SetSupport::new();
        distinct.add_all(all.iter().cloned());
        log::info!("{} tokens, {} distinct", all.len(), distinct.len());

        if !self.ignore.is_empty() && distinct.remove_all(&self.ignore) {
            log::debug!("ignored tokens removed, {} left", distinct.len());
        }

        if !self.only.is_empty() {
            let only: SetSupport<String> = self.only.iter().cloned().collect();
            if distinct.retain_all(&only) {
                log::debug!("restricted to --only tokens, {} left", distinct.len());
            }
        }

        let mut formatter = formatter_for(settings.format, writer, settings.pretty_json);
        for token in distinct.iter() {
            let count = self
                .count
                .then(|| all.iter().filter(|seen| *seen == token).count());
            formatter.format_token(token, count)?;
        }

        formatter.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::source_args;

    fn unique_args(text: &str) -> UniqueArgs {
        UniqueArgs {
            source: source_args(text),
            count: false,
            ignore: Vec::new(),
            only: Vec::new(),
        }
    }

    fn run_to_string(args: &UniqueArgs) -> String {
        let mut buf = Vec::new();
        args.run(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_first_seen_order() {
        let args = unique_args("to be or not to be");
        assert_eq!(run_to_string(&args), "to\nbe\nor\nnot\n");
    }

    #[test]
    fn test_counts() {
        let mut args = unique_args("b a b b");
        args.count = true;
        assert_eq!(run_to_string(&args), "b\t3\na\t1\n");
    }

    #[test]
    fn test_ignore_and_only() {
        let mut args = unique_args("x y z w");
        args.ignore = vec!["y".to_string()];
        args.only = vec!["w".to_string(), "y".to_string(), "x".to_string()];
        assert_eq!(run_to_string(&args), "x\nw\n");
    }
}
