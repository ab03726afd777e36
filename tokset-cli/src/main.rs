//! tokset command-line entry point

use anyhow::Result;
use clap::Parser;
use tokset_cli::commands::Commands;

/// Legacy-compatible tokenizer and set utilities
#[derive(Debug, Parser)]
#[command(name = "tokset", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_tokenize_subcommand() {
        let cli = Cli::try_parse_from(["tokset", "tokenize", "a b"]).unwrap();
        assert!(matches!(cli.command, Commands::Tokenize(_)));
    }
}
