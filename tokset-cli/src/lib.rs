//! tokset CLI library
//!
//! This library provides the command-line interface over the tokset
//! tokenizer and set adapters.

pub mod commands;
pub mod config;
pub mod delimiters;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
