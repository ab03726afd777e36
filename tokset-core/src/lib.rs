//! Legacy-compatible tokenizing and list-backed set semantics
//!
//! This crate provides two independent building blocks for code ported from
//! runtimes with different collection and tokenizing idioms:
//!
//! - [`Tokenizer`]: splits a string on single-character delimiters, one token
//!   per call, optionally emitting each delimiter as a token of its own.
//! - [`CollectionSupport`] and [`SetSupport`]: ordered, vector-backed
//!   multiset and set adapters with bulk `add_all` / `remove_all` /
//!   `retain_all` operations and their exact "changed" reporting.
//!
//! The [`support`] module carries the small stream, sizing and date-pattern
//! helpers that usually travel with them.
//!
//! # Example
//!
//! ```rust
//! use tokset_core::{SetSupport, SupportCollection, Tokenizer};
//!
//! let mut seen = SetSupport::new();
//! for token in Tokenizer::new("to be or not to be") {
//!     seen.add(token);
//! }
//! assert_eq!(seen.to_array(), vec!["to", "be", "or", "not"]);
//! ```
//!
//! Neither component locks internally; share an instance across threads only
//! behind your own synchronization.

#![warn(missing_docs)]

pub mod collections;
pub mod config;
pub mod error;
pub mod support;
pub mod tokenizer;

pub use collections::{
    to_collection_support, to_set_support, CollectionSupport, EqualitySet, SetSupport, SetView,
    SupportCollection,
};
pub use config::{TokenizerConfig, TokenizerConfigBuilder};
pub use error::{Result, SupportError};
pub use tokenizer::{tokenize, DelimiterSet, Tokenizer, DEFAULT_DELIMITERS};
