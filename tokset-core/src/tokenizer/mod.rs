//! Legacy-compatible string tokenizer
//!
//! The tokenizer hands out tokens one at a time from a source string split on
//! a set of single-character delimiters. It runs in one of two modes, fixed at
//! construction:
//!
//! - **Consuming** (the default): every call to [`Tokenizer::next_token`]
//!   re-splits whatever is left of the source, takes the first non-empty
//!   piece, cuts that text out of the source and strips the delimiters that
//!   follow it. Runs of delimiters therefore collapse.
//! - **Retaining**: the whole source is scanned once up front. Every delimiter
//!   character becomes a one-character token of its own, interleaved with the
//!   ordinary tokens, and adjacent delimiters are *not* coalesced.
//!
//! In both modes empty strings never reach the caller.
//!
//! # Example
//!
//! ```rust
//! use tokset_core::Tokenizer;
//!
//! let tokens: Vec<String> = Tokenizer::new("a b  c").collect();
//! assert_eq!(tokens, vec!["a", "b", "c"]);
//!
//! let tokens: Vec<String> = Tokenizer::with_options("a,b,,c", ",", true).collect();
//! assert_eq!(tokens, vec!["a", ",", "b", ",", ",", "c"]);
//! ```

mod delimiters;

#[cfg(test)]
mod tests;

pub use delimiters::{DelimiterSet, DEFAULT_DELIMITERS};

use crate::config::TokenizerConfig;
use crate::error::{Result, SupportError};
use std::collections::VecDeque;

/// Splits a string into tokens on demand.
///
/// A tokenizer is built once per input string and mutated by every call to
/// [`next_token`](Self::next_token). It also implements [`Iterator`], which
/// yields tokens until [`has_more_tokens`](Self::has_more_tokens) turns false.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Unconsumed input. Shrinks in consuming mode, untouched when retaining.
    source: String,
    delimiters: DelimiterSet,
    retain_delimiters: bool,
    /// Tokens produced by the most recent split, never containing `""`
    pending: VecDeque<String>,
}

impl Tokenizer {
    /// Tokenize `source` on whitespace, dropping the delimiters
    pub fn new(source: impl Into<String>) -> Self {
        Self::with_options(source, DelimiterSet::default(), false)
    }

    /// Tokenize `source` on a custom delimiter set, dropping the delimiters
    pub fn with_delimiters(source: impl Into<String>, delimiters: impl Into<DelimiterSet>) -> Self {
        Self::with_options(source, delimiters, false)
    }

    /// Tokenize `source` with full control over delimiters and mode
    pub fn with_options(
        source: impl Into<String>,
        delimiters: impl Into<DelimiterSet>,
        retain_delimiters: bool,
    ) -> Self {
        let source = source.into();
        let delimiters = delimiters.into();

        let pending = if retain_delimiters {
            scan_retaining(&source, &delimiters)
        } else {
            split_tokens(&source, &delimiters)
        };

        log::trace!(
            "tokenizer created: {} chars, delimiters [{}], retain={}, {} queued",
            source.chars().count(),
            delimiters,
            retain_delimiters,
            pending.len()
        );

        Self {
            source,
            delimiters,
            retain_delimiters,
            pending,
        }
    }

    /// Build a tokenizer from a [`TokenizerConfig`]
    pub fn from_config(source: impl Into<String>, config: &TokenizerConfig) -> Self {
        Self::with_options(
            source,
            config.delimiters.clone(),
            config.retain_delimiters,
        )
    }

    /// Whether another call to [`next_token`](Self::next_token) would succeed.
    ///
    /// In consuming mode this splits the current remaining source and checks
    /// for a non-empty piece; in retaining mode it checks the precomputed queue.
    pub fn has_more_tokens(&self) -> bool {
        if self.retain_delimiters {
            !self.pending.is_empty()
        } else {
            self.delimiters.split(&self.source).any(|t| !t.is_empty())
        }
    }

    /// Return the next token.
    ///
    /// Fails with [`SupportError::Exhausted`] once nothing is left.
    ///
    /// In consuming mode the token list is derived from scratch on every call
    /// and the returned text is removed at its *first occurrence* in the
    /// remaining source rather than at a tracked cursor. Callers that depend
    /// on the exact remaining source see this behaviour directly; it is kept
    /// as-is and must not be replaced by a forward-scanning cursor.
    pub fn next_token(&mut self) -> Result<String> {
        if self.retain_delimiters {
            return self.next_retained();
        }

        if self.source.is_empty() {
            return Err(SupportError::Exhausted);
        }

        self.pending = split_tokens(&self.source, &self.delimiters);
        let token = self.pending.pop_front().ok_or(SupportError::Exhausted)?;

        if let Some(at) = self.source.find(token.as_str()) {
            self.source.replace_range(at..at + token.len(), "");
        }
        let rest = self.delimiters.trim_start(&self.source).len();
        let stripped = self.source.len() - rest;
        self.source.replace_range(..stripped, "");

        log::trace!("token {:?}, {} bytes of source left", token, self.source.len());
        Ok(token)
    }

    /// Replace the active delimiter set, then return the next token.
    ///
    /// In retaining mode the queue was computed at construction, so the new
    /// set is stored but does not change the tokens still to come.
    pub fn next_token_with(&mut self, delimiters: impl Into<DelimiterSet>) -> Result<String> {
        self.delimiters = delimiters.into();
        self.next_token()
    }

    /// Number of tokens queued after the last split.
    ///
    /// Diagnostic only: in consuming mode the queue is rebuilt on every call
    /// to [`next_token`](Self::next_token). Not to be confused with
    /// [`Iterator::count`], which drains the tokenizer.
    pub fn token_count(&self) -> usize {
        self.pending.len()
    }

    /// The unconsumed source text
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The active delimiter set
    pub fn delimiters(&self) -> &DelimiterSet {
        &self.delimiters
    }

    /// Whether delimiters are emitted as tokens
    pub fn retains_delimiters(&self) -> bool {
        self.retain_delimiters
    }

    fn next_retained(&mut self) -> Result<String> {
        remove_empty_strings(&mut self.pending);
        self.pending.pop_front().ok_or(SupportError::Exhausted)
    }
}

impl Iterator for Tokenizer {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_more_tokens() {
            return None;
        }
        self.next_token().ok()
    }
}

/// Drain a tokenizer over `source` into a vector
pub fn tokenize(
    source: &str,
    delimiters: impl Into<DelimiterSet>,
    retain_delimiters: bool,
) -> Vec<String> {
    Tokenizer::with_options(source, delimiters, retain_delimiters).collect()
}

fn split_tokens(source: &str, delimiters: &DelimiterSet) -> VecDeque<String> {
    let mut tokens: VecDeque<String> = delimiters.split(source).map(String::from).collect();
    remove_empty_strings(&mut tokens);
    tokens
}

/// One token per maximal non-delimiter run, one per delimiter character.
fn scan_retaining(source: &str, delimiters: &DelimiterSet) -> VecDeque<String> {
    let mut tokens = VecDeque::new();
    let mut run = String::new();

    for c in source.chars() {
        if delimiters.contains(c) {
            tokens.push_back(std::mem::take(&mut run));
            tokens.push_back(c.to_string());
        } else {
            run.push(c);
        }
    }
    tokens.push_back(run);

    remove_empty_strings(&mut tokens);
    tokens
}

fn remove_empty_strings(tokens: &mut VecDeque<String>) {
    tokens.retain(|t| !t.is_empty());
}
