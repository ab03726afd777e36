//! Delimiter character sets

use smallvec::SmallVec;
use std::fmt;

/// Characters used when no delimiter set is given: space, tab, newline and
/// carriage return.
pub const DEFAULT_DELIMITERS: [char; 4] = [' ', '\t', '\n', '\r'];

/// An ordered set of single-character delimiters.
///
/// Duplicates are dropped on insertion, so iteration yields each character
/// once in the order it was first seen.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub struct DelimiterSet {
    chars: SmallVec<[char; 4]>,
}

impl DelimiterSet {
    /// Create an empty delimiter set. Every input is then a single token.
    pub fn empty() -> Self {
        Self {
            chars: SmallVec::new(),
        }
    }

    /// Whitespace delimiters (the default set)
    pub fn whitespace() -> Self {
        DEFAULT_DELIMITERS.iter().copied().collect()
    }

    /// Add a character, returning false if it was already present
    pub fn insert(&mut self, c: char) -> bool {
        if self.chars.contains(&c) {
            return false;
        }
        self.chars.push(c);
        true
    }

    /// Check whether `c` is a delimiter
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Number of distinct delimiter characters
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True when no delimiters are configured
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Delimiters as a slice, in insertion order
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// Split `text` at every delimiter character.
    ///
    /// Adjacent delimiters produce empty pieces; callers filter them.
    pub(crate) fn split<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        text.split(move |c: char| self.contains(c))
    }

    /// Strip leading delimiter characters from `text`
    pub(crate) fn trim_start<'a>(&self, text: &'a str) -> &'a str {
        text.trim_start_matches(|c: char| self.contains(c))
    }
}

impl Default for DelimiterSet {
    fn default() -> Self {
        Self::whitespace()
    }
}

impl FromIterator<char> for DelimiterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::empty();
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl From<&str> for DelimiterSet {
    fn from(value: &str) -> Self {
        value.chars().collect()
    }
}

impl From<String> for DelimiterSet {
    fn from(value: String) -> Self {
        value.chars().collect()
    }
}

impl From<&[char]> for DelimiterSet {
    fn from(value: &[char]) -> Self {
        value.iter().copied().collect()
    }
}

impl From<DelimiterSet> for String {
    fn from(value: DelimiterSet) -> Self {
        value.chars.iter().collect()
    }
}

impl fmt::Debug for DelimiterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.chars.iter()).finish()
    }
}

impl fmt::Display for DelimiterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            match c {
                '\t' => f.write_str("\\t")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\\' => f.write_str("\\\\")?,
                other => write!(f, "{other}")?,
            }
        }
        Ok(())
    }
}
