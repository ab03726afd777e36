//! Helpers that sit beside the tokenizer and collections
//!
//! None of these are used by the core components; they cover the small
//! stream, sizing and date-pattern utilities that ported code expects to find
//! next to them.

pub mod format;
pub mod io;
pub mod sizing;

pub use format::{
    date_pattern, reset_patterns, set_date_pattern, set_time_pattern, time_pattern,
    DEFAULT_DATE_PATTERN, DEFAULT_TIME_PATTERN,
};
pub use io::{read_input, END_OF_STREAM};
pub use sizing::set_size;
