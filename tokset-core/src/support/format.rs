//! Process-wide date and time pattern lookup
//!
//! Each format name maps to a date pattern and a time pattern. Names with no
//! registered override resolve to [`DEFAULT_DATE_PATTERN`] and
//! [`DEFAULT_TIME_PATTERN`]. The table is created on first use and shared by
//! every thread.

use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

/// Date pattern used when none is registered
pub const DEFAULT_DATE_PATTERN: &str = "d-MMM-yy";

/// Time pattern used when none is registered
pub const DEFAULT_TIME_PATTERN: &str = "h:mm:ss tt";

#[derive(Debug, Clone, Default)]
struct Patterns {
    date: Option<String>,
    time: Option<String>,
}

static PATTERNS: OnceLock<RwLock<HashMap<String, Patterns>>> = OnceLock::new();

fn table() -> &'static RwLock<HashMap<String, Patterns>> {
    PATTERNS.get_or_init(|| RwLock::new(HashMap::new()))
}

fn lookup(format: &str, pick: impl Fn(&Patterns) -> Option<&String>) -> Option<String> {
    let table = table().read().unwrap_or_else(PoisonError::into_inner);
    table.get(format).and_then(pick).cloned()
}

fn update(format: &str, apply: impl FnOnce(&mut Patterns)) {
    let mut table = table().write().unwrap_or_else(PoisonError::into_inner);
    apply(table.entry(format.to_string()).or_default());
}

/// Date pattern registered for `format`, or the default
pub fn date_pattern(format: &str) -> String {
    lookup(format, |p| p.date.as_ref()).unwrap_or_else(|| DEFAULT_DATE_PATTERN.to_string())
}

/// Time pattern registered for `format`, or the default
pub fn time_pattern(format: &str) -> String {
    lookup(format, |p| p.time.as_ref()).unwrap_or_else(|| DEFAULT_TIME_PATTERN.to_string())
}

/// Register the date pattern for `format`
pub fn set_date_pattern(format: &str, pattern: impl Into<String>) {
    let pattern = pattern.into();
    log::debug!("date pattern for {format:?} set to {pattern:?}");
    update(format, |p| p.date = Some(pattern));
}

/// Register the time pattern for `format`
pub fn set_time_pattern(format: &str, pattern: impl Into<String>) {
    let pattern = pattern.into();
    log::debug!("time pattern for {format:?} set to {pattern:?}");
    update(format, |p| p.time = Some(pattern));
}

/// Drop any overrides for `format`, returning it to the defaults
pub fn reset_patterns(format: &str) {
    let mut table = table().write().unwrap_or_else(PoisonError::into_inner);
    table.remove(format);
}
