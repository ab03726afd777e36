//! List resizing

use crate::error::{Result, SupportError};

/// Truncate `items`, or pad it with `T::default()`, to exactly `new_size`.
///
/// A negative size fails with [`SupportError::InvalidArgument`] and leaves
/// `items` untouched.
pub fn set_size<T: Default>(items: &mut Vec<T>, new_size: isize) -> Result<()> {
    let new_size = usize::try_from(new_size).map_err(|_| {
        SupportError::invalid_argument(format!("size must not be negative (got {new_size})"))
    })?;

    items.resize_with(new_size, T::default);
    Ok(())
}
