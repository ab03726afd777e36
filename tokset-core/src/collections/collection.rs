//! Ordered multiset over a vector

use super::{retain_restarting, SupportCollection};
use crate::error::Result;
use crate::support::sizing;

/// An ordered collection that permits duplicates
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionSupport<T> {
    items: Vec<T>,
}

impl<T> CollectionSupport<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create an empty collection with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Element at `index`, if any
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Consume the collection, returning its storage
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: PartialEq> CollectionSupport<T> {
    /// Remove every element that does not appear in `keep`.
    ///
    /// Returns true if at least one element was removed.
    pub fn retain_all<S>(&mut self, keep: &S) -> bool
    where
        S: AsRef<[T]> + ?Sized,
    {
        let keep = keep.as_ref();
        retain_restarting(&mut self.items, |item| keep.contains(item))
    }
}

impl<T: Default> CollectionSupport<T> {
    /// Truncate, or pad with default values, to exactly `new_size` elements.
    ///
    /// Negative sizes fail with
    /// [`SupportError::InvalidArgument`](crate::SupportError::InvalidArgument).
    pub fn set_size(&mut self, new_size: isize) -> Result<()> {
        sizing::set_size(&mut self.items, new_size)
    }
}

impl<T: PartialEq> SupportCollection<T> for CollectionSupport<T> {
    fn add(&mut self, item: T) -> bool {
        self.items.push(item);
        true
    }

    fn as_slice(&self) -> &[T] {
        &self.items
    }

    fn remove_at(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for CollectionSupport<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for CollectionSupport<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> AsRef<[T]> for CollectionSupport<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> FromIterator<T> for CollectionSupport<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for CollectionSupport<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for CollectionSupport<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a CollectionSupport<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
