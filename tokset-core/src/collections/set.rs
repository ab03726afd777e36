//! Insertion-ordered set over a vector

use super::{retain_restarting, EqualitySet, SupportCollection};

/// An ordered collection in which no two elements compare equal.
///
/// Membership uses linear `PartialEq` scans, so element types need no `Hash`
/// or `Ord`. Iteration follows insertion order.
#[derive(Debug, Clone)]
pub struct SetSupport<T> {
    items: Vec<T>,
}

impl<T> SetSupport<T> {
    /// Create an empty set
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create an empty set with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Consume the set, returning its storage
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: PartialEq> SetSupport<T> {
    /// Remove every element that is not a member of `keep`.
    ///
    /// `keep` must itself have set semantics. Returns true if at least one
    /// element was removed.
    pub fn retain_all<S>(&mut self, keep: &S) -> bool
    where
        S: EqualitySet<T> + ?Sized,
    {
        retain_restarting(&mut self.items, |item| keep.contains_element(item))
    }
}

impl<T: PartialEq> SupportCollection<T> for SetSupport<T> {
    fn add(&mut self, item: T) -> bool {
        if self.items.contains(&item) {
            return false;
        }
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

impl<T> Default for SetSupport<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Equal when both hold the same members, regardless of order
impl<T: PartialEq> PartialEq for SetSupport<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len() && self.items.iter().all(|x| other.items.contains(x))
    }
}

impl<T: Eq> Eq for SetSupport<T> {}

impl<T: PartialEq> From<Vec<T>> for SetSupport<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T> AsRef<[T]> for SetSupport<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T: PartialEq> FromIterator<T> for SetSupport<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: PartialEq> Extend<T> for SetSupport<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> IntoIterator for SetSupport<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SetSupport<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
