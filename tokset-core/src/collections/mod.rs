//! List-backed collection and set adapters
//!
//! [`CollectionSupport`] is an ordered multiset over a `Vec`. [`SetSupport`]
//! keeps the same storage but rejects elements that compare equal to one it
//! already holds. Both share their operations through [`SupportCollection`],
//! so a set differs from a collection only in `add` and `retain_all`.
//!
//! Bulk operations report "did anything change" with a last-write-wins
//! convention: `add_all` and `remove_all` return the outcome of the *final*
//! individual operation they performed, not a fold over all of them.
//!
//! ```rust
//! use tokset_core::collections::{SetSupport, SupportCollection};
//!
//! let mut set = SetSupport::new();
//! assert!(set.add("a"));
//! assert!(!set.add("a"));
//!
//! // The second "b" is rejected last, so the bulk result is false.
//! assert!(!set.add_all(["b", "b"]));
//! assert_eq!(set.to_array(), vec!["a", "b"]);
//! ```

mod collection;
mod set;

pub use collection::CollectionSupport;
pub use set::SetSupport;

use crate::error::{Result, SupportError};
use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

/// Operations shared by the collection and set adapters.
///
/// Implementors supply storage access and `add`; everything else has a
/// default built on those.
pub trait SupportCollection<T: PartialEq> {
    /// Insert an element, returning whether the collection changed
    fn add(&mut self, item: T) -> bool;

    /// Current contents in iteration order
    fn as_slice(&self) -> &[T];

    /// Remove and return the element at `index`
    fn remove_at(&mut self, index: usize) -> T;

    /// Remove every element
    fn clear(&mut self);

    /// Number of elements
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// True when there are no elements
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Iterate in insertion order
    fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Add every present element of `items` in order.
    ///
    /// `None` entries are skipped. Returns the result of the last `add` that
    /// was performed, or false if none was.
    fn add_all<I>(&mut self, items: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<Option<T>>,
        Self: Sized,
    {
        let mut result = false;
        for item in items {
            if let Some(item) = item.into() {
                result = self.add(item);
            }
        }
        result
    }

    /// Whether an equal element is present
    fn contains(&self, item: &T) -> bool {
        self.as_slice().contains(item)
    }

    /// Whether every element of `items` is present.
    ///
    /// Checks in argument order and stops at the first miss.
    fn contains_all<'a, I>(&self, items: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
        Self: Sized,
    {
        for item in items {
            if !self.contains(item) {
                return false;
            }
        }
        true
    }

    /// Remove the first element equal to `item`; true if one was found
    fn remove(&mut self, item: &T) -> bool {
        let position = self.as_slice().iter().position(|x| x == item);
        match position {
            Some(index) => {
                self.remove_at(index);
                true
            }
            None => false,
        }
    }

    /// Remove one occurrence of each element of `items`, in argument order.
    ///
    /// Only elements that are present are removed. Returns the result of the
    /// last removal performed, or false if nothing matched.
    fn remove_all<'a, I>(&mut self, items: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
        Self: Sized,
    {
        let mut result = false;
        for item in items {
            if self.contains(item) {
                result = self.remove(item);
            }
        }
        result
    }

    /// Copy the contents into a new vector
    fn to_array(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }

    /// Copy the contents into `dst`, replacing whatever it held
    fn to_array_into(&self, dst: &mut Vec<T>)
    where
        T: Clone,
    {
        dst.clear();
        dst.extend_from_slice(self.as_slice());
    }
}

/// Containment with set semantics.
///
/// [`SetSupport::retain_all`] only accepts arguments implementing this trait,
/// which is how it requires an argument that is itself a set.
pub trait EqualitySet<T> {
    /// Whether an element equal to `item` is a member
    fn contains_element(&self, item: &T) -> bool;
}

impl<T: PartialEq> EqualitySet<T> for SetSupport<T> {
    fn contains_element(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: Eq + Hash, S: BuildHasher> EqualitySet<T> for HashSet<T, S> {
    fn contains_element(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: Ord> EqualitySet<T> for BTreeSet<T> {
    fn contains_element(&self, item: &T) -> bool {
        self.contains(item)
    }
}

/// A borrowed slice verified to hold no duplicate elements
#[derive(Debug, Clone, Copy)]
pub struct SetView<'a, T> {
    items: &'a [T],
}

impl<'a, T: PartialEq> SetView<'a, T> {
    /// Wrap `items`, failing with
    /// [`SupportError::PreconditionViolation`] if any two are equal
    pub fn try_new(items: &'a [T]) -> Result<Self> {
        for (i, item) in items.iter().enumerate() {
            if items[i + 1..].contains(item) {
                return Err(SupportError::precondition(format!(
                    "element at index {i} is repeated; set semantics required"
                )));
            }
        }
        Ok(Self { items })
    }

    /// The wrapped elements
    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }
}

impl<T: PartialEq> EqualitySet<T> for SetView<'_, T> {
    fn contains_element(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

/// Build a [`CollectionSupport`] holding a copy of `items`
pub fn to_collection_support<T: Clone>(items: &[T]) -> CollectionSupport<T> {
    CollectionSupport::from(items.to_vec())
}

/// Build a [`SetSupport`] from `items`, keeping the first of any equal elements
pub fn to_set_support<T: Clone + PartialEq>(items: &[T]) -> SetSupport<T> {
    items.iter().cloned().collect()
}

/// Drop every element of `items` for which `keep` is false.
///
/// The scan restarts from the front after each removal. Returns whether
/// anything was removed.
pub(crate) fn retain_restarting<T>(items: &mut Vec<T>, keep: impl Fn(&T) -> bool) -> bool {
    let mut result = false;
    let mut passes = 1usize;
    let mut cursor = 0;

    while cursor < items.len() {
        if keep(&items[cursor]) {
            cursor += 1;
            continue;
        }
        items.remove(cursor);
        result = true;
        cursor = 0;
        passes += 1;
    }

    log::trace!("retain_all finished after {passes} passes, {} left", items.len());
    result
}
