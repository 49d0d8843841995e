//! A generic bit-keyed set.

use crate::api::{BitKey, StoreError};

/// A generic bit-keyed set.
///
/// Elements are accepted as any `BitKey`, and reported as `u64`. Values without a key -- negative integers -- are
/// never contained, and are neither inserted nor removed.
pub trait BitSet {
    /// Returns whether the set is empty.
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns whether the set contains the element, or not.
    fn contains<K>(&self, element: K) -> bool
    where
        K: BitKey;

    /// Clears the set, removing all elements.
    fn clear(&mut self);

    /// Inserts an element in the set.
    ///
    /// Returns:
    ///
    /// -   `Ok(true)`: if the element was successfully inserted.
    /// -   `Ok(false)`: if the element was already present, or has no key.
    /// -   `Err(_)`: if the element could not be inserted, and wasn't already present.
    fn insert<K>(&mut self, element: K) -> Result<bool, StoreError>
    where
        K: BitKey;

    /// Removes an element from the set, returning whether it is newly removed or not.
    fn remove<K>(&mut self, element: K) -> bool
    where
        K: BitKey;
}
