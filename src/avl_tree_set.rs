use core::borrow::Borrow;
use core::fmt;

use crate::AvlTreeMap;
use crate::error::KeyNotFound;
use crate::levels::{Levels, write_levels};
use crate::node_ref::NodeRef;

/// An ordered set based on an AVL tree.
///
/// See [`AvlTreeMap`]'s documentation for a detailed discussion of the balancing guarantees.
///
/// Unlike `std::collections::BTreeSet`, inserting an element equal to one already in the set
/// replaces the stored element with the new one.
///
/// # Examples
///
/// ```
/// use avl_tree::AvlTreeSet;
///
/// let mut books = AvlTreeSet::new();
///
/// // Add some books.
/// books.insert("A Dance With Dragons");
/// books.insert("To Kill a Mockingbird");
/// books.insert("The Odyssey");
/// books.insert("The Great Gatsby");
///
/// // Check for a specific one.
/// if !books.contains("The Winds of Winter") {
///     println!("We have {} books, but The Winds of Winter ain't one.",
///              books.len());
/// }
///
/// // Remove a book.
/// books.remove("The Odyssey");
/// assert_eq!(books.len(), 3);
/// ```
pub struct AvlTreeSet<T> {
    map: AvlTreeMap<T, ()>,
}

impl<T> AvlTreeSet<T> {
    /// Makes a new, empty `AvlTreeSet`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AvlTreeSet;
    ///
    /// let mut set: AvlTreeSet<i32> = AvlTreeSet::new();
    /// ```
    #[must_use]
    pub const fn new() -> AvlTreeSet<T> {
        AvlTreeSet {
            map: AvlTreeMap::new(),
        }
    }

    /// Creates an empty set with room for at least `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        AvlTreeSet {
            map: AvlTreeMap::with_capacity(capacity),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }

    /// Clears the set, removing all elements.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AvlTreeSet;
    ///
    /// let mut v = AvlTreeSet::new();
    /// assert_eq!(v.len(), 0);
    /// v.insert(1);
    /// assert_eq!(v.len(), 1);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set contains no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the height of the tree: 0 when empty.
    #[must_use]
    pub fn height(&self) -> usize {
        self.map.height()
    }

    /// Returns the root node of the tree, or `None` if the set is empty.
    #[must_use]
    pub fn root(&self) -> Option<NodeRef<'_, T, ()>> {
        self.map.root()
    }

    /// Returns an iterator over the levels of the tree, from the root down. A debugging aid.
    pub fn levels(&self) -> Levels<'_, T, ()> {
        self.map.levels()
    }
}

impl<T: Ord> AvlTreeSet<T> {
    /// Returns `true` if the set contains an element equal to the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AvlTreeSet;
    ///
    /// let set = AvlTreeSet::from([1, 2, 3]);
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&4), false);
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.contains_key(value)
    }

    /// Returns a reference to the element in the set, if any, that is equal to the value.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.get_key_value(value).map(|(k, ())| k)
    }

    /// Returns the node holding an element equal to the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AvlTreeSet;
    ///
    /// let set = AvlTreeSet::from([1, 2, 3]);
    /// assert_eq!(set.lookup(&2).map(|n| n.height()), Some(2));
    /// assert!(set.lookup(&9).is_none());
    /// ```
    pub fn lookup<Q>(&self, value: &Q) -> Option<NodeRef<'_, T, ()>>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.lookup(value)
    }

    /// Adds a value to the set.
    ///
    /// Returns whether the value was newly inserted. If an equal element was already present it
    /// is overwritten by `value` and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AvlTreeSet;
    ///
    /// let mut set = AvlTreeSet::new();
    ///
    /// assert_eq!(set.insert(2), true);
    /// assert_eq!(set.insert(2), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        self.replace(value).is_none()
    }

    /// Adds a value to the set, replacing the existing element, if any, that is equal to the
    /// value. Returns the replaced element.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AvlTreeSet;
    ///
    /// let mut set = AvlTreeSet::new();
    /// set.insert(Vec::<i32>::new());
    ///
    /// assert_eq!(set.get(&[][..]).unwrap().capacity(), 0);
    /// set.replace(Vec::with_capacity(10));
    /// assert_eq!(set.get(&[][..]).unwrap().capacity(), 10);
    /// ```
    pub fn replace(&mut self, value: T) -> Option<T> {
        self.map.raw.insert(value, ()).map(|(old, ())| old)
    }

    /// If the set contains an element equal to the value, removes it from the set and drops it.
    /// Returns whether such an element was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AvlTreeSet;
    ///
    /// let mut set = AvlTreeSet::new();
    ///
    /// set.insert(2);
    /// assert_eq!(set.remove(&2), true);
    /// assert_eq!(set.remove(&2), false);
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.try_remove(value).is_ok()
    }

    /// Removes and returns the element in the set, if any, that is equal to the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::AvlTreeSet;
    ///
    /// let mut set = AvlTreeSet::from([1, 2, 3]);
    /// assert_eq!(set.take(&2), Some(2));
    /// assert_eq!(set.take(&2), None);
    /// ```
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.remove_entry(value).map(|(k, ())| k)
    }

    /// Removes the element equal to the value.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFound`] if no such element exists; the set is left unchanged.
    pub fn try_remove<Q>(&mut self, value: &Q) -> Result<(), KeyNotFound>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.try_remove(value)
    }
}

impl<T: Clone> Clone for AvlTreeSet<T> {
    fn clone(&self) -> Self {
        AvlTreeSet {
            map: self.map.clone(),
        }
    }
}

impl<T> Default for AvlTreeSet<T> {
    fn default() -> AvlTreeSet<T> {
        AvlTreeSet::new()
    }
}

impl<T> fmt::Debug for AvlTreeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvlTreeSet").field("len", &self.len()).field("height", &self.height()).finish_non_exhaustive()
    }
}

impl<T: fmt::Display> fmt::Display for AvlTreeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_levels(f, self.levels())
    }
}

impl<T: Ord> FromIterator<T> for AvlTreeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> AvlTreeSet<T> {
        let mut set = AvlTreeSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for AvlTreeSet<T> {
    #[inline]
    fn extend<Iter: IntoIterator<Item = T>>(&mut self, iter: Iter) {
        for elem in iter {
            self.insert(elem);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for AvlTreeSet<T> {
    /// Converts a `[T; N]` into an `AvlTreeSet<T>`.
    ///
    /// ```
    /// use avl_tree::AvlTreeSet;
    ///
    /// let set1 = AvlTreeSet::from([1, 2, 3, 4]);
    /// assert_eq!(set1.len(), 4);
    /// ```
    fn from(arr: [T; N]) -> Self {
        AvlTreeSet::from_iter(arr)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[derive(Debug)]
    struct Tagged(u8, &'static str);

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }
    impl Eq for Tagged {}
    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> core::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    #[test]
    fn insert_overwrites_equal_element() {
        let mut set = AvlTreeSet::new();
        assert!(set.insert(Tagged(5, "first")));
        assert!(!set.insert(Tagged(5, "second")));

        assert_eq!(set.len(), 1);
        assert_eq!(set.get(&Tagged(5, "")).map(|t| t.1), Some("second"));
        assert_eq!(set.replace(Tagged(5, "third")).map(|t| t.1), Some("second"));
    }

    #[test]
    fn try_remove_reports_missing_element() {
        let mut set = AvlTreeSet::from([1, 2]);
        assert_eq!(set.try_remove(&3), Err(KeyNotFound));
        assert_eq!(set.try_remove(&1), Ok(()));
        assert_eq!(set.to_string(), "2\n-  -\n");
    }
}
