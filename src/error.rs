use core::fmt;

/// The key passed to a `try_remove` call was not in the collection.
///
/// Nothing was changed: the length, shape and height of the tree are exactly what they were
/// before the call.
///
/// # Examples
///
/// ```
/// use avl_tree::{AvlTreeMap, KeyNotFound};
///
/// let mut map = AvlTreeMap::from([(1, "a")]);
/// assert_eq!(map.try_remove(&2), Err(KeyNotFound));
/// assert_eq!(map.len(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct KeyNotFound;

impl fmt::Display for KeyNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("key not found in tree")
    }
}

impl core::error::Error for KeyNotFound {}
