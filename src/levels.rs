//! Breadth-first dump of a tree's shape, for debugging.

use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

use crate::node_ref::NodeRef;

/// An iterator over the levels of a tree, root first.
///
/// Each level lists, left to right, the children of every node present on the level above,
/// with `None` standing in for a missing child. The last level yielded is therefore made up
/// entirely of `None`s: the empty children of the deepest nodes. An empty tree yields nothing.
///
/// This `struct` is created by [`AvlTreeMap::levels`](crate::AvlTreeMap::levels) and
/// [`AvlTreeSet::levels`](crate::AvlTreeSet::levels).
///
/// # Examples
///
/// ```
/// use avl_tree::AvlTreeSet;
///
/// let set = AvlTreeSet::from([1, 2, 3]);
/// let keys: Vec<Vec<Option<i32>>> = set
///     .levels()
///     .map(|level| level.iter().map(|slot| slot.map(|n| *n.key())).collect())
///     .collect();
///
/// assert_eq!(keys, [vec![Some(2)], vec![Some(1), Some(3)], vec![None; 4]]);
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Levels<'a, K, V> {
    next: Vec<Option<NodeRef<'a, K, V>>>,
}

impl<'a, K, V> Levels<'a, K, V> {
    pub(crate) fn new(root: Option<NodeRef<'a, K, V>>) -> Self {
        Self {
            next: root.map(|root| alloc::vec![Some(root)]).unwrap_or_default(),
        }
    }
}

impl<'a, K, V> Iterator for Levels<'a, K, V> {
    type Item = Vec<Option<NodeRef<'a, K, V>>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next.is_empty() {
            return None;
        }

        let below = self.next.iter().flatten().flat_map(|node| [node.left(), node.right()]).collect();
        Some(core::mem::replace(&mut self.next, below))
    }
}

impl<K, V> FusedIterator for Levels<'_, K, V> {}

impl<K, V> fmt::Debug for Levels<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Levels").field("pending", &self.next.len()).finish()
    }
}

/// Writes one line per level: keys separated by two spaces, `-` for a missing child.
pub(crate) fn write_levels<K: fmt::Display, V>(f: &mut fmt::Formatter<'_>, levels: Levels<'_, K, V>) -> fmt::Result {
    for level in levels {
        for (i, slot) in level.iter().enumerate() {
            if i > 0 {
                f.write_str("  ")?;
            }
            match slot {
                Some(node) => fmt::Display::fmt(node.key(), f)?,
                None => f.write_str("-")?,
            }
        }
        f.write_str("\n")?;
    }
    Ok(())
}
