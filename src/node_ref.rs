use core::fmt;

use crate::raw::{Handle, Node, RawAvlTree};

/// A read-only view of one node of an [`AvlTreeMap`](crate::AvlTreeMap) or
/// [`AvlTreeSet`](crate::AvlTreeSet).
///
/// Returned by `lookup` and `root`. A `NodeRef` borrows the whole tree, so the tree cannot be
/// mutated while one is alive; it is cheap to copy and can be used to walk the tree's structure.
///
/// # Examples
///
/// ```
/// use avl_tree::AvlTreeMap;
///
/// let map = AvlTreeMap::from([(1, 'a'), (2, 'b'), (3, 'c')]);
/// let root = map.root().unwrap();
///
/// assert_eq!(*root.key(), 2);
/// assert_eq!(root.height(), 2);
/// assert_eq!(root.left().map(|n| *n.value()), Some('a'));
/// assert_eq!(root.right().map(|n| *n.value()), Some('c'));
/// ```
pub struct NodeRef<'a, K, V> {
    tree: &'a RawAvlTree<K, V>,
    handle: Handle,
}

impl<'a, K, V> NodeRef<'a, K, V> {
    pub(crate) const fn new(tree: &'a RawAvlTree<K, V>, handle: Handle) -> Self {
        Self {
            tree,
            handle,
        }
    }

    fn node(&self) -> &'a Node<K, V> {
        self.tree.node(self.handle)
    }

    fn child(&self, child: Option<Handle>) -> Option<Self> {
        child.map(|handle| Self::new(self.tree, handle))
    }

    /// The key stored at this node.
    #[must_use]
    pub fn key(&self) -> &'a K {
        self.node().key()
    }

    /// The value stored at this node.
    #[must_use]
    pub fn value(&self) -> &'a V {
        self.node().value()
    }

    /// Height of the subtree rooted at this node. A leaf has height 1.
    #[must_use]
    pub fn height(&self) -> usize {
        self.node().height().to_usize()
    }

    /// Height of the left subtree minus height of the right subtree. Always in `-1..=1`.
    #[must_use]
    pub fn balance_factor(&self) -> isize {
        self.tree.balance_factor(self.handle)
    }

    #[must_use]
    pub fn left(&self) -> Option<Self> {
        self.child(self.node().left())
    }

    #[must_use]
    pub fn right(&self) -> Option<Self> {
        self.child(self.node().right())
    }

    /// Returns `true` if this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        let node = self.node();
        node.left().is_none() && node.right().is_none()
    }
}

impl<K, V> Clone for NodeRef<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for NodeRef<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for NodeRef<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", self.key())
            .field("value", self.value())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn walks_children_of_a_three_node_tree() {
        let mut tree = RawAvlTree::new();
        for key in [2, 1, 3] {
            tree.insert(key, key * 100);
        }

        let root = NodeRef::new(&tree, tree.root().unwrap());
        assert_eq!((*root.key(), *root.value()), (2, 200));
        assert_eq!(root.balance_factor(), 0);
        assert!(!root.is_leaf());

        let left = root.left().unwrap();
        assert!(left.is_leaf());
        assert_eq!(left.height(), 1);
        assert!(left.left().is_none());
        assert_eq!(*root.right().unwrap().key(), 3);
    }

    #[test]
    fn debug_shows_key_value_and_height() {
        let mut tree = RawAvlTree::new();
        tree.insert("k", 'v');
        let node = NodeRef::new(&tree, tree.root().unwrap());
        assert_eq!(format!("{node:?}"), "NodeRef { key: \"k\", value: 'v', height: 1, .. }");
    }
}
