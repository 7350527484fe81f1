use core::borrow::Borrow;
use core::cmp::Ordering::{Equal, Greater, Less};

use super::arena::Arena;
use super::handle::Handle;
use super::height::Height;
use super::node::Node;
use crate::error::KeyNotFound;

/// The AVL tree backing `AvlTreeMap` and `AvlTreeSet`.
///
/// Nodes live in an arena and refer to their children by [`Handle`]. There are no parent links:
/// every recursive edit returns the root of the subtree it touched, and the caller stores that
/// handle back into the parent's child slot (or into `root`).
#[derive(Clone)]
pub(crate) struct RawAvlTree<K, V> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<K, V>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// Number of keys in the tree.
    len: usize,
}

impl<K, V> RawAvlTree<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            len: 0,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    pub(crate) const fn root(&self) -> Option<Handle> {
        self.root
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    /// Height of the whole tree; 0 when empty.
    pub(crate) fn height(&self) -> Height {
        self.height_of(self.root)
    }

    fn height_of(&self, subtree: Option<Handle>) -> Height {
        subtree.map_or(Height::ZERO, |handle| self.nodes.get(handle).height())
    }

    /// `height(left) - height(right)` for the node at `handle`.
    pub(crate) fn balance_factor(&self, handle: Handle) -> isize {
        let node = self.nodes.get(handle);
        self.height_of(node.left()).diff(self.height_of(node.right()))
    }

    fn update_height(&mut self, handle: Handle) {
        let node = self.nodes.get(handle);
        let height = Height::above(self.height_of(node.left()), self.height_of(node.right()));
        self.nodes.get_mut(handle).set_height(height);
    }

    /// Rotates the subtree at `handle` to the right and returns its new root, the former left
    /// child.
    fn rotate_right(&mut self, handle: Handle) -> Handle {
        let pivot = self.nodes.get(handle).left().expect("`RawAvlTree::rotate_right()` - no left child!");
        let inner = self.nodes.get(pivot).right();

        self.nodes.get_mut(handle).set_left(inner);
        self.nodes.get_mut(pivot).set_right(Some(handle));
        self.update_height(handle);
        self.update_height(pivot);

        log::trace!("rotated right at slot {}, subtree height now {}", handle.slot(), self.height_of(Some(pivot)).to_usize());
        pivot
    }

    /// Mirror image of [`Self::rotate_right`].
    fn rotate_left(&mut self, handle: Handle) -> Handle {
        let pivot = self.nodes.get(handle).right().expect("`RawAvlTree::rotate_left()` - no right child!");
        let inner = self.nodes.get(pivot).left();

        self.nodes.get_mut(handle).set_right(inner);
        self.nodes.get_mut(pivot).set_left(Some(handle));
        self.update_height(handle);
        self.update_height(pivot);

        log::trace!("rotated left at slot {}, subtree height now {}", handle.slot(), self.height_of(Some(pivot)).to_usize());
        pivot
    }

    /// Refreshes the height of `handle` and restores the AVL invariant there, assuming both of its
    /// subtrees already satisfy it. Returns the root of the (possibly rotated) subtree.
    fn rebalance(&mut self, handle: Handle) -> Handle {
        self.update_height(handle);

        let node = self.nodes.get(handle);
        let (left, right) = (node.left(), node.right());
        let factor = self.balance_factor(handle);

        if factor > 1
            && let Some(left) = left
        {
            // Left-right: straighten the left child first.
            if self.balance_factor(left) < 0 {
                let pivot = self.rotate_left(left);
                self.nodes.get_mut(handle).set_left(Some(pivot));
            }
            return self.rotate_right(handle);
        }

        if factor < -1
            && let Some(right) = right
        {
            // Right-left: straighten the right child first.
            if self.balance_factor(right) > 0 {
                let pivot = self.rotate_right(right);
                self.nodes.get_mut(handle).set_right(Some(pivot));
            }
            return self.rotate_left(handle);
        }

        handle
    }

    /// Unlinks the minimum node of the subtree at `handle`.
    ///
    /// Returns the detached node and the new root of what remains of the subtree. The detached
    /// node keeps stale links; the caller must overwrite them.
    fn detach_min(&mut self, handle: Handle) -> (Handle, Option<Handle>) {
        let node = self.nodes.get(handle);
        match node.left() {
            None => (handle, node.right()),
            Some(left) => {
                let (min, rest) = self.detach_min(left);
                self.nodes.get_mut(handle).set_left(rest);
                (min, Some(self.rebalance(handle)))
            }
        }
    }
}

impl<K: Ord, V> RawAvlTree<K, V> {
    /// Finds the node holding `key`. Never mutates.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match key.cmp(node.key().borrow()) {
                Less => node.left(),
                Greater => node.right(),
                Equal => return Some(handle),
            };
        }
        None
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).map(|handle| self.nodes.get(handle).value())
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.search(key)?;
        Some(self.nodes.get_mut(handle).value_mut())
    }

    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let node = self.nodes.get(self.search(key)?);
        Some((node.key(), node.value()))
    }

    /// Inserts `key` with `value`.
    ///
    /// If an equal key is already present its node keeps its position and links, but both the key
    /// and the value are overwritten; the displaced pair is returned. No rebalancing happens in
    /// that case.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<(K, V)> {
        let mut displaced = None;
        self.root = Some(self.insert_at(self.root, key, value, &mut displaced));
        displaced
    }

    fn insert_at(&mut self, subtree: Option<Handle>, key: K, value: V, displaced: &mut Option<(K, V)>) -> Handle {
        let Some(handle) = subtree else {
            let leaf = self.nodes.alloc(Node::leaf(key, value));
            self.len += 1;
            return leaf;
        };

        let node = self.nodes.get_mut(handle);
        match key.cmp(node.key()) {
            Less => {
                let left = node.left();
                let left = self.insert_at(left, key, value, displaced);
                self.nodes.get_mut(handle).set_left(Some(left));
            }
            Greater => {
                let right = node.right();
                let right = self.insert_at(right, key, value, displaced);
                self.nodes.get_mut(handle).set_right(Some(right));
            }
            Equal => {
                *displaced = Some(node.replace(key, value));
                return handle;
            }
        }

        self.rebalance(handle)
    }

    /// Removes `key`, returning the stored key and value.
    ///
    /// The tree is probed first; on a miss nothing is touched and [`KeyNotFound`] is returned.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Result<(K, V), KeyNotFound>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        if self.search(key).is_none() {
            log::debug!("remove: key not present, tree of {} keys left unchanged", self.len);
            return Err(KeyNotFound);
        }

        let mut removed = None;
        self.root = self.remove_at(self.root, key, &mut removed);
        removed.ok_or(KeyNotFound)
    }

    fn remove_at<Q>(&mut self, subtree: Option<Handle>, key: &Q, removed: &mut Option<(K, V)>) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = subtree?;
        let node = self.nodes.get(handle);
        let (left, right) = (node.left(), node.right());

        let root = match key.cmp(node.key().borrow()) {
            Less => {
                let left = self.remove_at(left, key, removed);
                self.nodes.get_mut(handle).set_left(left);
                handle
            }
            Greater => {
                let right = self.remove_at(right, key, removed);
                self.nodes.get_mut(handle).set_right(right);
                handle
            }
            Equal => {
                let replacement = match (left, right) {
                    (None, child) | (child, None) => child,
                    (Some(left), Some(right)) => {
                        // The successor takes this node's place.
                        let (successor, rest) = self.detach_min(right);
                        let successor_node = self.nodes.get_mut(successor);
                        successor_node.set_left(Some(left));
                        successor_node.set_right(rest);
                        Some(successor)
                    }
                };

                *removed = Some(self.nodes.take(handle).into_entry());
                self.len -= 1;
                replacement?
            }
        };

        Some(self.rebalance(root))
    }
}
