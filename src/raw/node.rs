use super::handle::Handle;
use super::height::Height;

/// One key of the tree together with its payload and links to its children.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    key: K,
    value: V,
    // Height of the subtree rooted here; kept equal to `1 + max(left, right)`.
    height: Height,
    left: Option<Handle>,
    right: Option<Handle>,
}

impl<K, V> Node<K, V> {
    /// Creates a detached leaf.
    pub(crate) const fn leaf(key: K, value: V) -> Self {
        Self {
            key,
            value,
            height: Height::LEAF,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) const fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub(crate) const fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    pub(crate) const fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    #[inline]
    pub(crate) const fn height(&self) -> Height {
        self.height
    }

    pub(crate) const fn set_height(&mut self, height: Height) {
        self.height = height;
    }

    #[inline]
    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    pub(crate) const fn set_left(&mut self, left: Option<Handle>) {
        self.left = left;
    }

    pub(crate) const fn set_right(&mut self, right: Option<Handle>) {
        self.right = right;
    }

    /// Swaps in a new key and payload, returning the old pair. Links and height are untouched.
    pub(crate) fn replace(&mut self, key: K, value: V) -> (K, V) {
        (core::mem::replace(&mut self.key, key), core::mem::replace(&mut self.value, value))
    }

    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }
}
