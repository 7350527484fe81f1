use core::cmp::max;

/// Cached height of a subtree: 0 for an absent subtree, 1 for a leaf.
///
/// An AVL tree of `n` nodes is at most `1.44 * log2(n + 2)` tall, so even `Handle::MAX` nodes
/// fit comfortably in a byte.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
#[repr(transparent)]
pub(crate) struct Height(u8);

impl Height {
    pub(crate) const ZERO: Self = Self(0);
    pub(crate) const LEAF: Self = Self(1);

    /// Height of a node whose children have the given heights.
    #[inline]
    pub(crate) fn above(left: Self, right: Self) -> Self {
        Self(max(left.0, right.0) + 1)
    }

    /// `self - other` as a signed balance factor.
    #[inline]
    pub(crate) fn diff(self, other: Self) -> isize {
        isize::from(self.0) - isize::from(other.0)
    }

    #[inline]
    pub(crate) const fn to_usize(self) -> usize {
        self.0 as usize
    }
}
