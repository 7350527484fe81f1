//! AVL tree collections for Rust.
//!
//! This crate provides [`AvlTreeMap`] and [`AvlTreeSet`], ordered collections backed by a
//! height-balanced binary search tree. After every insertion and removal, the heights of the two
//! subtrees of every node differ by at most one, which keeps every operation O(log n).
//!
//! Besides the usual map/set operations, the tree's structure can be inspected:
//!
//! - [`lookup`](AvlTreeMap::lookup) / [`root`](AvlTreeMap::root) - Get a [`NodeRef`] and walk its
//!   children, heights and balance factors
//! - [`levels`](AvlTreeMap::levels) - Breadth-first dump of the tree, also available through
//!   `Display`
//! - [`try_remove`](AvlTreeMap::try_remove) - Removal that reports a missing key as
//!   [`KeyNotFound`]
//!
//! # Example
//!
//! ```
//! use avl_tree::{AvlTreeSet, KeyNotFound};
//!
//! let mut set: AvlTreeSet<i32> = (1..=15).collect();
//! assert_eq!(set.len(), 15);
//! assert_eq!(set.height(), 4);
//!
//! // Removing the root promotes its successor.
//! set.remove(&8);
//! assert_eq!(set.root().map(|n| *n.key()), Some(9));
//! assert!(set.lookup(&8).is_none());
//!
//! // A miss leaves the tree alone.
//! assert_eq!(set.try_remove(&100), Err(KeyNotFound));
//! assert_eq!(set.len(), 14);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Arena storage** - Nodes are linked by index, not pointer; freed slots are reused
//! - **Map semantics** - Each key carries a payload; re-inserting a key overwrites it in place
//!
//! # Logging
//!
//! Rotations are reported at `trace` level and removal misses at `debug` level through the
//! [`log`](https://docs.rs/log) facade. Install any `log` implementation to see them.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod levels;
mod node_ref;
mod raw;

pub mod avl_tree_map;
pub mod avl_tree_set;

pub use avl_tree_map::AvlTreeMap;
pub use avl_tree_set::AvlTreeSet;
pub use error::KeyNotFound;
pub use levels::Levels;
pub use node_ref::NodeRef;
