mod arena;
mod handle;
mod height;
mod node;
mod raw_avl_tree;

pub(crate) use handle::Handle;
pub(crate) use node::Node;
pub(crate) use raw_avl_tree::RawAvlTree;
