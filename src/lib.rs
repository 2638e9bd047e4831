//! Generic unordered n-ary tree container.
//!
//! A tree is just its root [`TreeNode`]: each node carries one optional
//! value and exclusively owns an ordered vector of child nodes. Lookup,
//! insertion and removal are value-addressed through depth-first pre-order
//! search; removal moves the subtree out to the caller.

pub mod errors;
pub mod tree;
pub mod tree_traits;
pub mod util;

pub use errors::{TreeError, TreeResult};
pub use tree::{PostOrderIterator, TreeIterator, TreeNode};
pub use tree_traits::TreeNodeConvert;
