use std::fmt;

use termtree::Tree;
use tracing::instrument;

use crate::tree::TreeNode;

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<T: fmt::Display> TreeNodeConvert for TreeNode<T> {
    #[instrument(level = "debug", skip_all)]
    fn to_tree_string(&self) -> Tree<String> {
        // The root of the Tree<String> is this node's rendered value
        let root = match self.value() {
            Some(value) => value.to_string(),
            None => "(unset)".to_string(),
        };

        // Recursively construct the children
        let leaves: Vec<_> = self
            .children()
            .into_iter()
            .flatten()
            .map(|child| child.to_tree_string())
            .collect();

        Tree::new(root).with_leaves(leaves)
    }
}

impl<T: fmt::Display> fmt::Display for TreeNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_tree_string())
    }
}
