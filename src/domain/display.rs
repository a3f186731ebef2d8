//! Text rendering of trees via `termtree`.
//!
//! Workaround for E0116: `termtree::Tree` is a foreign type, so conversions
//! go through a local trait.

use std::fmt::Display;

use termtree::Tree;

use crate::domain::arena::TreeArena;
use crate::domain::tree::TreeNode;

pub trait TreeDisplay {
    fn to_display_tree(&self) -> Tree<String>;
}

impl<T: Display> TreeDisplay for TreeNode<T> {
    /// Renders this node and its children. The node's own sibling chain is
    /// not part of the rendered subtree.
    fn to_display_tree(&self) -> Tree<String> {
        let leaves: Vec<_> = self.children().map(|c| c.to_display_tree()).collect();
        Tree::new(self.element().to_string()).with_leaves(leaves)
    }
}

impl<T: Display> TreeDisplay for TreeArena<T> {
    fn to_display_tree(&self) -> Tree<String> {
        fn build<T: Display>(arena: &TreeArena<T>, idx: generational_arena::Index) -> Tree<String> {
            match arena.get_node(idx) {
                Some(node) => Tree::new(node.element.to_string())
                    .with_leaves(node.children.iter().map(|&c| build(arena, c))),
                None => Tree::new(String::new()),
            }
        }

        match self.root() {
            Some(root) => build(self, root),
            None => Tree::new("Empty tree".to_string()),
        }
    }
}
