//! Arena-backed tree builder.
//!
//! Nodes are appended top-down with index references to their parent, then
//! converted into the owned first-child / next-sibling form.

use std::collections::HashMap;

use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::tree::TreeNode;

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug)]
pub struct ArenaNode<T> {
    pub element: T,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in insertion order
    pub children: Vec<Index>,
}

/// Arena-based general tree used to assemble a [`TreeNode`] hierarchy.
#[derive(Debug)]
pub struct TreeArena<T> {
    arena: Arena<ArenaNode<T>>,
    root: Option<Index>,
}

impl<T> Default for TreeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TreeArena<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Adds a node below `parent`, or as the root when `parent` is `None`.
    ///
    /// A second root replaces the first as the tree's root; the old root
    /// stays in the arena but is no longer reachable.
    #[instrument(level = "trace", skip(self, element))]
    pub fn insert_node(&mut self, element: T, parent: Option<Index>) -> DomainResult<Index> {
        if let Some(parent_idx) = parent {
            if !self.arena.contains(parent_idx) {
                return Err(DomainError::UnknownNode(format!("{:?}", parent_idx)));
            }
        }

        let node_idx = self.arena.insert(ArenaNode {
            element,
            parent,
            children: Vec::new(),
        });

        match parent.and_then(|p| self.arena.get_mut(p)) {
            Some(parent_node) => parent_node.children.push(node_idx),
            None => self.root = Some(node_idx),
        }
        Ok(node_idx)
    }

    pub fn get_node(&self, idx: Index) -> Option<&ArenaNode<T>> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Number of levels below and including the root; 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(Index, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((idx, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            if let Some(node) = self.get_node(idx) {
                stack.extend(node.children.iter().map(|&c| (c, depth + 1)));
            }
        }
        max_depth
    }

    /// Pre-order walk from the root, children left to right.
    pub fn iter(&self) -> ArenaIterator<'_, T> {
        ArenaIterator {
            arena: self,
            stack: self.root.into_iter().collect(),
        }
    }

    /// Consumes the arena, producing the owned first-child / next-sibling tree
    /// rooted at [`TreeArena::root`].
    #[instrument(level = "debug", skip(self))]
    pub fn into_tree(mut self) -> Option<TreeNode<T>> {
        let root = self.root?;
        debug!("converting {} arena nodes", self.arena.len());

        // Post-order: every child is converted before its parent, and each
        // sibling group is linked back to front.
        let mut order = Vec::with_capacity(self.arena.len());
        let mut stack = vec![root];
        while let Some(idx) = stack.pop() {
            order.push(idx);
            if let Some(node) = self.arena.get(idx) {
                stack.extend(node.children.iter().copied());
            }
        }

        let mut finished: HashMap<Index, TreeNode<T>> = HashMap::new();
        for idx in order.into_iter().rev() {
            let node = self.arena.remove(idx)?;
            let mut first_child: Option<TreeNode<T>> = None;
            for child_idx in node.children.iter().rev() {
                let mut child = finished.remove(child_idx)?;
                if let Some(next) = first_child.take() {
                    child = child.with_sibling(next);
                }
                first_child = Some(child);
            }
            finished.insert(idx, TreeNode::new(node.element, first_child, None));
        }
        finished.remove(&root)
    }
}

pub struct ArenaIterator<'a, T> {
    arena: &'a TreeArena<T>,
    stack: Vec<Index>,
}

impl<'a, T> Iterator for ArenaIterator<'a, T> {
    type Item = (Index, &'a ArenaNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                self.stack.extend(node.children.iter().rev().copied());
                return Some((current_idx, node));
            }
        }
        None
    }
}
