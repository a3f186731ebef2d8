//! Left-child/right-sibling trees with exclusive ownership per link.
//!
//! A node's children are its `first_child` followed by that child's
//! `next_sibling` chain. Each node is owned by exactly one parent or
//! preceding sibling, so the structure cannot contain cycles.
//!
//! `Clone`, `PartialEq`, `Debug` and `Drop` never recurse through links:
//! a sibling chain is as deep as it is wide.

use std::fmt;

/// General tree node encoded as first-child / next-sibling.
pub struct TreeNode<T> {
    element: T,
    first_child: Option<Box<TreeNode<T>>>,
    next_sibling: Option<Box<TreeNode<T>>>,
}

impl<T> TreeNode<T> {
    pub fn new(
        element: T,
        first_child: Option<TreeNode<T>>,
        next_sibling: Option<TreeNode<T>>,
    ) -> Self {
        Self {
            element,
            first_child: first_child.map(Box::new),
            next_sibling: next_sibling.map(Box::new),
        }
    }

    pub fn leaf(element: T) -> Self {
        Self::new(element, None, None)
    }

    /// Replaces the first-child link.
    pub fn with_child(mut self, child: TreeNode<T>) -> Self {
        self.first_child = Some(Box::new(child));
        self
    }

    /// Replaces the next-sibling link.
    pub fn with_sibling(mut self, sibling: TreeNode<T>) -> Self {
        self.next_sibling = Some(Box::new(sibling));
        self
    }

    pub fn element(&self) -> &T {
        &self.element
    }

    pub fn first_child(&self) -> Option<&TreeNode<T>> {
        self.first_child.as_deref()
    }

    pub fn next_sibling(&self) -> Option<&TreeNode<T>> {
        self.next_sibling.as_deref()
    }

    /// Direct children in order: the first child, then its sibling chain.
    pub fn children(&self) -> Children<'_, T> {
        Children {
            next: self.first_child(),
        }
    }

    /// Walks the node, then its sibling chain's enumeration, then its
    /// first child's enumeration.
    pub fn iter(&self) -> Enumerate<'_, T> {
        Enumerate { stack: vec![self] }
    }

    /// Collects [`TreeNode::iter`]: every node reachable from `self`
    /// through sibling and child links, sibling-before-child.
    pub fn enumerate(&self) -> Vec<&TreeNode<T>> {
        self.iter().collect()
    }

    /// Elements in enumeration order.
    pub fn elements(&self) -> Vec<&T> {
        self.iter().map(TreeNode::element).collect()
    }
}

/// Pre-order, sibling-before-child walk.
///
/// Explicit stack instead of recursion: long sibling chains are as deep as
/// they are wide.
pub struct Enumerate<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
}

impl<'a, T> Iterator for Enumerate<'a, T> {
    type Item = &'a TreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // child pushed first so the sibling's whole enumeration comes out first
        if let Some(child) = node.first_child() {
            self.stack.push(child);
        }
        if let Some(sibling) = node.next_sibling() {
            self.stack.push(sibling);
        }
        Some(node)
    }
}

pub struct Children<'a, T> {
    next: Option<&'a TreeNode<T>>,
}

impl<'a, T> Iterator for Children<'a, T> {
    type Item = &'a TreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.next_sibling();
        Some(current)
    }
}

/// Binary tree node with owned left/right links.
pub struct BinaryNode<T> {
    element: T,
    left: Option<Box<BinaryNode<T>>>,
    right: Option<Box<BinaryNode<T>>>,
}

impl<T> BinaryNode<T> {
    pub fn new(element: T, left: Option<BinaryNode<T>>, right: Option<BinaryNode<T>>) -> Self {
        Self {
            element,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    pub fn leaf(element: T) -> Self {
        Self::new(element, None, None)
    }

    pub fn element(&self) -> &T {
        &self.element
    }

    pub fn left(&self) -> Option<&BinaryNode<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&BinaryNode<T>> {
        self.right.as_deref()
    }

    /// Pre-order: node, left subtree, right subtree.
    pub fn enumerate(&self) -> Vec<&BinaryNode<T>> {
        let mut nodes = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            nodes.push(node);
            if let Some(right) = node.right() {
                stack.push(right);
            }
            if let Some(left) = node.left() {
                stack.push(left);
            }
        }
        nodes
    }
}

/// Node with exactly two owned links, walked with an explicit stack.
trait Linked: Sized {
    type Element;

    fn parts(&self) -> (&Self::Element, [Option<&Self>; 2]);

    fn take_links(&mut self) -> [Option<Box<Self>>; 2];

    fn assemble(element: Self::Element, links: [Option<Self>; 2]) -> Self;
}

impl<T> Linked for TreeNode<T> {
    type Element = T;

    fn parts(&self) -> (&T, [Option<&Self>; 2]) {
        (&self.element, [self.first_child(), self.next_sibling()])
    }

    fn take_links(&mut self) -> [Option<Box<Self>>; 2] {
        [self.first_child.take(), self.next_sibling.take()]
    }

    fn assemble(element: T, [first_child, next_sibling]: [Option<Self>; 2]) -> Self {
        Self::new(element, first_child, next_sibling)
    }
}

impl<T> Linked for BinaryNode<T> {
    type Element = T;

    fn parts(&self) -> (&T, [Option<&Self>; 2]) {
        (&self.element, [self.left(), self.right()])
    }

    fn take_links(&mut self) -> [Option<Box<Self>>; 2] {
        [self.left.take(), self.right.take()]
    }

    fn assemble(element: T, [left, right]: [Option<Self>; 2]) -> Self {
        Self::new(element, left, right)
    }
}

/// Copies the structure in pre-order, then rebuilds it back to front so
/// every link target exists before the node that owns it.
fn clone_linked<N: Linked>(root: &N) -> N
where
    N::Element: Clone,
{
    let mut order: Vec<&N> = Vec::new();
    let mut links: Vec<[Option<usize>; 2]> = Vec::new();
    let mut stack: Vec<(&N, Option<(usize, usize)>)> = vec![(root, None)];
    while let Some((node, from)) = stack.pop() {
        let id = order.len();
        if let Some((owner, slot)) = from {
            links[owner][slot] = Some(id);
        }
        order.push(node);
        links.push([None, None]);
        for (slot, link) in node.parts().1.into_iter().enumerate() {
            if let Some(next) = link {
                stack.push((next, Some((id, slot))));
            }
        }
    }

    let mut built: Vec<Option<N>> = Vec::new();
    built.resize_with(order.len(), || None);
    let build = |id: usize, built: &mut Vec<Option<N>>| {
        let owned = links[id].map(|link| link.and_then(|i| built[i].take()));
        N::assemble(order[id].parts().0.clone(), owned)
    };
    for id in (1..order.len()).rev() {
        let node = build(id, &mut built);
        built[id] = Some(node);
    }
    build(0, &mut built)
}

fn eq_linked<N: Linked>(a: &N, b: &N) -> bool
where
    N::Element: PartialEq,
{
    let mut stack = vec![(a, b)];
    while let Some((x, y)) = stack.pop() {
        let (x_element, x_links) = x.parts();
        let (y_element, y_links) = y.parts();
        if x_element != y_element {
            return false;
        }
        for pair in x_links.into_iter().zip(y_links) {
            match pair {
                (Some(xn), Some(yn)) => stack.push((xn, yn)),
                (None, None) => {}
                _ => return false,
            }
        }
    }
    true
}

fn drop_linked<N: Linked>(node: &mut N) {
    let mut pending: Vec<Box<N>> = node.take_links().into_iter().flatten().collect();
    while let Some(mut next) = pending.pop() {
        pending.extend(next.take_links().into_iter().flatten());
    }
}

impl<T: Clone> Clone for TreeNode<T> {
    fn clone(&self) -> Self {
        clone_linked(self)
    }
}

impl<T: PartialEq> PartialEq for TreeNode<T> {
    fn eq(&self, other: &Self) -> bool {
        eq_linked(self, other)
    }
}

impl<T: Eq> Eq for TreeNode<T> {}

impl<T> Drop for TreeNode<T> {
    fn drop(&mut self) {
        drop_linked(self);
    }
}

impl<T: fmt::Debug> fmt::Debug for TreeNode<T> {
    /// Shows the element with its direct children only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode")
            .field("element", &self.element)
            .field(
                "children",
                &self.children().map(TreeNode::element).collect::<Vec<_>>(),
            )
            .field("has_sibling", &self.next_sibling.is_some())
            .finish()
    }
}

impl<T: Clone> Clone for BinaryNode<T> {
    fn clone(&self) -> Self {
        clone_linked(self)
    }
}

impl<T: PartialEq> PartialEq for BinaryNode<T> {
    fn eq(&self, other: &Self) -> bool {
        eq_linked(self, other)
    }
}

impl<T: Eq> Eq for BinaryNode<T> {}

impl<T> Drop for BinaryNode<T> {
    fn drop(&mut self) {
        drop_linked(self);
    }
}

impl<T: fmt::Debug> fmt::Debug for BinaryNode<T> {
    /// Shows the element with its direct children only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryNode")
            .field("element", &self.element)
            .field("left", &self.left().map(BinaryNode::element))
            .field("right", &self.right().map(BinaryNode::element))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_long_sibling_chain_when_enumerating_and_dropping_then_no_overflow() {
        let mut node = TreeNode::leaf(0u32);
        for i in 1..200_000u32 {
            node = TreeNode::leaf(i).with_sibling(node);
        }
        assert_eq!(node.enumerate().len(), 200_000);
        drop(node);
    }

    #[test]
    fn given_node_when_children_then_follows_sibling_chain() {
        let root = TreeNode::leaf("r")
            .with_child(TreeNode::leaf("a").with_sibling(TreeNode::leaf("b")));
        let names: Vec<_> = root.children().map(|c| *c.element()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    fn sibling_chain(len: u32) -> TreeNode<u32> {
        let mut node = TreeNode::leaf(0u32);
        for i in 1..len {
            node = TreeNode::leaf(i).with_sibling(node);
        }
        node
    }

    #[test]
    fn given_long_sibling_chain_when_cloned_and_compared_then_no_overflow() {
        let node = sibling_chain(200_000);
        let copy = node.clone();
        assert_eq!(copy.enumerate().len(), 200_000);
        assert!(copy == node);

        let other = TreeNode::leaf(u32::MAX).with_sibling(sibling_chain(199_999));
        assert!(other != node);
        assert!(format!("{:?}", node).contains("has_sibling: true"));
    }

    #[test]
    fn given_tree_when_cloned_then_structure_and_order_kept() {
        let root = TreeNode::leaf("r").with_child(
            TreeNode::leaf("a")
                .with_child(TreeNode::leaf("c"))
                .with_sibling(TreeNode::leaf("b")),
        );
        let copy = root.clone();
        assert_eq!(copy.elements(), root.elements());
        assert_eq!(copy, root);
        assert_ne!(copy, TreeNode::leaf("r"));
    }

    #[test]
    fn given_long_left_spine_when_cloned_compared_and_dropped_then_no_overflow() {
        let mut node = BinaryNode::leaf(0u32);
        for i in 1..200_000u32 {
            node = BinaryNode::new(i, Some(node), None);
        }
        let copy = node.clone();
        assert!(copy == node);
        assert_eq!(copy.enumerate().len(), 200_000);
        drop(copy);
        drop(node);
    }
}
