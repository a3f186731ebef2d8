//! Tests for sibling trees, the arena builder and tree display

use aockit::domain::{BinaryNode, DomainError, TreeArena, TreeDisplay, TreeNode};
use aockit::util::testing;
use rstest::{fixture, rstest};

/// R has children A and B; A has child C.
#[fixture]
fn tree() -> TreeNode<&'static str> {
    let a = TreeNode::leaf("A")
        .with_child(TreeNode::leaf("C"))
        .with_sibling(TreeNode::leaf("B"));
    TreeNode::leaf("R").with_child(a)
}

#[rstest]
fn given_tree_when_enumerating_then_sibling_before_child(tree: TreeNode<&'static str>) {
    let order: Vec<&str> = tree.enumerate().into_iter().map(|n| *n.element()).collect();
    assert_eq!(order, vec!["R", "A", "B", "C"]);
}

#[rstest]
fn given_tree_when_elements_then_same_order_as_iter(tree: TreeNode<&'static str>) {
    let from_iter: Vec<&&str> = tree.iter().map(TreeNode::element).collect();
    assert_eq!(tree.elements(), from_iter);
}

#[test]
fn given_sibling_subtree_when_enumerating_then_whole_sibling_subtree_precedes_child() {
    // R -> first child A (children X), A's sibling B (children Y)
    let b = TreeNode::leaf("B").with_child(TreeNode::leaf("Y"));
    let a = TreeNode::leaf("A")
        .with_child(TreeNode::leaf("X"))
        .with_sibling(b);
    let root = TreeNode::leaf("R").with_child(a);

    assert_eq!(root.elements(), vec![&"R", &"A", &"B", &"Y", &"X"]);
}

#[test]
fn given_leaf_when_enumerating_then_only_itself() {
    let leaf = TreeNode::leaf(42);
    assert_eq!(leaf.elements(), vec![&42]);
    assert!(leaf.first_child().is_none());
    assert!(leaf.next_sibling().is_none());
    assert_eq!(leaf.children().count(), 0);
}

#[test]
fn given_node_with_sibling_when_enumerating_then_sibling_included() {
    let node = TreeNode::new(1, Some(TreeNode::leaf(3)), Some(TreeNode::leaf(2)));
    assert_eq!(node.elements(), vec![&1, &2, &3]);
}

#[test]
fn given_arena_when_into_tree_then_children_in_insertion_order() {
    testing::init_test_setup();
    let mut arena = TreeArena::new();
    let r = arena.insert_node("R", None).unwrap();
    let a = arena.insert_node("A", Some(r)).unwrap();
    arena.insert_node("B", Some(r)).unwrap();
    arena.insert_node("C", Some(a)).unwrap();

    assert_eq!(arena.len(), 4);
    assert_eq!(arena.depth(), 3);
    let walk: Vec<&str> = arena.iter().map(|(_, n)| n.element).collect();
    assert_eq!(walk, vec!["R", "A", "C", "B"]);

    let tree = arena.into_tree().unwrap();
    let children: Vec<&str> = tree.children().map(|c| *c.element()).collect();
    assert_eq!(children, vec!["A", "B"]);
    assert_eq!(tree.elements(), vec![&"R", &"A", &"B", &"C"]);
}

#[test]
fn given_empty_arena_when_into_tree_then_none() {
    let arena: TreeArena<u8> = TreeArena::default();
    assert!(arena.is_empty());
    assert_eq!(arena.depth(), 0);
    assert!(arena.into_tree().is_none());
}

#[test]
fn given_foreign_parent_index_when_inserting_then_unknown_node() {
    let mut other = TreeArena::new();
    let mut arena = TreeArena::new();
    arena.insert_node(1, None).unwrap();
    // index from a different, larger arena does not exist here
    other.insert_node(0, None).unwrap();
    other.insert_node(0, None).unwrap();
    let foreign = other.insert_node(0, None).unwrap();

    let err = arena.insert_node(2, Some(foreign)).unwrap_err();
    assert!(matches!(err, DomainError::UnknownNode(_)));
}

#[test]
fn given_arena_when_displayed_then_renders_hierarchy() {
    let mut arena = TreeArena::new();
    let r = arena.insert_node("root", None).unwrap();
    arena.insert_node("leaf", Some(r)).unwrap();

    let rendered = arena.to_display_tree().to_string();
    assert!(rendered.starts_with("root"));
    assert!(rendered.contains("leaf"));
}

#[test]
fn given_binary_tree_when_enumerating_then_preorder() {
    let tree = BinaryNode::new(
        1,
        Some(BinaryNode::new(2, Some(BinaryNode::leaf(3)), None)),
        Some(BinaryNode::leaf(4)),
    );
    let order: Vec<i32> = tree.enumerate().into_iter().map(|n| *n.element()).collect();
    assert_eq!(order, vec![1, 2, 3, 4]);
    assert_eq!(tree.left().map(BinaryNode::element), Some(&2));
    assert_eq!(tree.right().map(BinaryNode::element), Some(&4));
}
