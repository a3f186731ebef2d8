//! Tests for the double-ended Stack

use aockit::domain::{DomainError, Stack};

#[test]
fn given_pushes_when_popping_then_reverse_order() {
    let mut stack = Stack::new();
    for i in 1..=4 {
        stack.push(i);
    }
    assert_eq!(stack.len(), 4);
    assert_eq!(stack.peek(), Some(&4));

    let popped: Vec<i32> = (0..4).map(|_| stack.pop().unwrap()).collect();
    assert_eq!(popped, vec![4, 3, 2, 1]);
    assert!(stack.is_empty());
}

#[test]
fn given_unshifts_when_shifting_then_reverse_order() {
    let mut stack = Stack::new();
    for s in ["a", "b", "c"] {
        stack.unshift(s);
    }
    assert_eq!(stack.peek_front(), Some(&"c"));

    let shifted: Vec<&str> = (0..3).map(|_| stack.shift().unwrap()).collect();
    assert_eq!(shifted, vec!["c", "b", "a"]);
    assert!(stack.is_empty());
}

#[test]
fn given_empty_stack_when_pop_or_shift_then_empty_collection() {
    let mut stack: Stack<String> = Stack::default();
    assert_eq!(
        stack.pop().unwrap_err(),
        DomainError::EmptyCollection { op: "pop" }
    );
    assert_eq!(
        stack.shift().unwrap_err(),
        DomainError::EmptyCollection { op: "shift" }
    );
}

#[test]
fn given_mixed_ends_when_mutating_then_changes_visible_to_owner() {
    let mut stack = Stack::from(vec![2, 3]);
    stack.unshift(1);
    stack.push(4);
    assert_eq!(stack.as_slice(), &[1, 2, 3, 4]);

    assert_eq!(stack.shift().unwrap(), 1);
    assert_eq!(stack.pop().unwrap(), 4);
    assert_eq!(stack.into_vec(), vec![2, 3]);
}

#[test]
fn given_stack_passed_by_reference_when_helper_pushes_then_caller_sees_it() {
    fn fill(stack: &mut Stack<u8>) {
        stack.push(1);
        stack.unshift(0);
    }

    let mut stack = Stack::new();
    fill(&mut stack);
    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![0, 1]);
}

#[test]
fn given_lines_when_collecting_into_stack_then_head_is_first_line() {
    let lines = vec!["first".to_string(), "second".to_string()];
    let mut stack: Stack<String> = lines.into_iter().collect();
    assert_eq!(stack.shift().unwrap(), "first");
    assert_eq!(stack.pop().unwrap(), "second");
}
