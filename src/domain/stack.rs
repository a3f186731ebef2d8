//! Double-ended stack over an owned sequence.

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::sequence;

/// Stack with tail access (`push`/`pop`) and head access (`unshift`/`shift`).
///
/// Every mutating operation takes `&mut self`, so changes are always visible
/// to the owner of the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends `element` to the tail.
    pub fn push(&mut self, element: T) {
        self.items.push(element);
    }

    /// Removes and returns the tail element.
    pub fn pop(&mut self) -> DomainResult<T> {
        self.items
            .pop()
            .ok_or(DomainError::EmptyCollection { op: "pop" })
    }

    /// Prepends `element` at the head.
    pub fn unshift(&mut self, element: T) {
        // index 0 never exceeds the length
        let inserted = sequence::insert(&mut self.items, element, 0);
        debug_assert!(inserted.is_ok(), "head insert out of range");
    }

    /// Removes and returns the head element.
    pub fn shift(&mut self) -> DomainResult<T> {
        // delete(0) only fails on an empty sequence
        sequence::delete(&mut self.items, 0)
            .map_err(|_| DomainError::EmptyCollection { op: "shift" })
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates head to tail.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    /// The first element of `items` becomes the head, the last the tail.
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_empty_stack_when_unshifting_then_single_head() {
        let mut stack = Stack::new();
        stack.unshift(7);
        assert_eq!(stack.as_slice(), &[7]);
        assert_eq!(stack.peek(), stack.peek_front());
    }

    #[test]
    fn given_pushed_items_when_unshifting_then_prepended_before_head() {
        let mut stack = Stack::from(vec![2, 3]);
        stack.unshift(1);
        stack.push(4);
        assert_eq!(stack.into_vec(), vec![1, 2, 3, 4]);
    }
}
