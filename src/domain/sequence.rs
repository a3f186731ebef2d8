//! In-place splicing of ordered sequences.
//!
//! All operations validate their indices up front and leave the sequence
//! untouched on error.

use crate::domain::error::{DomainError, DomainResult};

/// Removes the half-open range `[start, end)` from `seq`.
///
/// Elements outside the range keep their relative order and the sequence
/// shrinks by `end - start`.
///
/// # Errors
/// `IndexOutOfRange` if `start > end` or `end > seq.len()`.
pub fn cut<T>(seq: &mut Vec<T>, start: usize, end: usize) -> DomainResult<()> {
    if start > end {
        return Err(DomainError::IndexOutOfRange {
            op: "cut",
            index: start,
            bound: end,
        });
    }
    if end > seq.len() {
        return Err(DomainError::IndexOutOfRange {
            op: "cut",
            index: end,
            bound: seq.len(),
        });
    }
    seq.drain(start..end);
    Ok(())
}

/// Removes the element at `index`, shifting the rest left by one.
///
/// Returns the removed element.
///
/// # Errors
/// `IndexOutOfRange` if `index >= seq.len()`.
pub fn delete<T>(seq: &mut Vec<T>, index: usize) -> DomainResult<T> {
    if index >= seq.len() {
        return Err(DomainError::IndexOutOfRange {
            op: "delete",
            index,
            bound: seq.len(),
        });
    }
    Ok(seq.remove(index))
}

/// Inserts `element` at `index`, shifting elements at and after `index`
/// right by one. `index == seq.len()` appends.
///
/// # Errors
/// `IndexOutOfRange` if `index > seq.len()`.
pub fn insert<T>(seq: &mut Vec<T>, element: T, index: usize) -> DomainResult<()> {
    if index > seq.len() {
        return Err(DomainError::IndexOutOfRange {
            op: "insert",
            index,
            bound: seq.len(),
        });
    }
    seq.insert(index, element);
    Ok(())
}
