//! Checked integer helpers.

use crate::application::{ApplicationError, ApplicationResult};

/// Absolute value; `i64::MIN` has no positive counterpart and overflows.
pub fn abs(x: i64) -> ApplicationResult<i64> {
    x.checked_abs().ok_or_else(|| ApplicationError::Overflow {
        operation: format!("abs({x})"),
    })
}

/// `n` to the power `m`; `pow(n, 0) == 1` for every `n`.
pub fn pow(n: i64, m: u32) -> ApplicationResult<i64> {
    n.checked_pow(m).ok_or_else(|| ApplicationError::Overflow {
        operation: format!("pow({n}, {m})"),
    })
}
