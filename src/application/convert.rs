//! String / integer conversions.

use crate::application::{ApplicationError, ApplicationResult};

/// Parses a decimal integer with an optional leading sign.
pub fn str_to_int(s: &str) -> ApplicationResult<i64> {
    s.parse::<i64>().map_err(|source| ApplicationError::InvalidNumber {
        value: s.to_string(),
        source,
    })
}

pub fn int_to_str(num: i64) -> String {
    num.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_surrounding_whitespace_when_parsing_then_rejected() {
        assert!(str_to_int(" 1").is_err());
        assert!(str_to_int("").is_err());
    }
}
