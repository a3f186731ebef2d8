//! Application layer: conversions and text parsing
//!
//! This layer turns raw strings into domain containers; it performs no I/O.

pub mod convert;
pub mod error;
pub mod error_ext;
pub mod math;
pub mod parse;

pub use convert::{int_to_str, str_to_int};
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use math::{abs, pow};
pub use parse::{parse_grid, parse_lines, parse_number_grid, SplitOptions};
