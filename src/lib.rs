//! Generic container toolkit for puzzle input.
//!
//! - [`domain`]: sequence splicing, [`Stack`], [`Grid`], sibling trees
//! - [`application`]: string/integer conversion and text parsing
//! - [`infrastructure`]: reading input files
//! - [`config`], [`cli`]: the `aockit` binary

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{Coordinate, DomainError, Grid, Stack, TreeNode};
