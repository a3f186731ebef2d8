//! Domain layer: generic containers
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod display;
pub mod error;
pub mod grid;
pub mod sequence;
pub mod stack;
pub mod tree;

pub use arena::{ArenaNode, TreeArena};
pub use display::TreeDisplay;
pub use error::{DomainError, DomainResult};
pub use grid::{in_bounds, Coordinate, Grid};
pub use sequence::{cut, delete, insert};
pub use stack::Stack;
pub use tree::{BinaryNode, TreeNode};
