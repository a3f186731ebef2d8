//! Infrastructure layer: file input
//!
//! This layer implements I/O boundary traits and reads input files.

pub mod error;
pub mod input;
pub mod traits;

pub use error::{InfraError, InfraResult};
pub use input::InputReader;
pub use traits::{FileSystem, RealFileSystem};
