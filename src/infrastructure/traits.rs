//! I/O boundary traits for testability
//!
//! Input readers go through [`FileSystem`] so they can be exercised against
//! in-memory fixtures as well as real files.

use std::fs::File;
use std::io;
use std::path::Path;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Open a file for reading.
    fn open(&self, path: &Path) -> io::Result<File>;

    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn open(&self, path: &Path) -> io::Result<File> {
        File::open(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}
