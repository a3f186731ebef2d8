//! Reads puzzle input files into lines and grids.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::parse::{parse_grid, parse_lines, parse_number_grid, SplitOptions};
use crate::domain::Grid;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};
use crate::infrastructure::{InfraError, InfraResult};

/// Reads input through a [`FileSystem`].
#[derive(Clone)]
pub struct InputReader {
    fs: Arc<dyn FileSystem>,
}

impl Default for InputReader {
    fn default() -> Self {
        Self::new(Arc::new(RealFileSystem))
    }
}

impl std::fmt::Debug for InputReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputReader").finish_non_exhaustive()
    }
}

impl InputReader {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Opens `path` for reading.
    pub fn open_file(&self, path: &Path) -> InfraResult<File> {
        self.fs
            .open(path)
            .map_err(|e| InfraError::io(format!("open {}", path.display()), e))
    }

    /// First line of the file without its line ending.
    #[instrument(level = "debug", skip(self))]
    pub fn read_single_line(&self, path: &Path) -> InfraResult<String> {
        let mut reader = BufReader::new(self.open_file(path)?);
        let mut line = String::new();
        let read = reader
            .read_line(&mut line)
            .map_err(|e| InfraError::io(format!("read {}", path.display()), e))?;
        if read == 0 {
            return Err(InfraError::EmptyInput(path.to_path_buf()));
        }
        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// All lines of the file.
    #[instrument(level = "debug", skip(self))]
    pub fn read_lines(&self, path: &Path) -> InfraResult<Vec<String>> {
        let lines = parse_lines(&self.read_text(path)?);
        debug!(count = lines.len(), "read lines");
        Ok(lines)
    }

    /// Grid of string cells, one row per line.
    #[instrument(level = "debug", skip(self))]
    pub fn read_grid(&self, path: &Path, options: &SplitOptions<'_>) -> InfraResult<Grid<String>> {
        Ok(parse_grid(&self.read_text(path)?, options))
    }

    /// Grid of integer cells, one row per line.
    #[instrument(level = "debug", skip(self))]
    pub fn read_number_grid(
        &self,
        path: &Path,
        options: &SplitOptions<'_>,
    ) -> InfraResult<Grid<i64>> {
        Ok(parse_number_grid(&self.read_text(path)?, options)?)
    }

    fn read_text(&self, path: &Path) -> InfraResult<String> {
        self.fs
            .read_to_string(path)
            .map_err(|e| InfraError::io(format!("read {}", path.display()), e))
    }
}
