//! Turns raw input text into lines and grids.

use tracing::{debug, instrument};

use crate::application::convert::str_to_int;
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::Grid;

/// Options for splitting a line into cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOptions<'a> {
    /// Cell separator; empty splits a line into single characters (never trimmed)
    pub delimiter: &'a str,
    /// Trim whitespace around each cell
    pub trim_cells: bool,
}

impl<'a> SplitOptions<'a> {
    pub fn new(delimiter: &'a str) -> Self {
        Self {
            delimiter,
            trim_cells: false,
        }
    }

    pub fn trimmed(mut self, trim_cells: bool) -> Self {
        self.trim_cells = trim_cells;
        self
    }

    /// Splits one line into owned cells.
    pub fn split(&self, line: &str) -> Vec<String> {
        if self.delimiter.is_empty() {
            return line.chars().map(String::from).collect();
        }
        line.split(self.delimiter)
            .map(|c| if self.trim_cells { c.trim() } else { c })
            .map(str::to_string)
            .collect()
    }
}

/// One entry per line, line endings (`\n` or `\r\n`) removed.
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// One row per line, split with `options`.
#[instrument(level = "debug", skip(text))]
pub fn parse_grid(text: &str, options: &SplitOptions<'_>) -> Grid<String> {
    let grid: Grid<String> = text.lines().map(|line| options.split(line)).collect();
    debug!(rows = grid.row_count(), columns = grid.column_count(), "parsed grid");
    grid
}

/// Like [`parse_grid`], but every cell must be a decimal integer.
///
/// Errors name the 1-based line and column of the offending cell.
#[instrument(level = "debug", skip(text))]
pub fn parse_number_grid(text: &str, options: &SplitOptions<'_>) -> ApplicationResult<Grid<i64>> {
    let mut rows = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let row = options
            .split(line)
            .into_iter()
            .enumerate()
            .map(|(col, cell)| {
                str_to_int(&cell).map_err(|e| match e {
                    ApplicationError::InvalidNumber { value, source } => {
                        ApplicationError::InvalidCell {
                            line: line_no + 1,
                            column: col + 1,
                            value,
                            source,
                        }
                    }
                    other => other,
                })
            })
            .collect::<ApplicationResult<Vec<i64>>>()?;
        rows.push(row);
    }
    Ok(Grid::new(rows))
}
