//! Rectangular grids addressed by `(x, y)` coordinates.

use std::fmt;

use itertools::Itertools;

/// A cell address: `x` is the column, `y` is the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Ordered rows of cells. Bounds checks assume every row has row 0's length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: Vec<Vec<T>>,
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T> Grid<T> {
    pub fn new(rows: Vec<Vec<T>>) -> Self {
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of row 0, or 0 for a grid without rows.
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True if every row has the same length as row 0.
    pub fn is_rectangular(&self) -> bool {
        self.rows.iter().map(Vec::len).all_equal()
    }

    /// True iff `0 <= y < row_count` and `0 <= x < column_count`.
    ///
    /// Row 0 and column 0 are valid. A grid without rows contains no cells.
    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        index_in(coord.y, self.row_count()) && index_in(coord.x, self.column_count())
    }

    pub fn get(&self, coord: Coordinate) -> Option<&T> {
        let (x, y) = self.indices(coord)?;
        self.rows.get(y)?.get(x)
    }

    pub fn get_mut(&mut self, coord: Coordinate) -> Option<&mut T> {
        let (x, y) = self.indices(coord)?;
        self.rows.get_mut(y)?.get_mut(x)
    }

    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows
    }

    fn indices(&self, coord: Coordinate) -> Option<(usize, usize)> {
        if !self.in_bounds(coord) {
            return None;
        }
        Some((usize::try_from(coord.x).ok()?, usize::try_from(coord.y).ok()?))
    }
}

impl<T: fmt::Display> Grid<T> {
    /// Renders rows on separate lines with cells joined by `sep`.
    pub fn render(&self, sep: &str) -> String {
        self.rows.iter().map(|row| row.iter().join(sep)).join("\n")
    }
}

impl<T> From<Vec<Vec<T>>> for Grid<T> {
    fn from(rows: Vec<Vec<T>>) -> Self {
        Self { rows }
    }
}

impl<T> FromIterator<Vec<T>> for Grid<T> {
    fn from_iter<I: IntoIterator<Item = Vec<T>>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

/// Free-function form of [`Grid::in_bounds`].
pub fn in_bounds<T>(grid: &Grid<T>, coord: Coordinate) -> bool {
    grid.in_bounds(coord)
}

fn index_in(value: i64, len: usize) -> bool {
    value >= 0 && usize::try_from(value).is_ok_and(|v| v < len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_ragged_grid_when_get_beyond_short_row_then_none() {
        let grid = Grid::new(vec![vec![1, 2, 3], vec![4]]);
        assert!(!grid.is_rectangular());
        assert!(grid.in_bounds(Coordinate::new(2, 1)));
        assert_eq!(grid.get(Coordinate::new(2, 1)), None);
        assert_eq!(grid.get(Coordinate::new(0, 1)), Some(&4));
    }

    #[test]
    fn given_grid_when_render_then_rows_joined() {
        let grid = Grid::new(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(grid.render(","), "1,2\n3,4");
    }
}
