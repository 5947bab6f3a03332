//! Output maps: rectangular grids of terrain symbols
//!
//! The text form is one line per row, each line holding exactly one symbol per
//! column and terminated by a newline. Nothing else is written.

use crate::io::error::{MapError, Result};
use ndarray::Array2;

/// Grid of terrain symbols produced by extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputMap {
    cells: Array2<char>,
}

impl OutputMap {
    /// Wrap an existing symbol array (indexed by `row`, `col`)
    pub const fn from_array(cells: Array2<char>) -> Self {
        Self { cells }
    }

    /// A map with no rows
    pub fn empty() -> Self {
        Self {
            cells: Array2::from_elem((0, 0), ' '),
        }
    }

    /// Build a map from rows of symbols
    ///
    /// # Errors
    ///
    /// Returns an error if the rows do not all have the same length
    pub fn from_rows(rows: &[Vec<char>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len() * cols);

        for (index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MapError::MalformedMap {
                    line: index + 1,
                    reason: format!("expected {cols} symbols, found {}", row.len()),
                });
            }
            cells.extend_from_slice(row);
        }

        let cells = Array2::from_shape_vec((rows.len(), cols), cells).map_err(|e| {
            MapError::MalformedMap {
                line: 0,
                reason: e.to_string(),
            }
        })?;
        Ok(Self { cells })
    }

    /// Parse the line-per-row text form
    ///
    /// Trailing whitespace on each line and trailing blank lines are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the lines do not all have the same length
    pub fn from_text(text: &str) -> Result<Self> {
        let mut lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }

        let rows: Vec<Vec<char>> = lines.iter().map(|line| line.chars().collect()).collect();
        Self::from_rows(&rows)
    }

    /// Render the line-per-row text form
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.rows() * (self.cols() + 1));
        for row in self.cells.rows() {
            text.extend(row.iter());
            text.push('\n');
        }
        text
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Whether the map has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Symbol at `(row, col)`, if inside the map
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get([row, col]).copied()
    }

    /// One row as a string
    pub fn row_string(&self, row: usize) -> Option<String> {
        (row < self.rows()).then(|| self.cells.row(row).iter().collect())
    }

    /// Underlying symbol array
    pub const fn cells(&self) -> &Array2<char> {
        &self.cells
    }
}
