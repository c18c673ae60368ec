//! The square being searched.

use std::fmt;

use thiserror::Error;

/// Errors from building a [`Grid`] out of nested rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid must have at least one row")]
    Empty,

    #[error("row {row} has {len} values, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
}

/// An N×N matrix of integers, stored row-major.
///
/// The `Display` form is the nested brace list printed for a solved square:
///
/// ```
/// use magic_search::Grid;
///
/// let grid = Grid::from_rows(vec![vec![2, 7, 6], vec![9, 5, 1], vec![4, 3, 8]]).unwrap();
/// assert_eq!(grid.to_string(), "{2, 7, 6},\n{9, 5, 1},\n{4, 3, 8}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    size: usize,
    cells: Vec<i64>,
}

impl Grid {
    /// Creates a `size * size` grid of zeros.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Builds a grid from row-major values. `cells.len()` must be `size * size`.
    pub(crate) fn from_row_major(size: usize, cells: Vec<i64>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Builds a grid from nested rows, rejecting anything that is not square.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    len: values.len(),
                    size,
                });
            }
            cells.extend(values);
        }
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i64 {
        assert!(row < self.size && col < self.size, "cell out of range");
        self.cells[row * self.size + col]
    }

    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: i64) {
        assert!(row < self.size && col < self.size, "cell out of range");
        self.cells[row * self.size + col] = value;
    }

    /// All cells in row-major order.
    pub fn values(&self) -> &[i64] {
        &self.cells
    }

    /// Iterates over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[i64]> {
        // chunks(0) panics; an empty grid has no rows anyway
        self.cells.chunks(self.size.max(1))
    }

    /// Whether `value` occurs in any cell other than `(row, col)`.
    pub fn contains_except(&self, value: i64, row: usize, col: usize) -> bool {
        let skip = row * self.size + col;
        self.cells
            .iter()
            .enumerate()
            .any(|(idx, &v)| idx != skip && v == value)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_str(",\n")?;
            }
            f.write_str("{")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{value}")?;
            }
            f.write_str("}")?;
        }
        Ok(())
    }
}
