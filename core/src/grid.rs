//! Rectangular city grid storage.

use std::num::NonZeroU32;

use crate::{Cell, Coordinate, GridError};

/// Immutable rectangular matrix of [`Cell`] values.
///
/// The grid is the single source of truth for both rendering and graph
/// construction. Cells are stored densely in row-major order alongside the
/// row and column counts. Construction validates rectangularity up front;
/// once a grid exists its invariants hold for its whole lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CityGrid {
    rows: u32,
    columns: u32,
    cells: Vec<Cell>,
}

impl CityGrid {
    /// Builds a grid from explicit rows of cells.
    ///
    /// Fails with [`GridError::EmptyGrid`] when the matrix has no rows or an
    /// empty first row, and with [`GridError::RaggedRow`] when any row's
    /// length disagrees with the first row's.
    pub fn from_rows(matrix: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let Some(first) = matrix.first() else {
            return Err(GridError::EmptyGrid);
        };

        let expected = first.len();
        if expected == 0 {
            return Err(GridError::EmptyGrid);
        }

        for (row, cells) in matrix.iter().enumerate() {
            if cells.len() != expected {
                return Err(GridError::RaggedRow {
                    row,
                    expected,
                    actual: cells.len(),
                });
            }
        }

        let rows = u32::try_from(matrix.len()).expect("row count fits u32");
        let columns = u32::try_from(expected).expect("column count fits u32");
        let mut cells = Vec::with_capacity(matrix.len() * expected);
        for row in matrix {
            cells.extend(row);
        }

        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Builds a grid by invoking `cell` for every position in row-major
    /// order.
    ///
    /// The non-zero dimensions make the rectangularity invariant hold by
    /// construction, so generators can produce grids without a redundant
    /// validation pass.
    #[must_use]
    pub fn from_fn<F>(rows: NonZeroU32, columns: NonZeroU32, mut cell: F) -> Self
    where
        F: FnMut(Coordinate) -> Cell,
    {
        let capacity = rows.get() as usize * columns.get() as usize;
        let mut cells = Vec::with_capacity(capacity);
        for row in 0..rows.get() {
            for column in 0..columns.get() {
                cells.push(cell(Coordinate::from_indices(row, column)));
            }
        }

        Self {
            rows: rows.get(),
            columns: columns.get(),
            cells,
        }
    }

    /// Number of rows contained in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns contained in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Total number of cells contained in the grid.
    #[must_use]
    pub const fn cell_count(&self) -> u64 {
        self.rows as u64 * self.columns as u64
    }

    /// Retrieves the cell at the provided indices.
    ///
    /// Fails with [`GridError::OutOfRange`] when either index reaches past
    /// the grid bounds.
    pub fn cell_at(&self, row: u32, column: u32) -> Result<&Cell, GridError> {
        self.index(row, column)
            .and_then(|index| self.cells.get(index))
            .ok_or(GridError::OutOfRange {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            })
    }

    /// Dense row-major view of every cell in the grid.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn index(&self, row: u32, column: u32) -> Option<usize> {
        if row >= self.rows || column >= self.columns {
            return None;
        }

        let row = usize::try_from(row).ok()?;
        let column = usize::try_from(column).ok()?;
        let width = usize::try_from(self.columns).ok()?;
        row.checked_mul(width)?.checked_add(column)
    }
}
