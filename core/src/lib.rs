#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Gridtown workspace.
//!
//! This crate defines the data model that connects the pure systems and the
//! presentation adapters: validated grid [`Coordinate`] values, classified
//! [`Cell`] records, the rectangular [`CityGrid`], and the [`CityGraph`]
//! adjacency structure derived from it. Systems produce and consume these
//! types; adapters only read them. Nothing in this crate performs I/O.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod graph;
mod grid;

pub use graph::{CityGraph, GraphEdge};
pub use grid::CityGrid;

/// Errors surfaced by grid and coordinate construction or access.
///
/// Construction either fully succeeds or fails with one of these values; no
/// partially initialised grid or coordinate is ever produced.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate component was negative.
    #[error("coordinate components must be non-negative, got ({row}, {column})")]
    NegativeCoordinate {
        /// Row component supplied by the caller.
        row: i32,
        /// Column component supplied by the caller.
        column: i32,
    },
    /// The supplied matrix contained no rows, or an empty first row.
    #[error("grid must contain at least one row and one column of cells")]
    EmptyGrid,
    /// A row's length disagreed with the first row's length.
    #[error("grid row {row} holds {actual} cells but the first row holds {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Cell count established by the first row.
        expected: usize,
        /// Cell count found in the offending row.
        actual: usize,
    },
    /// A cell lookup fell outside the grid bounds.
    #[error("cell ({row}, {column}) lies outside the {rows}x{columns} grid")]
    OutOfRange {
        /// Requested row index.
        row: u32,
        /// Requested column index.
        column: u32,
        /// Number of rows in the grid.
        rows: u32,
        /// Number of columns in the grid.
        columns: u32,
    },
}

/// Location of a single grid cell expressed as row and column indices.
///
/// Coordinates order row-major, so iterating an ordered collection keyed by
/// `Coordinate` walks the grid one row at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    row: u32,
    column: u32,
}

impl Coordinate {
    /// Creates a coordinate after validating that both components are
    /// non-negative.
    pub fn new(row: i32, column: i32) -> Result<Self, GridError> {
        if row < 0 || column < 0 {
            return Err(GridError::NegativeCoordinate { row, column });
        }

        Ok(Self {
            row: row as u32,
            column: column as u32,
        })
    }

    /// Creates a coordinate from unsigned indices, which cannot fail.
    #[must_use]
    pub const fn from_indices(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Closed set of classifications a city cell can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Classification {
    /// A dwelling where simulated agents live.
    Residence,
    /// A commercial destination agents travel to.
    Business,
    /// An impassable obstruction; edges touching it are blocked.
    Blockage,
    /// Open ground agents traverse freely.
    Walkway,
}

impl Classification {
    /// Lower-case label used by exporters and diagnostics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Residence => "residence",
            Self::Business => "business",
            Self::Blockage => "blockage",
            Self::Walkway => "walkway",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One grid position together with its classification and an optional
/// free-text description.
///
/// Cells are immutable once created; the grid never rewrites a cell in
/// place, and the graph invariant on blocked edges relies on that.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    position: Coordinate,
    classification: Classification,
    description: String,
}

impl Cell {
    /// Creates a cell with an empty description.
    #[must_use]
    pub const fn new(position: Coordinate, classification: Classification) -> Self {
        Self {
            position,
            classification,
            description: String::new(),
        }
    }

    /// Creates a cell carrying a free-text description.
    #[must_use]
    pub fn with_description(
        position: Coordinate,
        classification: Classification,
        description: impl Into<String>,
    ) -> Self {
        Self {
            position,
            classification,
            description: description.into(),
        }
    }

    /// Grid position occupied by the cell.
    #[must_use]
    pub const fn position(&self) -> Coordinate {
        self.position
    }

    /// Classification tag assigned to the cell.
    #[must_use]
    pub const fn classification(&self) -> Classification {
        self.classification
    }

    /// Free-text annotation attached to the cell, empty by default.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Reports whether the cell is classified as a residence.
    #[must_use]
    pub fn is_residence(&self) -> bool {
        self.classification == Classification::Residence
    }

    /// Reports whether the cell is classified as a business.
    #[must_use]
    pub fn is_business(&self) -> bool {
        self.classification == Classification::Business
    }

    /// Reports whether the cell is classified as a blockage.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.classification == Classification::Blockage
    }

    /// Reports whether the cell is classified as a walkway.
    #[must_use]
    pub fn is_walkway(&self) -> bool {
        self.classification == Classification::Walkway
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.classification, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Classification, Coordinate, GridError};
    use serde::{de::DeserializeOwned, Serialize};

    #[test]
    fn coordinate_accepts_non_negative_components() {
        let coordinate = Coordinate::new(3, 7).expect("valid coordinate");
        assert_eq!(coordinate.row(), 3);
        assert_eq!(coordinate.column(), 7);
    }

    #[test]
    fn coordinate_accepts_zero_components() {
        let coordinate = Coordinate::new(0, 0).expect("origin is valid");
        assert_eq!(coordinate, Coordinate::from_indices(0, 0));
    }

    #[test]
    fn coordinate_rejects_negative_row() {
        assert_eq!(
            Coordinate::new(-1, 4),
            Err(GridError::NegativeCoordinate { row: -1, column: 4 }),
        );
    }

    #[test]
    fn coordinate_rejects_negative_column() {
        assert_eq!(
            Coordinate::new(2, -9),
            Err(GridError::NegativeCoordinate { row: 2, column: -9 }),
        );
    }

    #[test]
    fn coordinates_order_row_major() {
        let earlier = Coordinate::from_indices(0, 5);
        let later = Coordinate::from_indices(1, 0);
        assert!(earlier < later);
    }

    #[test]
    fn cell_predicates_match_classification() {
        let position = Coordinate::from_indices(1, 1);
        let cases = [
            (Classification::Residence, [true, false, false, false]),
            (Classification::Business, [false, true, false, false]),
            (Classification::Blockage, [false, false, true, false]),
            (Classification::Walkway, [false, false, false, true]),
        ];

        for (classification, expected) in cases {
            let cell = Cell::new(position, classification);
            let actual = [
                cell.is_residence(),
                cell.is_business(),
                cell.is_blocked(),
                cell.is_walkway(),
            ];
            assert_eq!(actual, expected, "predicates for {classification}");
        }
    }

    #[test]
    fn cell_description_defaults_to_empty() {
        let cell = Cell::new(Coordinate::from_indices(0, 0), Classification::Walkway);
        assert_eq!(cell.description(), "");
    }

    #[test]
    fn cell_carries_explicit_description() {
        let cell = Cell::with_description(
            Coordinate::from_indices(2, 3),
            Classification::Business,
            "corner store",
        );
        assert_eq!(cell.description(), "corner store");
    }

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn coordinate_round_trips_through_bincode() {
        assert_round_trip(&Coordinate::from_indices(12, 34));
    }

    #[test]
    fn classification_round_trips_through_bincode() {
        assert_round_trip(&Classification::Blockage);
    }

    #[test]
    fn cell_round_trips_through_bincode() {
        let cell = Cell::with_description(
            Coordinate::from_indices(4, 2),
            Classification::Residence,
            "row house",
        );
        assert_round_trip(&cell);
    }

    #[test]
    fn classification_labels_are_lowercase() {
        assert_eq!(Classification::Walkway.as_str(), "walkway");
        assert_eq!(Classification::Residence.as_str(), "residence");
        assert_eq!(Classification::Business.as_str(), "business");
        assert_eq!(Classification::Blockage.as_str(), "blockage");
    }
}
