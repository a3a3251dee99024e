#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Textual city grid renderer.
//!
//! Presentation adapter that depicts a [`CityGrid`] as lane-framed rows of
//! single-character markers. Walkways render blank so the streets read as
//! open space; the remaining classifications each get a distinguishing mark.

use gridtown_core::{CityGrid, Classification};

/// Renders the grid as one lane-framed text line per row.
///
/// Walkway cells are blank, blockages are `*`, businesses are `B`, and
/// residences are `R`.
#[must_use]
pub fn render(grid: &CityGrid) -> String {
    let columns = grid.columns() as usize;
    let mut city = String::with_capacity((columns * 4 + 3) * grid.rows() as usize);

    for row in grid.cells().chunks(columns) {
        city.push_str("| ");
        for cell in row {
            city.push_str(marker(cell.classification()));
        }
        city.push('\n');
    }

    city
}

const fn marker(classification: Classification) -> &'static str {
    match classification {
        Classification::Walkway => "  | ",
        Classification::Blockage => "* | ",
        Classification::Business => "B | ",
        Classification::Residence => "R | ",
    }
}
