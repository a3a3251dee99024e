#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure grid-to-graph construction system.
//!
//! Consumes an immutable [`CityGrid`] and produces the [`CityGraph`] a
//! traffic simulation would run on: one node per grid position and one
//! undirected edge per in-bounds 4-neighbor pair, each edge tagged with the
//! blockage flag derived from its endpoint cells.

use gridtown_core::{CityGraph, CityGrid, Coordinate};

/// Builds the adjacency graph for the provided grid.
///
/// For a fixed grid this is a pure function: two builds yield graphs with
/// identical node and edge sets. Neighbors never wrap around the grid edges
/// and diagonals are never connected, so a rectangular R x C grid produces
/// exactly R x C nodes and R x (C - 1) + C x (R - 1) edges.
#[must_use]
pub fn build(grid: &CityGrid) -> CityGraph {
    let mut graph = CityGraph::new();

    for cell in grid.cells() {
        graph.insert_node(cell.clone());
    }

    for row in 0..grid.rows() {
        for column in 0..grid.columns() {
            let position = Coordinate::from_indices(row, column);
            for neighbor in neighbors(position, grid.columns(), grid.rows()) {
                graph.connect(position, neighbor);
            }
        }
    }

    graph
}

fn neighbors(position: Coordinate, columns: u32, rows: u32) -> impl Iterator<Item = Coordinate> {
    let mut candidates = [None; 4];
    let mut count = 0;

    if let Some(row) = position.row().checked_sub(1) {
        candidates[count] = Some(Coordinate::from_indices(row, position.column()));
        count += 1;
    }

    if let Some(row) = position.row().checked_add(1) {
        if row < rows {
            candidates[count] = Some(Coordinate::from_indices(row, position.column()));
            count += 1;
        }
    }

    if let Some(column) = position.column().checked_sub(1) {
        candidates[count] = Some(Coordinate::from_indices(position.row(), column));
        count += 1;
    }

    if let Some(column) = position.column().checked_add(1) {
        if column < columns {
            candidates[count] = Some(Coordinate::from_indices(position.row(), column));
            count += 1;
        }
    }

    candidates.into_iter().take(count).flatten()
}
