//! Adjacency graph over city grid cells.

use std::collections::BTreeMap;

use crate::{Cell, Coordinate};

/// Undirected adjacency graph over the cells of a [`CityGrid`].
///
/// Nodes are stored by value in an ordered map keyed on [`Coordinate`], and
/// edges as canonically ordered coordinate pairs mapped to their `blocked`
/// attribute. Both collections iterate in row-major coordinate order, so two
/// graphs built from the same grid compare equal and enumerate identically.
///
/// The graph is built once from an existing grid and never updated in place;
/// if the grid changes, rebuild the graph from scratch.
///
/// [`CityGrid`]: crate::CityGrid
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CityGraph {
    nodes: BTreeMap<Coordinate, Cell>,
    edges: BTreeMap<(Coordinate, Coordinate), bool>,
}

/// Undirected edge between two grid positions, tagged with the derived
/// blockage flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphEdge {
    source: Coordinate,
    destination: Coordinate,
    blocked: bool,
}

impl GraphEdge {
    /// Lesser endpoint of the edge in row-major coordinate order.
    #[must_use]
    pub const fn source(&self) -> Coordinate {
        self.source
    }

    /// Greater endpoint of the edge in row-major coordinate order.
    #[must_use]
    pub const fn destination(&self) -> Coordinate {
        self.destination
    }

    /// Whether either endpoint cell is classified as a blockage.
    #[must_use]
    pub const fn blocked(&self) -> bool {
        self.blocked
    }
}

impl CityGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node for the provided cell, keyed by its position.
    ///
    /// Re-inserting a position is a no-op; the first cell wins.
    pub fn insert_node(&mut self, cell: Cell) {
        let _ = self.nodes.entry(cell.position()).or_insert(cell);
    }

    /// Connects two existing nodes with an undirected edge.
    ///
    /// The edge's `blocked` attribute is derived from the endpoint cells, so
    /// it always equals the OR of their blockage predicates. The pair is
    /// stored canonically (lesser endpoint first); connecting the same pair
    /// from either direction is a no-op after the first insertion. Self
    /// loops and endpoints without a node are ignored.
    pub fn connect(&mut self, a: Coordinate, b: Coordinate) {
        if a == b {
            return;
        }

        let (Some(source), Some(destination)) = (self.nodes.get(&a), self.nodes.get(&b))
        else {
            return;
        };

        let blocked = source.is_blocked() || destination.is_blocked();
        let key = if a < b { (a, b) } else { (b, a) };
        let _ = self.edges.entry(key).or_insert(blocked);
    }

    /// Number of nodes held by the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges held by the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Retrieves the cell stored for the provided position, if any.
    #[must_use]
    pub fn node(&self, position: Coordinate) -> Option<&Cell> {
        self.nodes.get(&position)
    }

    /// Iterates the node cells in row-major coordinate order.
    pub fn nodes(&self) -> impl Iterator<Item = &Cell> {
        self.nodes.values()
    }

    /// Iterates the edges in canonical endpoint order.
    pub fn edges(&self) -> impl Iterator<Item = GraphEdge> + '_ {
        self.edges
            .iter()
            .map(|(&(source, destination), &blocked)| GraphEdge {
                source,
                destination,
                blocked,
            })
    }

    /// Retrieves the `blocked` attribute of the edge between two positions,
    /// in either endpoint order, if the edge exists.
    #[must_use]
    pub fn blocked(&self, a: Coordinate, b: Coordinate) -> Option<bool> {
        let key = if a < b { (a, b) } else { (b, a) };
        self.edges.get(&key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Classification;

    fn cell(row: u32, column: u32, classification: Classification) -> Cell {
        Cell::new(Coordinate::from_indices(row, column), classification)
    }

    #[test]
    fn connect_derives_blocked_from_endpoints() {
        let mut graph = CityGraph::new();
        graph.insert_node(cell(0, 0, Classification::Walkway));
        graph.insert_node(cell(0, 1, Classification::Blockage));
        graph.connect(
            Coordinate::from_indices(0, 0),
            Coordinate::from_indices(0, 1),
        );

        assert_eq!(
            graph.blocked(
                Coordinate::from_indices(0, 0),
                Coordinate::from_indices(0, 1),
            ),
            Some(true),
        );
    }

    #[test]
    fn connect_dedupes_reversed_insertions() {
        let mut graph = CityGraph::new();
        graph.insert_node(cell(0, 0, Classification::Walkway));
        graph.insert_node(cell(0, 1, Classification::Residence));

        let a = Coordinate::from_indices(0, 0);
        let b = Coordinate::from_indices(0, 1);
        graph.connect(a, b);
        graph.connect(b, a);

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.blocked(a, b), Some(false));
        assert_eq!(graph.blocked(b, a), Some(false));
    }

    #[test]
    fn connect_ignores_missing_endpoints_and_self_loops() {
        let mut graph = CityGraph::new();
        graph.insert_node(cell(0, 0, Classification::Walkway));

        let known = Coordinate::from_indices(0, 0);
        let unknown = Coordinate::from_indices(5, 5);
        graph.connect(known, unknown);
        graph.connect(known, known);

        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn nodes_iterate_in_row_major_order() {
        let mut graph = CityGraph::new();
        graph.insert_node(cell(1, 0, Classification::Business));
        graph.insert_node(cell(0, 1, Classification::Walkway));
        graph.insert_node(cell(0, 0, Classification::Residence));

        let positions: Vec<Coordinate> =
            graph.nodes().map(Cell::position).collect();
        assert_eq!(
            positions,
            vec![
                Coordinate::from_indices(0, 0),
                Coordinate::from_indices(0, 1),
                Coordinate::from_indices(1, 0),
            ],
        );
    }

    #[test]
    fn missing_edge_lookup_returns_none() {
        let graph = CityGraph::new();
        assert_eq!(
            graph.blocked(
                Coordinate::from_indices(0, 0),
                Coordinate::from_indices(0, 1),
            ),
            None,
        );
    }
}
