#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! GEXF export adapter for city graphs.
//!
//! Serializes a [`CityGraph`] to a GEXF 1.2 document for graph-interchange
//! tooling. Nodes carry their classification as an attribute and a
//! per-classification `viz` color; edges carry their blockage flag. The
//! adapter produces a string only; writing it anywhere is the caller's job.

use std::fmt::{self, Write as _};

use gridtown_core::{CityGraph, CityGrid, Classification, Coordinate};

/// Grids with more cells than this export nodes without coordinate labels,
/// keeping large documents legible in graph viewers.
const LABEL_SUPPRESSION_THRESHOLD: u64 = 100;

/// Serializes the graph built from `grid` into a GEXF 1.2 document.
///
/// Node labels repeat the cell coordinates and are suppressed when the grid
/// holds more than 100 cells.
#[must_use]
pub fn export(grid: &CityGrid, graph: &CityGraph) -> String {
    let mut document = String::new();
    write_document(&mut document, grid, graph).expect("writing to a string never fails");
    document
}

fn write_document(out: &mut String, grid: &CityGrid, graph: &CityGraph) -> fmt::Result {
    let with_labels = grid.cell_count() <= LABEL_SUPPRESSION_THRESHOLD;

    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        out,
        r#"<gexf xmlns="http://www.gexf.net/1.2draft" xmlns:viz="http://www.gexf.net/1.2draft/viz" version="1.2">"#
    )?;
    writeln!(out, r#"  <graph defaultedgetype="undirected">"#)?;
    writeln!(out, r#"    <attributes class="node">"#)?;
    writeln!(
        out,
        r#"      <attribute id="0" title="classification" type="string"/>"#
    )?;
    writeln!(out, r#"    </attributes>"#)?;
    writeln!(out, r#"    <attributes class="edge">"#)?;
    writeln!(
        out,
        r#"      <attribute id="0" title="blocked" type="boolean"/>"#
    )?;
    writeln!(out, r#"    </attributes>"#)?;

    writeln!(out, r#"    <nodes>"#)?;
    for cell in graph.nodes() {
        let position = cell.position();
        let label = if with_labels {
            format!("({}, {})", position.row(), position.column())
        } else {
            String::new()
        };
        let (red, green, blue) = color(cell.classification());

        writeln!(
            out,
            r#"      <node id="{}" label="{label}">"#,
            node_id(position)
        )?;
        writeln!(
            out,
            r#"        <attvalues><attvalue for="0" value="{}"/></attvalues>"#,
            cell.classification()
        )?;
        writeln!(out, r#"        <viz:color r="{red}" g="{green}" b="{blue}"/>"#)?;
        writeln!(out, r#"      </node>"#)?;
    }
    writeln!(out, r#"    </nodes>"#)?;

    writeln!(out, r#"    <edges>"#)?;
    for (index, edge) in graph.edges().enumerate() {
        writeln!(
            out,
            r#"      <edge id="{index}" source="{}" target="{}">"#,
            node_id(edge.source()),
            node_id(edge.destination())
        )?;
        writeln!(
            out,
            r#"        <attvalues><attvalue for="0" value="{}"/></attvalues>"#,
            edge.blocked()
        )?;
        writeln!(out, r#"      </edge>"#)?;
    }
    writeln!(out, r#"    </edges>"#)?;

    writeln!(out, r#"  </graph>"#)?;
    writeln!(out, r#"</gexf>"#)
}

fn node_id(position: Coordinate) -> String {
    format!("{}-{}", position.row(), position.column())
}

/// Styling palette: walkway green, residence yellow, business blue,
/// blockage red.
const fn color(classification: Classification) -> (u8, u8, u8) {
    match classification {
        Classification::Walkway => (0, 128, 0),
        Classification::Residence => (255, 255, 0),
        Classification::Business => (0, 0, 255),
        Classification::Blockage => (255, 0, 0),
    }
}
