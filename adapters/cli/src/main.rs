#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that generates a city and reports its graph.

use std::num::NonZeroU32;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generates a random city grid, derives its adjacency graph, and prints or
/// exports the result.
#[derive(Debug, Parser)]
#[command(name = "gridtown", version, about)]
struct Args {
    /// Number of rows in the generated city grid.
    #[arg(long, default_value = "10")]
    rows: NonZeroU32,

    /// Number of columns in the generated city grid.
    #[arg(long, default_value = "10")]
    columns: NonZeroU32,

    /// Seed for the deterministic random source.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Write the derived graph as a GEXF document to the given path.
    #[arg(long)]
    gexf: Option<PathBuf>,

    /// Suppress the textual grid depiction.
    #[arg(long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let grid = gridtown_system_generation::generate(args.rows, args.columns, &mut rng);
    let graph = gridtown_system_graph::build(&grid);

    if !args.quiet {
        print!("{}", gridtown_rendering_ascii::render(&grid));
    }

    println!(
        "{} rows x {} columns: {} nodes, {} edges",
        grid.rows(),
        grid.columns(),
        graph.node_count(),
        graph.edge_count()
    );

    if let Some(path) = args.gexf {
        let document = gridtown_export_gexf::export(&grid, &graph);
        std::fs::write(&path, document)
            .with_context(|| format!("could not write GEXF document to {}", path.display()))?;
        println!("wrote GEXF document to {}", path.display());
    }

    Ok(())
}
