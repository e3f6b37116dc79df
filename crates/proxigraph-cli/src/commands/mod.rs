pub mod connectivity;
pub mod neighbors;

use crate::error::Result;
use crate::input::Entities;
use proxigraph::core::proximity::{NeighborCutoff, ProximityGraph};
use proxigraph::engine::config::RebuildConfig;
use proxigraph::engine::rebuild::rebuild_from_coordinates;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Builds a proximity graph over `entities`, applying any masses from the input before the rebuild.
pub(crate) fn build_graph<C: NeighborCutoff>(
    entities: &Entities,
    rebuild: &RebuildConfig,
) -> Result<ProximityGraph<C>> {
    let mut graph = ProximityGraph::<C>::with_num_nodes(entities.len());
    for (slot, mass) in entities.masses.iter().enumerate() {
        if let Some(mass) = *mass {
            graph.set_neighbor_mass(slot + 1, mass);
        }
    }

    let summary = rebuild_from_coordinates(&mut graph, &entities.positions, rebuild)?;
    info!(
        "Built {} neighbor graph: {} entities, {} edges ({} candidate pairs).",
        C::NAME,
        graph.num_nodes(),
        summary.edges,
        summary.candidate_pairs
    );
    Ok(graph)
}

pub(crate) fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            info!("Writing output to {:?}", path);
            Ok(Box::new(BufWriter::new(File::create(path)?)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}
