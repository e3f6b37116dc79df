use super::{build_graph, open_output};
use crate::cli::{ConnectivityArgs, EdgeFormat};
use crate::config::{GraphChoice, PartialConfig};
use crate::error::Result;
use crate::input::{self, Entities};
use proxigraph::core::proximity::{NeighborCutoff, TenAngstrom, TwelveAngstrom};
use proxigraph::engine::config::RebuildConfig;
use std::io::Write;
use tracing::info;

pub fn run(args: ConnectivityArgs) -> Result<()> {
    let config = PartialConfig::load(&args.common)?;

    info!("Loading entities from {:?}", &args.common.input);
    let entities = input::read_entities_from_path(&args.common.input)?;

    let out = open_output(args.output.as_deref())?;
    match config.graph {
        GraphChoice::TenAngstrom => {
            export::<TenAngstrom, _>(&entities, &config.rebuild, args.format, out)
        }
        GraphChoice::TwelveAngstrom => {
            export::<TwelveAngstrom, _>(&entities, &config.rebuild, args.format, out)
        }
    }
}

fn export<C: NeighborCutoff, W: Write>(
    entities: &Entities,
    rebuild: &RebuildConfig,
    format: EdgeFormat,
    mut out: W,
) -> Result<()> {
    let graph = build_graph::<C>(entities, rebuild)?;
    match format {
        EdgeFormat::Connectivity => graph.write_connectivity(&mut out)?,
        EdgeFormat::Dimacs => graph.write_dimacs(&mut out)?,
    }
    out.flush()?;
    Ok(())
}
