use super::{build_graph, open_output};
use crate::cli::NeighborsArgs;
use crate::config::{GraphChoice, PartialConfig};
use crate::error::Result;
use crate::input::{self, Entities};
use proxigraph::core::graph::NodeIndex;
use proxigraph::core::proximity::{NeighborCutoff, ProximityGraph, TenAngstrom, TwelveAngstrom};
use proxigraph::engine::config::RebuildConfig;
use serde::Serialize;
use std::io::Write;
use tracing::info;

#[derive(Serialize, Debug, PartialEq)]
struct NeighborRecord {
    index: NodeIndex,
    neighbor_count: usize,
    neighbor_mass: f64,
    sum_of_neighbors_masses: f64,
}

pub fn run(args: NeighborsArgs) -> Result<()> {
    let config = PartialConfig::load(&args.common)?;

    info!("Loading entities from {:?}", &args.common.input);
    let entities = input::read_entities_from_path(&args.common.input)?;

    let out = open_output(args.output.as_deref())?;
    match config.graph {
        GraphChoice::TenAngstrom => report::<TenAngstrom, _>(&entities, &config.rebuild, out),
        GraphChoice::TwelveAngstrom => {
            report::<TwelveAngstrom, _>(&entities, &config.rebuild, out)
        }
    }
}

fn report<C: NeighborCutoff, W: Write>(
    entities: &Entities,
    rebuild: &RebuildConfig,
    out: W,
) -> Result<()> {
    let graph = build_graph::<C>(entities, rebuild)?;
    write_report(&graph, out)
}

fn write_report<C: NeighborCutoff, W: Write>(graph: &ProximityGraph<C>, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for index in 1..=graph.num_nodes() {
        writer.serialize(NeighborRecord {
            index,
            neighbor_count: graph.num_neighbors(index),
            neighbor_mass: graph.neighbor_mass(index),
            sum_of_neighbors_masses: graph.sum_of_neighbors_masses(index),
        })?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::GraphArgs;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    #[test]
    fn report_lists_every_entity() {
        let mut graph = ProximityGraph::<TenAngstrom>::with_num_nodes(3);
        graph.add_edge(1, 2);
        graph.set_neighbor_mass(1, 2.5);

        let mut buffer = Vec::new();
        write_report(&graph, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "index,neighbor_count,neighbor_mass,sum_of_neighbors_masses",
                "1,1,2.5,1.0",
                "2,1,1.0,2.5",
                "3,0,1.0,0.0",
            ]
        );
    }

    #[test]
    fn run_writes_csv_for_selected_graph() {
        let mut input = NamedTempFile::new().unwrap();
        writeln!(input, "x,y,z,mass\n0,0,0,1.0\n11,0,0,3.0\n30,0,0,").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("neighbors.csv");

        run(NeighborsArgs {
            common: GraphArgs {
                input: input.path().to_path_buf(),
                config: None,
                graph: Some(GraphChoice::TwelveAngstrom),
                padding: None,
            },
            output: Some(output.clone()),
        })
        .unwrap();

        let text = std::fs::read_to_string(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "1,1,1.0,3.0");
        assert_eq!(lines[2], "2,1,3.0,1.0");
        assert_eq!(lines[3], "3,0,1.0,0.0");
    }

    #[test]
    fn ten_angstrom_graph_excludes_distant_pair() {
        let mut input = NamedTempFile::new().unwrap();
        writeln!(input, "x,y,z\n0,0,0\n11,0,0").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("neighbors.csv");

        run(NeighborsArgs {
            common: GraphArgs {
                input: input.path().to_path_buf(),
                config: None,
                graph: None,
                padding: None,
            },
            output: Some(output.clone()),
        })
        .unwrap();

        let text = std::fs::read_to_string(output).unwrap();
        assert!(text.lines().skip(1).all(|line| line.contains(",0,1.0,0.0")));
    }
}
