use crate::config::GraphChoice;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Proxigraph CLI - Build distance-cutoff neighbor graphs over molecular entities and report per-entity neighbor aggregates.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for the parallel broad phase.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report neighbor count and neighbor-mass aggregates for every entity.
    Neighbors(NeighborsArgs),
    /// Export the edges of the neighbor graph.
    Connectivity(ConnectivityArgs),
}

/// Input and graph options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Path to the entity CSV file with `x,y,z` columns and an optional `mass` column.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the neighbor graph type from the config file.
    #[arg(short, long, value_enum, value_name = "TYPE")]
    pub graph: Option<GraphChoice>,

    /// Override the broad-phase padding (Å) from the config file.
    #[arg(long, value_name = "FLOAT")]
    pub padding: Option<f64>,
}

/// Arguments for the `neighbors` subcommand.
#[derive(Args, Debug)]
pub struct NeighborsArgs {
    #[command(flatten)]
    pub common: GraphArgs,

    /// Path for the output CSV file. Writes to standard output when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `connectivity` subcommand.
#[derive(Args, Debug)]
pub struct ConnectivityArgs {
    #[command(flatten)]
    pub common: GraphArgs,

    /// Output format for the edge list.
    #[arg(short, long, value_enum, default_value_t = EdgeFormat::Connectivity)]
    pub format: EdgeFormat,

    /// Path for the output file. Writes to standard output when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeFormat {
    /// One `i j` line per edge.
    Connectivity,
    /// DIMACS `p edge` / `e i j` format.
    Dimacs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn neighbors_parses_overrides() {
        let cli = Cli::parse_from([
            "proxigraph",
            "neighbors",
            "-i",
            "entities.csv",
            "--graph",
            "twelve-angstrom",
            "--padding",
            "1.5",
        ]);
        match cli.command {
            Commands::Neighbors(args) => {
                assert_eq!(args.common.input, PathBuf::from("entities.csv"));
                assert_eq!(args.common.graph, Some(GraphChoice::TwelveAngstrom));
                assert_eq!(args.common.padding, Some(1.5));
                assert!(args.output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn connectivity_defaults_to_plain_format() {
        let cli = Cli::parse_from(["proxigraph", "-vv", "connectivity", "-i", "in.csv"]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Connectivity(args) => assert_eq!(args.format, EdgeFormat::Connectivity),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["proxigraph", "-q", "-v", "neighbors", "-i", "in.csv"]);
        assert!(result.is_err());
    }
}
