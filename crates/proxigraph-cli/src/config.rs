use crate::cli::GraphArgs;
use crate::error::{CliError, Result};
use clap::ValueEnum;
use proxigraph::engine::config::{RebuildConfig, RebuildConfigBuilder};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

const DEFAULT_BROAD_PHASE_PADDING: f64 = 0.5;

/// Neighbor graph variants selectable from the command line or config file.
#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GraphChoice {
    /// Entities closer than 10 Å are neighbors.
    #[default]
    TenAngstrom,
    /// Entities closer than 12 Å are neighbors.
    TwelveAngstrom,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialRebuildConfig {
    #[serde(rename = "broad-phase-padding")]
    broad_phase_padding: Option<f64>,
    #[serde(rename = "validate-coordinates")]
    validate_coordinates: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    graph: Option<GraphChoice>,
    #[serde(default)]
    rebuild: PartialRebuildConfig,
}

/// Fully resolved settings for one command invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub graph: GraphChoice,
    pub rebuild: RebuildConfig,
}

impl PartialConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the config file named in `args`, if any, and resolves it against the CLI overrides.
    pub fn load(args: &GraphArgs) -> Result<AppConfig> {
        let partial = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        partial.merge_with_cli(args)
    }

    /// Command-line values win over file values, which win over built-in defaults.
    pub fn merge_with_cli(self, args: &GraphArgs) -> Result<AppConfig> {
        let graph = args.graph.or(self.graph).unwrap_or_default();

        let padding = args
            .padding
            .or(self.rebuild.broad_phase_padding)
            .unwrap_or(DEFAULT_BROAD_PHASE_PADDING);

        let rebuild = RebuildConfigBuilder::new()
            .broad_phase_padding(padding)
            .validate_coordinates(self.rebuild.validate_coordinates.unwrap_or(true))
            .resize_to_source(true)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        debug!(?graph, ?rebuild, "Resolved configuration.");
        Ok(AppConfig { graph, rebuild })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn args() -> GraphArgs {
        GraphArgs {
            input: PathBuf::from("entities.csv"),
            config: None,
            graph: None,
            padding: None,
        }
    }

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn defaults_apply_without_file_or_overrides() {
        let config = PartialConfig::load(&args()).unwrap();

        assert_eq!(config.graph, GraphChoice::TenAngstrom);
        assert_eq!(config.rebuild.broad_phase_padding, DEFAULT_BROAD_PHASE_PADDING);
        assert!(config.rebuild.validate_coordinates);
        assert!(config.rebuild.resize_to_source);
    }

    #[test]
    fn file_values_are_used() {
        let file = write_config(
            r#"
graph = "twelve-angstrom"

[rebuild]
broad-phase-padding = 1.25
validate-coordinates = false
"#,
        );
        let mut args = args();
        args.config = Some(file.path().to_path_buf());

        let config = PartialConfig::load(&args).unwrap();

        assert_eq!(config.graph, GraphChoice::TwelveAngstrom);
        assert_eq!(config.rebuild.broad_phase_padding, 1.25);
        assert!(!config.rebuild.validate_coordinates);
    }

    #[test]
    fn cli_overrides_take_precedence_over_file() {
        let file = write_config("graph = \"twelve-angstrom\"\n[rebuild]\nbroad-phase-padding = 2.0\n");
        let mut args = args();
        args.config = Some(file.path().to_path_buf());
        args.graph = Some(GraphChoice::TenAngstrom);
        args.padding = Some(0.0);

        let config = PartialConfig::load(&args).unwrap();

        assert_eq!(config.graph, GraphChoice::TenAngstrom);
        assert_eq!(config.rebuild.broad_phase_padding, 0.0);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let file = write_config("graph = \"ten-angstrom\"\ncutoff = 8.0\n");

        let result = PartialConfig::from_file(file.path());

        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn unknown_graph_name_is_rejected() {
        let file = write_config("graph = \"eight-angstrom\"\n");

        let result = PartialConfig::from_file(file.path());

        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn negative_padding_is_a_config_error() {
        let mut args = args();
        args.padding = Some(-1.0);

        let result = PartialConfig::load(&args);

        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let mut args = args();
        args.config = Some(PathBuf::from("/nonexistent/proxigraph.toml"));

        assert!(matches!(PartialConfig::load(&args), Err(CliError::Io(_))));
    }
}
