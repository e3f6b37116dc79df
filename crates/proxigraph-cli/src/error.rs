use proxigraph::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use proxigraph::engine::config::ConfigError;

    #[test]
    fn engine_errors_display_transparently() {
        let err: CliError = EngineError::NonFiniteCoordinate { index: 3 }.into();
        assert_eq!(err.to_string(), "Entity 3 has a non-finite coordinate");
    }

    #[test]
    fn config_errors_carry_the_builder_message() {
        let source = ConfigError::MissingParameter("broad_phase_padding");
        let err = CliError::Config(source.to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required parameter: broad_phase_padding"
        );
    }
}
