use super::config::ConfigError;
use crate::core::graph::NodeIndex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Coordinate source provides {found} entities but the graph has {expected} nodes")]
    EntityCountMismatch { expected: usize, found: usize },

    #[error("Entity {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: NodeIndex },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}
