use super::ids::NodeIndex;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GraphError {
    #[error("Node index {index} is outside the valid range 1..={num_nodes}")]
    InvalidIndex { index: NodeIndex, num_nodes: usize },

    #[error("Self-loop on node {0} is not permitted")]
    SelfLoop(NodeIndex),
}
