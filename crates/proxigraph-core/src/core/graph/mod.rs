//! # Generic Graph Module
//!
//! An undirected graph over a fixed number of nodes, indexed `1..=N`, whose edges live in a
//! pooled slot map.
//!
//! ## Overview
//!
//! Concrete graphs differ only in the payload their nodes and edges carry and in the bookkeeping
//! that runs when an edge appears or disappears. Both are supplied by a [`GraphKind`]
//! implementation, so [`Graph`] itself never needs to know the concrete payload types.
//!
//! ## Key Components
//!
//! - [`base`] - The [`Graph`] container and its edge operations
//! - [`kind`] - The [`GraphKind`] factory trait and the payload-free [`Plain`] kind
//! - [`node`] / [`edge`] - Vertex and edge records
//! - [`pool`] - The [`EdgePool`] allocator
//! - [`dynamic`] - The object-safe [`DynGraph`] view for callers that hold graphs as trait objects
//! - [`paths`] / [`output`] - Shortest paths and text export utilities
//!
//! ## Usage
//!
//! ```
//! use proxigraph::core::graph::PlainGraph;
//!
//! let mut graph = PlainGraph::with_num_nodes(4);
//! graph.add_edge(1, 2);
//! graph.add_edge(3, 2);
//! assert!(graph.has_edge(2, 3));
//! assert_eq!(graph.num_edges(), 2);
//! ```

pub mod base;
pub mod dynamic;
pub mod edge;
pub mod error;
pub mod ids;
pub mod kind;
pub mod node;
pub mod output;
pub mod paths;
pub mod pool;

pub use base::{Graph, MemoryFootprint};
pub use dynamic::DynGraph;
pub use edge::Edge;
pub use error::GraphError;
pub use ids::{EdgeId, NodeIndex};
pub use kind::{GraphKind, Plain, PlainGraph};
pub use node::Node;
pub use pool::EdgePool;
