use super::base::Graph;
use super::ids::NodeIndex;
use super::node::Node;
use std::fmt;

/// The factory and bookkeeping hooks that specialise a [`Graph`].
///
/// A graph kind decides what every node and edge carries and how endpoint payload reacts when an
/// edge is attached or detached. The graph only ever constructs payload through
/// [`create_node`](Self::create_node) and [`create_edge`](Self::create_edge), so swapping the
/// kind swaps the concrete node and edge types without touching any graph logic.
pub trait GraphKind: Sized + 'static {
    type NodeData: Clone + fmt::Debug + 'static;
    type EdgeData: Clone + fmt::Debug + 'static;

    fn create_node(index: NodeIndex) -> Self::NodeData;

    fn create_edge(first: NodeIndex, second: NodeIndex) -> Self::EdgeData;

    /// Copies node payload when a graph is cloned.
    ///
    /// Edges are replayed through [`add_edge`](Graph::add_edge) afterwards, so implementations
    /// holding derived state should copy only the primitive fields and let
    /// [`edge_added`](Self::edge_added) rebuild the rest.
    fn copy_node_payload(target: &mut Self::NodeData, source: &Self::NodeData) {
        target.clone_from(source);
    }

    fn copy_edge_payload(target: &mut Self::EdgeData, source: &Self::EdgeData) {
        target.clone_from(source);
    }

    /// Runs after a new edge has been registered on both endpoints.
    fn edge_added(_first: &mut Node<Self::NodeData>, _second: &mut Node<Self::NodeData>) {}

    /// Runs after an edge has been detached from its endpoints.
    fn edge_removed(_first: &mut Node<Self::NodeData>, _second: &mut Node<Self::NodeData>) {}
}

/// A graph kind whose nodes and edges carry no payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl GraphKind for Plain {
    type NodeData = ();
    type EdgeData = ();

    fn create_node(_index: NodeIndex) -> Self::NodeData {}

    fn create_edge(_first: NodeIndex, _second: NodeIndex) -> Self::EdgeData {}
}

pub type PlainGraph = Graph<Plain>;
