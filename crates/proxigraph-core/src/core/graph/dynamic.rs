use super::base::Graph;
use super::ids::NodeIndex;
use super::kind::GraphKind;
use std::any::Any;
use std::fmt;

/// An object-safe view of a [`Graph`] of any kind.
///
/// Code that keeps graphs behind `Box<dyn DynGraph>` can still take independent copies:
/// [`clone_graph`](Self::clone_graph) produces a graph of the same concrete kind, which
/// [`as_any`](Self::as_any) lets the caller downcast back to.
pub trait DynGraph: Any + fmt::Debug {
    fn num_nodes(&self) -> usize;
    fn num_edges(&self) -> usize;
    fn set_num_nodes(&mut self, num_nodes: usize);
    fn add_edge(&mut self, a: NodeIndex, b: NodeIndex) -> bool;
    fn remove_edge(&mut self, a: NodeIndex, b: NodeIndex) -> bool;
    fn has_edge(&self, a: NodeIndex, b: NodeIndex) -> bool;
    fn drop_all_edges(&mut self);
    fn clone_graph(&self) -> Box<dyn DynGraph>;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<K: GraphKind> DynGraph for Graph<K> {
    fn num_nodes(&self) -> usize {
        Graph::num_nodes(self)
    }

    fn num_edges(&self) -> usize {
        Graph::num_edges(self)
    }

    fn set_num_nodes(&mut self, num_nodes: usize) {
        Graph::set_num_nodes(self, num_nodes);
    }

    fn add_edge(&mut self, a: NodeIndex, b: NodeIndex) -> bool {
        Graph::add_edge(self, a, b).is_some()
    }

    fn remove_edge(&mut self, a: NodeIndex, b: NodeIndex) -> bool {
        Graph::remove_edge(self, a, b)
    }

    fn has_edge(&self, a: NodeIndex, b: NodeIndex) -> bool {
        Graph::has_edge(self, a, b)
    }

    fn drop_all_edges(&mut self) {
        Graph::drop_all_edges(self);
    }

    fn clone_graph(&self) -> Box<dyn DynGraph> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
