use super::ids::{EdgeId, NodeIndex};

/// A graph vertex.
///
/// The incident edge list holds non-owning handles into the graph's [`EdgePool`](super::EdgePool);
/// it is only ever repaired by the graph as part of edge teardown.
#[derive(Debug, Clone)]
pub struct Node<N> {
    index: NodeIndex,
    edges: Vec<EdgeId>,
    data: N,
}

impl<N> Node<N> {
    pub(crate) fn new(index: NodeIndex, data: N) -> Self {
        Self {
            index,
            edges: Vec::new(),
            data,
        }
    }

    pub fn index(&self) -> NodeIndex {
        self.index
    }

    pub fn incident_edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn num_incident_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn data(&self) -> &N {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut N {
        &mut self.data
    }

    pub(crate) fn attach(&mut self, edge_id: EdgeId) {
        self.edges.push(edge_id);
    }

    pub(crate) fn detach(&mut self, edge_id: EdgeId) {
        match self.edges.iter().position(|&id| id == edge_id) {
            Some(pos) => {
                self.edges.swap_remove(pos);
            }
            None => debug_assert!(
                false,
                "edge {:?} is not incident to node {}",
                edge_id, self.index
            ),
        }
    }

    pub(crate) fn detach_all(&mut self) {
        self.edges.clear();
    }

    pub(crate) fn edge_capacity(&self) -> usize {
        self.edges.capacity()
    }
}
