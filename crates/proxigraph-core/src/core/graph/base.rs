use super::edge::{Edge, ordered};
use super::error::GraphError;
use super::ids::{EdgeId, NodeIndex};
use super::kind::GraphKind;
use super::node::Node;
use super::pool::EdgePool;
use std::fmt;
use std::marker::PhantomData;
use std::mem::size_of;
use tracing::debug;

/// An undirected graph over nodes `1..=N` whose payload is supplied by the kind `K`.
///
/// The graph exclusively owns its nodes and, through its [`EdgePool`], its edges. Node count is
/// fixed between calls to [`set_num_nodes`](Self::set_num_nodes); edges may be added and
/// removed any number of times in between.
///
/// Index and self-loop checks on the mutation path are debug assertions: the graph sits on hot
/// scoring loops and a bad index is a bug in the caller. Use
/// [`try_add_edge`](Self::try_add_edge) where indices come from untrusted input.
pub struct Graph<K: GraphKind> {
    nodes: Vec<Node<K::NodeData>>,
    pool: EdgePool<K::EdgeData>,
    _kind: PhantomData<fn() -> K>,
}

/// Approximate heap and inline memory held by a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoryFootprint {
    pub static_bytes: usize,
    pub dynamic_bytes: usize,
}

impl MemoryFootprint {
    pub fn total(&self) -> usize {
        self.static_bytes + self.dynamic_bytes
    }
}

impl<K: GraphKind> Default for Graph<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: GraphKind> fmt::Debug for Graph<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("kind", &std::any::type_name::<K>())
            .field("num_nodes", &self.nodes.len())
            .field("num_edges", &self.pool.len())
            .finish()
    }
}

impl<K: GraphKind> Graph<K> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            pool: EdgePool::new(),
            _kind: PhantomData,
        }
    }

    pub fn with_num_nodes(num_nodes: usize) -> Self {
        let mut graph = Self::new();
        graph.set_num_nodes(num_nodes);
        graph
    }

    /// Discards every node and edge, then constructs `num_nodes` fresh nodes.
    ///
    /// There is no identity-preserving resize: calling this with the current node count still
    /// resets all payload to its freshly constructed state.
    pub fn set_num_nodes(&mut self, num_nodes: usize) {
        for node in &mut self.nodes {
            node.detach_all();
        }
        self.pool.clear();
        self.nodes.clear();
        self.nodes.reserve(num_nodes);
        self.nodes
            .extend((1..=num_nodes).map(|index| Node::new(index, K::create_node(index))));
        debug!(num_nodes, "Graph nodes reconstructed.");
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.pool.len()
    }

    pub fn node(&self, index: NodeIndex) -> &Node<K::NodeData> {
        &self.nodes[slot_of(self.nodes.len(), index)]
    }

    pub fn node_data_mut(&mut self, index: NodeIndex) -> &mut K::NodeData {
        let slot = slot_of(self.nodes.len(), index);
        self.nodes[slot].data_mut()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node<K::NodeData>> {
        self.nodes.iter()
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge<K::EdgeData>> {
        self.pool.get(id)
    }

    pub fn edge_data_mut(&mut self, id: EdgeId) -> Option<&mut K::EdgeData> {
        self.pool.get_mut(id).map(Edge::data_mut)
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge<K::EdgeData>)> {
        self.pool.iter()
    }

    pub fn edge_pool(&self) -> &EdgePool<K::EdgeData> {
        &self.pool
    }

    /// Validates a prospective edge without touching the graph.
    pub fn check_indices(&self, a: NodeIndex, b: NodeIndex) -> Result<(), GraphError> {
        let num_nodes = self.nodes.len();
        for index in [a, b] {
            if index == 0 || index > num_nodes {
                return Err(GraphError::InvalidIndex { index, num_nodes });
            }
        }
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }
        Ok(())
    }

    /// Adds an edge between `a` and `b` in either order.
    ///
    /// Returns the new edge's id, or `None` when the edge already exists, in which case the graph
    /// is left untouched.
    pub fn add_edge(&mut self, a: NodeIndex, b: NodeIndex) -> Option<EdgeId> {
        debug_assert_ne!(a, b, "self-loop on node {a} is not permitted");
        let (first, second) = ordered(a, b);
        let num_nodes = self.nodes.len();
        let (first_slot, second_slot) = (slot_of(num_nodes, first), slot_of(num_nodes, second));

        if self.find_edge(first, second).is_some() {
            return None;
        }

        let (first_node, second_node) = pair_mut(&mut self.nodes, first_slot, second_slot);
        let id = self
            .pool
            .construct(first, second, K::create_edge(first, second));
        first_node.attach(id);
        second_node.attach(id);
        K::edge_added(first_node, second_node);
        Some(id)
    }

    /// Checked variant of [`add_edge`](Self::add_edge) for callers working from untrusted indices.
    pub fn try_add_edge(
        &mut self,
        a: NodeIndex,
        b: NodeIndex,
    ) -> Result<Option<EdgeId>, GraphError> {
        self.check_indices(a, b)?;
        Ok(self.add_edge(a, b))
    }

    /// Finds the edge between `a` and `b` by scanning the smaller of the two incident lists.
    pub fn find_edge(&self, a: NodeIndex, b: NodeIndex) -> Option<EdgeId> {
        if a == b {
            return None;
        }
        let (node_a, node_b) = (self.node(a), self.node(b));
        let (scanned, target) = if node_a.num_incident_edges() <= node_b.num_incident_edges() {
            (node_a, b)
        } else {
            (node_b, a)
        };
        scanned.incident_edges().iter().copied().find(|&id| {
            self.pool
                .get(id)
                .is_some_and(|edge| edge.other_node(scanned.index()) == target)
        })
    }

    pub fn has_edge(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.find_edge(a, b).is_some()
    }

    /// Detaches an edge from both endpoints, runs the kind's removal bookkeeping, and returns the
    /// slot to the pool.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not name a live edge of this graph.
    pub fn delete_edge(&mut self, id: EdgeId) {
        let edge = self.pool.destroy(id);
        let num_nodes = self.nodes.len();
        let (first_node, second_node) = pair_mut(
            &mut self.nodes,
            slot_of(num_nodes, edge.first_node()),
            slot_of(num_nodes, edge.second_node()),
        );
        first_node.detach(id);
        second_node.detach(id);
        K::edge_removed(first_node, second_node);
    }

    /// Removes the edge between `a` and `b`, returning whether one existed.
    pub fn remove_edge(&mut self, a: NodeIndex, b: NodeIndex) -> bool {
        match self.find_edge(a, b) {
            Some(id) => {
                self.delete_edge(id);
                true
            }
            None => false,
        }
    }

    /// Removes every edge while keeping nodes and their payload.
    pub fn drop_all_edges(&mut self) {
        for node in &mut self.nodes {
            node.detach_all();
        }
        let num_nodes = self.nodes.len();
        for (_, edge) in self.pool.drain() {
            let (first_node, second_node) = pair_mut(
                &mut self.nodes,
                slot_of(num_nodes, edge.first_node()),
                slot_of(num_nodes, edge.second_node()),
            );
            K::edge_removed(first_node, second_node);
        }
    }

    pub fn drop_all_edges_for_node(&mut self, index: NodeIndex) {
        let incident = self.node(index).incident_edges().to_vec();
        for id in incident {
            self.delete_edge(id);
        }
    }

    pub fn neighbors(&self, index: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.node(index)
            .incident_edges()
            .iter()
            .filter_map(move |&id| self.pool.get(id).map(|edge| edge.other_node(index)))
    }

    /// Neighbors with a larger index than `index`.
    pub fn upper_neighbors(&self, index: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.neighbors(index).filter(move |&other| other > index)
    }

    /// Neighbors with a smaller index than `index`.
    pub fn lower_neighbors(&self, index: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.neighbors(index).filter(move |&other| other < index)
    }

    pub fn num_neighbors_counting_self(&self, index: NodeIndex) -> usize {
        self.node(index).num_incident_edges() + 1
    }

    /// Applies `update` to the payload of every neighbor of `index`.
    pub(crate) fn for_each_neighbor_data_mut<F>(&mut self, index: NodeIndex, mut update: F)
    where
        F: FnMut(&mut K::NodeData),
    {
        let num_nodes = self.nodes.len();
        let slot = slot_of(num_nodes, index);
        for k in 0..self.nodes[slot].num_incident_edges() {
            let id = self.nodes[slot].incident_edges()[k];
            if let Some(edge) = self.pool.get(id) {
                let other = slot_of(num_nodes, edge.other_node(index));
                update(self.nodes[other].data_mut());
            }
        }
    }

    /// Overwrites this graph with a deep copy of `source`.
    ///
    /// The destination is resized to the source's node count, node payload is copied through
    /// [`GraphKind::copy_node_payload`], and every edge is replayed through
    /// [`add_edge`](Self::add_edge) so that the kind's bookkeeping re-derives any cached state.
    pub fn copy_from(&mut self, source: &Self) {
        self.set_num_nodes(source.num_nodes());
        for (target, original) in self.nodes.iter_mut().zip(&source.nodes) {
            K::copy_node_payload(target.data_mut(), original.data());
        }
        for (_, edge) in source.pool.iter() {
            if let Some(id) = self.add_edge(edge.first_node(), edge.second_node()) {
                if let Some(copy) = self.pool.get_mut(id) {
                    K::copy_edge_payload(copy.data_mut(), edge.data());
                }
            }
        }
    }

    pub fn memory_footprint(&self) -> MemoryFootprint {
        let node_bytes = self.nodes.capacity() * size_of::<Node<K::NodeData>>();
        let incident_bytes: usize = self
            .nodes
            .iter()
            .map(|node| node.edge_capacity() * size_of::<EdgeId>())
            .sum();
        let edge_bytes = self.pool.capacity() * size_of::<Edge<K::EdgeData>>();
        MemoryFootprint {
            static_bytes: size_of::<Self>(),
            dynamic_bytes: node_bytes + incident_bytes + edge_bytes,
        }
    }
}

impl<K: GraphKind> Clone for Graph<K> {
    fn clone(&self) -> Self {
        let mut graph = Self::new();
        graph.copy_from(self);
        graph
    }

    fn clone_from(&mut self, source: &Self) {
        self.copy_from(source);
    }
}

#[inline]
fn slot_of(num_nodes: usize, index: NodeIndex) -> usize {
    debug_assert!(
        (1..=num_nodes).contains(&index),
        "node index {index} is outside the valid range 1..={num_nodes}"
    );
    index.wrapping_sub(1)
}

/// Borrows two distinct elements mutably, returned in argument order.
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(a, b);
    if a < b {
        let (head, tail) = items.split_at_mut(b);
        (&mut head[a], &mut tail[0])
    } else {
        let (head, tail) = items.split_at_mut(a);
        (&mut tail[0], &mut head[b])
    }
}
