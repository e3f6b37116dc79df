use super::aggregate::{CacheState, CachedAggregate};
use super::cutoff::{NeighborCutoff, TenAngstrom, TwelveAngstrom};
use crate::core::geometry::CoordinateSource;
use crate::core::graph::{EdgeId, Graph, GraphKind, Node, NodeIndex};
use std::marker::PhantomData;
use tracing::trace;

const DEFAULT_NEIGHBOR_MASS: f64 = 1.0;

/// Per-node payload of a proximity graph.
#[derive(Debug, Clone)]
pub struct NeighborData {
    neighbor_mass: f64,
    sum_of_neighbors_masses: CachedAggregate,
}

impl Default for NeighborData {
    fn default() -> Self {
        Self {
            neighbor_mass: DEFAULT_NEIGHBOR_MASS,
            sum_of_neighbors_masses: CachedAggregate::new(),
        }
    }
}

impl NeighborData {
    /// The weight this node contributes to each neighbor's aggregate.
    pub fn neighbor_mass(&self) -> f64 {
        self.neighbor_mass
    }

    pub fn aggregate(&self) -> &CachedAggregate {
        &self.sum_of_neighbors_masses
    }

    fn invalidate(&mut self) {
        self.sum_of_neighbors_masses.invalidate();
    }
}

/// The graph kind of a distance-cutoff neighbor graph with cutoff `C`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProximityKind<C>(PhantomData<C>);

impl<C: NeighborCutoff> GraphKind for ProximityKind<C> {
    type NodeData = NeighborData;
    type EdgeData = ();

    fn create_node(_index: NodeIndex) -> Self::NodeData {
        NeighborData::default()
    }

    fn create_edge(_first: NodeIndex, _second: NodeIndex) -> Self::EdgeData {}

    fn copy_node_payload(target: &mut Self::NodeData, source: &Self::NodeData) {
        // The aggregate is re-derived by the edges replayed after this copy.
        target.neighbor_mass = source.neighbor_mass;
    }

    fn edge_added(first: &mut Node<Self::NodeData>, second: &mut Node<Self::NodeData>) {
        first.data_mut().invalidate();
        second.data_mut().invalidate();
    }

    fn edge_removed(first: &mut Node<Self::NodeData>, second: &mut Node<Self::NodeData>) {
        first.data_mut().invalidate();
        second.data_mut().invalidate();
    }
}

pub type ProximityGraph<C> = Graph<ProximityKind<C>>;

/// Residue neighbor graph with a 10 Å cutoff.
pub type TenANeighborGraph = ProximityGraph<TenAngstrom>;

/// Residue neighbor graph with a 12 Å cutoff.
pub type TwelveANeighborGraph = ProximityGraph<TwelveAngstrom>;

impl<C: NeighborCutoff> Graph<ProximityKind<C>> {
    /// The cutoff distance shared by every graph of this type.
    pub fn neighbor_cutoff(&self) -> f64 {
        C::CUTOFF
    }

    pub fn neighbor_cutoff_squared(&self) -> f64 {
        C::CUTOFF_SQUARED
    }

    /// Adds an edge between `a` and `b` iff `distance_squared` is strictly below the squared
    /// cutoff.
    ///
    /// Callers are expected to invoke this for every candidate pair their broad phase reports;
    /// pairs beyond the cutoff and pairs already connected are ignored.
    #[inline]
    pub fn conditionally_add_edge(
        &mut self,
        a: NodeIndex,
        b: NodeIndex,
        distance_squared: f64,
    ) -> Option<EdgeId> {
        if distance_squared < C::CUTOFF_SQUARED {
            self.add_edge(a, b)
        } else {
            None
        }
    }

    pub fn neighbor_mass(&self, index: NodeIndex) -> f64 {
        self.node(index).data().neighbor_mass
    }

    /// Sets the mass of `index` and marks the aggregate of each of its neighbors stale.
    pub fn set_neighbor_mass(&mut self, index: NodeIndex, mass: f64) {
        let data = self.node_data_mut(index);
        if data.neighbor_mass == mass {
            return;
        }
        data.neighbor_mass = mass;
        self.for_each_neighbor_data_mut(index, NeighborData::invalidate);
    }

    /// The sum of `neighbor_mass` over every node adjacent to `index`, recomputed first if stale.
    pub fn sum_of_neighbors_masses(&self, index: NodeIndex) -> f64 {
        self.node(index)
            .data()
            .sum_of_neighbors_masses
            .get_or_recompute(|| {
                self.neighbors(index)
                    .map(|other| self.node(other).data().neighbor_mass)
                    .sum()
            })
    }

    /// The number of adjacent nodes, ignoring masses.
    pub fn num_neighbors(&self, index: NodeIndex) -> usize {
        self.node(index).num_incident_edges()
    }

    pub fn aggregate_state(&self, index: NodeIndex) -> CacheState {
        self.node(index).data().sum_of_neighbors_masses.state()
    }

    /// How many times the aggregate of `index` has been recomputed since the node was created.
    pub fn recompute_count(&self, index: NodeIndex) -> u64 {
        self.node(index)
            .data()
            .sum_of_neighbors_masses
            .recomputations()
    }

    /// Extension point for deriving the graph directly from a coordinate source.
    ///
    /// Currently a no-op: graphs are maintained through
    /// [`conditionally_add_edge`](Self::conditionally_add_edge), usually driven by
    /// [`rebuild_from_coordinates`](crate::engine::rebuild::rebuild_from_coordinates).
    pub fn update_from_pose(&mut self, source: &dyn CoordinateSource) {
        trace!(
            num_entities = source.num_entities(),
            cutoff = C::CUTOFF,
            "update_from_pose is not implemented for this graph; leaving edges unchanged."
        );
    }
}
