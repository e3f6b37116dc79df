//! # Proximity Graph Module
//!
//! Distance-cutoff neighbor graphs whose nodes carry a neighbor mass and a lazily maintained
//! sum of their neighbors' masses.
//!
//! ## Overview
//!
//! A proximity graph is a [`Graph`](crate::core::graph::Graph) specialised by
//! [`ProximityKind`]. The geometry owner rebuilds it by calling
//! [`conditionally_add_edge`](crate::core::graph::Graph::conditionally_add_edge) once per
//! candidate pair; scoring terms then read
//! [`sum_of_neighbors_masses`](crate::core::graph::Graph::sum_of_neighbors_masses), a crowding
//! descriptor used to approximate burial.
//!
//! Each node's aggregate is either fresh or stale. Any edge change at the node, or a mass change
//! at one of its neighbors, marks it stale; the next read recomputes it once. A rebuild made of
//! thousands of sequential insertions therefore never pays for intermediate recomputes.
//!
//! ## Key Components
//!
//! - [`aggregate`] - The standalone [`CachedAggregate`] dirty-bit cache
//! - [`cutoff`] - Class-level distance cutoffs ([`TenAngstrom`], [`TwelveAngstrom`])
//! - [`graph`] - The [`ProximityKind`] graph kind and the proximity operations

pub mod aggregate;
pub mod cutoff;
pub mod graph;

pub use aggregate::{CacheState, CachedAggregate};
pub use cutoff::{NeighborCutoff, TenAngstrom, TwelveAngstrom};
pub use graph::{
    NeighborData, ProximityGraph, ProximityKind, TenANeighborGraph, TwelveANeighborGraph,
};
