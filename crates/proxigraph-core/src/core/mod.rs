//! # Core Module
//!
//! The data structures underlying the proximity graph engine.
//!
//! ## Architecture
//!
//! - **Generic Graph** ([`graph`]) - Nodes indexed `1..=N`, edges allocated from a pooled
//!   slot map, and the [`graph::GraphKind`] trait that supplies node and edge payloads
//! - **Proximity Graphs** ([`proximity`]) - Distance-cutoff graph kinds whose nodes carry a
//!   neighbor mass and a lazily recomputed sum of their neighbors' masses
//! - **Geometry** ([`geometry`]) - The coordinate source abstraction through which the
//!   surrounding molecular model exposes entity positions
//!
//! ## Key Capabilities
//!
//! - **Idempotent edge insertion** with O(min degree) existence lookups
//! - **Slot reuse across rebuilds** so repeated full-graph rebuilds do not churn the allocator
//! - **Dirty-bit caching** of per-node aggregates, recomputed only when read
//! - **Deep cloning** that re-derives every cached aggregate from scratch

pub mod geometry;
pub mod graph;
pub mod proximity;
