//! # Proxigraph Core Library
//!
//! An incremental spatial proximity graph for molecular modeling. For a fixed collection of
//! spatial entities (typically residues), the library tracks which pairs lie within a distance
//! cutoff of one another and maintains lazily cached per-node aggregates derived from that
//! neighbor relationship, such as the weighted "neighbor mass" sum consumed by
//! environment-dependent scoring terms.
//!
//! ## Architectural Philosophy
//!
//! The library follows a two-layer architecture:
//!
//! - **[`core`]: The Foundation.** The generic [`Graph`](core::graph::Graph) with its pooled
//!   edge storage, the [`GraphKind`](core::graph::GraphKind) factory trait through which concrete
//!   graphs inject their node and edge payloads, and the proximity graph kinds with their cached
//!   neighbor aggregates.
//!
//! - **[`engine`]: The Geometry Driver.** Rebuilds a proximity graph from a coordinate source
//!   using a k-d tree broad phase, feeding every candidate pair through
//!   `conditionally_add_edge`.

pub mod core;
pub mod engine;
