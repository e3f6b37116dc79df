use super::config::{ConfigError, RebuildConfig};
use super::error::EngineError;
use crate::core::geometry::CoordinateSource;
use crate::core::graph::NodeIndex;
use crate::core::proximity::{NeighborCutoff, ProximityGraph};
use itertools::Itertools;
use kiddo::{KdTree, SquaredEuclidean};
use nalgebra::{Point3, distance_squared};
use tracing::{debug, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Points stored per k-d tree leaf (kiddo's default bucket size).
const KD_TREE_BUCKET_SIZE: usize = 32;

/// A candidate pair `(i, j, distance_squared)` with `i < j`, using 1-based node indices.
type Candidate = (NodeIndex, NodeIndex, f64);

/// The spatial search used to enumerate candidate pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BroadPhase {
    /// A k-d tree over all positions.
    #[default]
    KdTree,
    /// Sort along the widest axis and sweep a window of the search radius.
    ///
    /// Used when too many entities share a coordinate value on one axis for a k-d tree leaf to
    /// be split, as in coincident points or flat, grid-aligned structures.
    Sweep,
}

impl BroadPhase {
    /// Picks the k-d tree unless some axis value repeats often enough to overflow a leaf.
    pub fn select(positions: &[Point3<f64>]) -> Self {
        if max_shared_axis_value(positions) < KD_TREE_BUCKET_SIZE {
            BroadPhase::KdTree
        } else {
            BroadPhase::Sweep
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RebuildSummary {
    /// Pairs reported by the broad phase and passed to `conditionally_add_edge`.
    pub candidate_pairs: usize,
    /// Edges present after the rebuild.
    pub edges: usize,
    /// The search that produced the candidates; `None` for [`rebuild_exhaustive`].
    pub broad_phase: Option<BroadPhase>,
}

/// Rebuilds the edges of `graph` from the current positions in `source`.
///
/// All existing edges are dropped (node masses are kept unless the graph has to be resized).
/// The broad phase yields every pair within `cutoff + padding`; each such pair `i < j` is passed
/// with its exact squared distance to `conditionally_add_edge`, which applies the strict cutoff
/// test. See [`BroadPhase`] for how the search is chosen.
#[instrument(skip_all, name = "proximity_rebuild_task")]
pub fn rebuild_from_coordinates<C, S>(
    graph: &mut ProximityGraph<C>,
    source: &S,
    config: &RebuildConfig,
) -> Result<RebuildSummary, EngineError>
where
    C: NeighborCutoff,
    S: CoordinateSource + ?Sized,
{
    let positions = prepare(graph, source, config)?;
    let search_radius = C::CUTOFF + config.broad_phase_padding;

    let broad_phase = BroadPhase::select(&positions);
    let candidates = match broad_phase {
        BroadPhase::KdTree => kd_tree_candidates(&positions, search_radius),
        BroadPhase::Sweep => sweep_candidates(&positions, search_radius),
    };

    debug!(
        candidate_pairs = candidates.len(),
        search_radius,
        ?broad_phase,
        "Broad phase complete."
    );

    for &(i, j, d2) in &candidates {
        graph.conditionally_add_edge(i, j, d2);
    }

    let summary = RebuildSummary {
        candidate_pairs: candidates.len(),
        edges: graph.num_edges(),
        broad_phase: Some(broad_phase),
    };
    info!(
        num_nodes = positions.len(),
        num_edges = summary.edges,
        candidate_pairs = summary.candidate_pairs,
        cutoff = C::CUTOFF,
        "Proximity graph rebuilt."
    );
    Ok(summary)
}

fn kd_tree_candidates(positions: &[Point3<f64>], search_radius: f64) -> Vec<Candidate> {
    let search_radius_sq = search_radius * search_radius;

    let mut tree: KdTree<f64, 3> = KdTree::with_capacity(positions.len().max(1));
    for (slot, p) in positions.iter().enumerate() {
        tree.add(&[p.x, p.y, p.z], slot as u64);
    }

    collect_candidates(positions.len(), |slot| {
        let p = &positions[slot];
        tree.within_unsorted::<SquaredEuclidean>(&[p.x, p.y, p.z], search_radius_sq)
            .into_iter()
            .map(|neighbour| neighbour.item as usize)
            .filter(|&other| other > slot)
            .map(|other| (slot + 1, other + 1, distance_squared(p, &positions[other])))
            .collect()
    })
}

fn sweep_candidates(positions: &[Point3<f64>], search_radius: f64) -> Vec<Candidate> {
    let search_radius_sq = search_radius * search_radius;
    let axis = widest_axis(positions);
    let order: Vec<usize> = (0..positions.len())
        .sorted_unstable_by(|&a, &b| positions[a][axis].total_cmp(&positions[b][axis]))
        .collect();

    collect_candidates(order.len(), |rank| {
        let a = order[rank];
        let p = &positions[a];
        order[rank + 1..]
            .iter()
            .take_while(|&&b| positions[b][axis] - p[axis] <= search_radius)
            .filter_map(|&b| {
                let d2 = distance_squared(p, &positions[b]);
                (d2 <= search_radius_sq).then(|| {
                    let (i, j) = if a < b { (a, b) } else { (b, a) };
                    (i + 1, j + 1, d2)
                })
            })
            .collect()
    })
}

fn collect_candidates<F>(count: usize, candidates_for: F) -> Vec<Candidate>
where
    F: Fn(usize) -> Vec<Candidate> + Send + Sync,
{
    #[cfg(feature = "parallel")]
    let candidates = (0..count).into_par_iter().flat_map_iter(candidates_for).collect();

    #[cfg(not(feature = "parallel"))]
    let candidates = (0..count).flat_map(candidates_for).collect();

    candidates
}

/// The largest number of positions sharing one coordinate value on any single axis.
fn max_shared_axis_value(positions: &[Point3<f64>]) -> usize {
    (0..3)
        .map(|axis| {
            positions
                .iter()
                // Adding 0.0 folds -0.0 into 0.0, which the tree treats as equal.
                .map(|p| (p[axis] + 0.0).to_bits())
                .counts()
                .into_values()
                .max()
                .unwrap_or(0)
        })
        .max()
        .unwrap_or(0)
}

fn widest_axis(positions: &[Point3<f64>]) -> usize {
    let extent = |axis: usize| {
        let (lo, hi) = positions
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p[axis]), hi.max(p[axis]))
            });
        hi - lo
    };
    (0..3)
        .max_by(|&a, &b| extent(a).total_cmp(&extent(b)))
        .unwrap_or(0)
}

/// Rebuilds the edges of `graph` by testing every pair of entities.
///
/// This is the O(N²) scan without a broad phase; it produces the same graph as
/// [`rebuild_from_coordinates`] and is useful for small systems and as a reference.
#[instrument(skip_all, name = "proximity_exhaustive_rebuild_task")]
pub fn rebuild_exhaustive<C, S>(
    graph: &mut ProximityGraph<C>,
    source: &S,
    config: &RebuildConfig,
) -> Result<RebuildSummary, EngineError>
where
    C: NeighborCutoff,
    S: CoordinateSource + ?Sized,
{
    let positions = prepare(graph, source, config)?;
    let mut candidate_pairs = 0;

    for (a, b) in (0..positions.len()).tuple_combinations() {
        candidate_pairs += 1;
        graph.conditionally_add_edge(a + 1, b + 1, distance_squared(&positions[a], &positions[b]));
    }

    info!(
        num_nodes = positions.len(),
        num_edges = graph.num_edges(),
        "Proximity graph rebuilt exhaustively."
    );
    Ok(RebuildSummary {
        candidate_pairs,
        edges: graph.num_edges(),
        broad_phase: None,
    })
}

/// Validates the inputs and clears the graph's edges, returning positions in node order.
fn prepare<C, S>(
    graph: &mut ProximityGraph<C>,
    source: &S,
    config: &RebuildConfig,
) -> Result<Vec<Point3<f64>>, EngineError>
where
    C: NeighborCutoff,
    S: CoordinateSource + ?Sized,
{
    if !config.broad_phase_padding.is_finite() || config.broad_phase_padding < 0.0 {
        return Err(ConfigError::InvalidParameter {
            name: "broad_phase_padding",
            reason: format!(
                "expected a finite, non-negative distance, got {}",
                config.broad_phase_padding
            ),
        }
        .into());
    }

    let n = source.num_entities();
    if n != graph.num_nodes() && !config.resize_to_source {
        return Err(EngineError::EntityCountMismatch {
            expected: graph.num_nodes(),
            found: n,
        });
    }

    let positions: Vec<Point3<f64>> = (1..=n).map(|index| source.position(index)).collect();

    if config.validate_coordinates {
        if let Some(slot) = positions
            .iter()
            .position(|p| p.coords.iter().any(|c| !c.is_finite()))
        {
            return Err(EngineError::NonFiniteCoordinate { index: slot + 1 });
        }
    }

    if n == graph.num_nodes() {
        graph.drop_all_edges();
    } else {
        debug!(
            from = graph.num_nodes(),
            to = n,
            "Resizing graph to match coordinate source."
        );
        graph.set_num_nodes(n);
    }

    Ok(positions)
}
