use super::graph::NodeIndex;
use nalgebra::Point3;

/// A source of entity positions, indexed the same way as graph nodes (`1..=N`).
///
/// This is the narrow interface through which the surrounding molecular model exposes its
/// current conformation to the proximity engine.
pub trait CoordinateSource {
    /// The number of entities, which must match the node count of the graph being rebuilt.
    fn num_entities(&self) -> usize;

    /// The position of the entity with the given 1-based index.
    fn position(&self, index: NodeIndex) -> Point3<f64>;
}

impl CoordinateSource for [Point3<f64>] {
    fn num_entities(&self) -> usize {
        self.len()
    }

    fn position(&self, index: NodeIndex) -> Point3<f64> {
        self[index - 1]
    }
}

impl CoordinateSource for Vec<Point3<f64>> {
    fn num_entities(&self) -> usize {
        self.len()
    }

    fn position(&self, index: NodeIndex) -> Point3<f64> {
        self.as_slice().position(index)
    }
}
