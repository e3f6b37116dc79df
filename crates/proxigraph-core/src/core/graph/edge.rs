use super::ids::NodeIndex;

/// An undirected edge between two distinct nodes, stored with `first < second`.
#[derive(Debug, Clone)]
pub struct Edge<E> {
    first: NodeIndex,
    second: NodeIndex,
    data: E,
}

impl<E> Edge<E> {
    pub(crate) fn new(first: NodeIndex, second: NodeIndex, data: E) -> Self {
        debug_assert!(
            first < second,
            "edge endpoints must be ordered, got ({first}, {second})"
        );
        Self {
            first,
            second,
            data,
        }
    }

    pub fn first_node(&self) -> NodeIndex {
        self.first
    }

    pub fn second_node(&self) -> NodeIndex {
        self.second
    }

    pub fn endpoints(&self) -> (NodeIndex, NodeIndex) {
        (self.first, self.second)
    }

    /// Returns the endpoint opposite `index`, which must be one of this edge's endpoints.
    #[inline]
    pub fn other_node(&self, index: NodeIndex) -> NodeIndex {
        debug_assert!(
            index == self.first || index == self.second,
            "node {index} is not an endpoint of edge ({}, {})",
            self.first,
            self.second
        );
        if index == self.first {
            self.second
        } else {
            self.first
        }
    }

    pub fn connects(&self, a: NodeIndex, b: NodeIndex) -> bool {
        (self.first, self.second) == ordered(a, b)
    }

    pub fn data(&self) -> &E {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut E {
        &mut self.data
    }
}

#[inline]
pub(crate) fn ordered(a: NodeIndex, b: NodeIndex) -> (NodeIndex, NodeIndex) {
    if a < b { (a, b) } else { (b, a) }
}
