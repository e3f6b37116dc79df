use super::base::Graph;
use super::kind::GraphKind;
use nalgebra::DMatrix;

impl<K: GraphKind> Graph<K> {
    /// Computes hop-count distances between every pair of nodes with Floyd–Warshall.
    ///
    /// The matrix is zero-based: entry `(i - 1, j - 1)` holds the distance between nodes `i` and
    /// `j`, or `None` when they lie in different connected components.
    pub fn all_pairs_shortest_paths(&self) -> DMatrix<Option<u32>> {
        let n = self.num_nodes();
        let mut distances = DMatrix::from_element(n, n, None);

        for i in 0..n {
            distances[(i, i)] = Some(0);
        }
        for (_, edge) in self.edges() {
            let (a, b) = (edge.first_node() - 1, edge.second_node() - 1);
            distances[(a, b)] = Some(1);
            distances[(b, a)] = Some(1);
        }

        for k in 0..n {
            for i in 0..n {
                let Some(via_k) = distances[(i, k)] else {
                    continue;
                };
                for j in 0..n {
                    if let Some(from_k) = distances[(k, j)] {
                        let candidate = via_k + from_k;
                        let current = distances[(i, j)];
                        if current.is_none_or(|d| candidate < d) {
                            distances[(i, j)] = Some(candidate);
                        }
                    }
                }
            }
        }

        distances
    }
}

#[cfg(test)]
mod tests {
    use crate::core::graph::kind::PlainGraph;

    #[test]
    fn path_graph_distances_match_hop_counts() {
        let mut graph = PlainGraph::with_num_nodes(4);
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        graph.add_edge(3, 4);

        let distances = graph.all_pairs_shortest_paths();

        assert_eq!(distances[(0, 3)], Some(3));
        assert_eq!(distances[(3, 0)], Some(3));
        assert_eq!(distances[(1, 3)], Some(2));
        assert_eq!(distances[(2, 2)], Some(0));
    }

    #[test]
    fn disconnected_nodes_have_no_distance() {
        let mut graph = PlainGraph::with_num_nodes(3);
        graph.add_edge(1, 2);

        let distances = graph.all_pairs_shortest_paths();

        assert_eq!(distances[(0, 2)], None);
        assert_eq!(distances[(0, 1)], Some(1));
    }

    #[test]
    fn shortcut_edge_shortens_path() {
        let mut graph = PlainGraph::with_num_nodes(5);
        for i in 1..5 {
            graph.add_edge(i, i + 1);
        }
        graph.add_edge(1, 5);

        let distances = graph.all_pairs_shortest_paths();

        assert_eq!(distances[(0, 4)], Some(1));
        assert_eq!(distances[(1, 4)], Some(2));
    }
}
