use super::base::Graph;
use super::ids::NodeIndex;
use super::kind::GraphKind;
use itertools::Itertools;
use std::io::{self, Write};

impl<K: GraphKind> Graph<K> {
    /// Edge endpoints in ascending `(first, second)` order.
    pub fn sorted_edge_endpoints(&self) -> Vec<(NodeIndex, NodeIndex)> {
        self.edges()
            .map(|(_, edge)| edge.endpoints())
            .sorted_unstable()
            .collect()
    }

    /// Writes one `first second` line per edge.
    pub fn write_connectivity<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (first, second) in self.sorted_edge_endpoints() {
            writeln!(out, "{first} {second}")?;
        }
        Ok(())
    }

    /// Writes the graph in DIMACS edge format.
    pub fn write_dimacs<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "p edge {} {}", self.num_nodes(), self.num_edges())?;
        for (first, second) in self.sorted_edge_endpoints() {
            writeln!(out, "e {first} {second}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::graph::kind::PlainGraph;

    fn sample_graph() -> PlainGraph {
        let mut graph = PlainGraph::with_num_nodes(4);
        graph.add_edge(3, 4);
        graph.add_edge(2, 1);
        graph.add_edge(1, 3);
        graph
    }

    #[test]
    fn connectivity_lists_edges_in_order() {
        let mut buffer = Vec::new();
        sample_graph().write_connectivity(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "1 2\n1 3\n3 4\n");
    }

    #[test]
    fn dimacs_has_problem_line_and_edges() {
        let mut buffer = Vec::new();
        sample_graph().write_dimacs(&mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "p edge 4 3\ne 1 2\ne 1 3\ne 3 4\n"
        );
    }

    #[test]
    fn empty_graph_writes_only_header() {
        let mut buffer = Vec::new();
        PlainGraph::with_num_nodes(2)
            .write_dimacs(&mut buffer)
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "p edge 2 0\n");
    }
}
