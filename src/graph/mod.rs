use num_traits::Zero;
use crate::errors::PathPlannerError;


/// Directed weighted graph over nodes 0..n stored as an adjacency list
/// Parallel edges are kept, each one is relaxed on its own
#[derive(Clone, Debug, PartialEq)]
pub struct Graph<C> {
    adjacency: Vec<Vec<(usize, C)>>, // from -> [(to, cost)]
    edge_count: usize,
}

impl<C> Graph<C>
where
    C: Zero + Ord + Copy,
{

    /// Create a graph with `n` nodes and no edges
    pub fn new(n: usize) -> Self {
        Self {
            adjacency: (0..n).map(|_| Vec::new()).collect(),
            edge_count: 0,
        }
    }

    /// Build a graph from (from, to, cost) triples
    /// Fails on the first edge with an out of range endpoint or a negative cost
    pub fn from_edges(n: usize, edges: &[(usize, usize, C)]) -> Result<Self, PathPlannerError> {
        let mut graph = Self::new(n);
        for &(from, to, cost) in edges {
            graph.add_edge(from, to, cost)?;
        }
        Ok(graph)
    }

    /// Add a directed edge
    pub fn add_edge(&mut self, from: usize, to: usize, cost: C) -> Result<(), PathPlannerError> {
        self.check_node(from)?;
        self.check_node(to)?;
        if cost < C::zero() {
            return Err(PathPlannerError::NegativeCost { from, to });
        }

        self.adjacency[from].push((to, cost));
        self.edge_count += 1;
        Ok(())
    }

    /// Outgoing edges of `node` as (to, cost), empty for unknown nodes
    pub fn neighbors(&self, node: usize) -> &[(usize, C)] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains(&self, node: usize) -> bool {
        node < self.adjacency.len()
    }

    /// Ok if `node` is a valid id for this graph
    pub(crate) fn check_node(&self, node: usize) -> Result<(), PathPlannerError> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(PathPlannerError::InvalidNode { node, node_count: self.node_count() })
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_edges_builds_adjacency() {
        let graph = Graph::from_edges(3, &[(0, 1, 5), (0, 2, 1), (1, 2, 2)]).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.neighbors(0), &[(1, 5), (2, 1)]);
        assert_eq!(graph.neighbors(1), &[(2, 2)]);
        assert!(graph.neighbors(2).is_empty());
    }

    #[test]
    fn test_duplicate_edges_are_kept() {
        let graph = Graph::from_edges(2, &[(0, 1, 7u32), (0, 1, 3)]).unwrap();
        assert_eq!(graph.neighbors(0), &[(1, 7), (1, 3)]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_out_of_range_endpoint_is_rejected() {
        let result = Graph::from_edges(2, &[(0, 1, 1), (1, 2, 1)]);
        assert_eq!(result, Err(PathPlannerError::InvalidNode { node: 2, node_count: 2 }));

        let mut graph: Graph<i64> = Graph::new(2);
        assert!(matches!(graph.add_edge(5, 0, 1), Err(PathPlannerError::InvalidNode { node: 5, .. })));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_negative_cost_is_rejected() {
        let result = Graph::from_edges(3, &[(0, 1, 4i64), (1, 2, -1)]);
        assert_eq!(result, Err(PathPlannerError::NegativeCost { from: 1, to: 2 }));
    }

    #[test]
    fn test_neighbors_of_unknown_node_is_empty() {
        let graph: Graph<i32> = Graph::new(1);
        assert!(graph.neighbors(4).is_empty());
        assert!(!graph.contains(1));
        assert!(graph.contains(0));
    }
}
