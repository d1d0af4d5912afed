use thiserror::Error;


#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathPlannerError {
    /// Node id outside [0, node_count)
    #[error("node {node} is out of range for a graph of {node_count} nodes")]
    InvalidNode { node: usize, node_count: usize },

    /// Edge costs must be non-negative
    #[error("edge {from} -> {to} has a negative cost")]
    NegativeCost { from: usize, to: usize },

    /// Accumulated cost no longer fits the cost type
    #[error("accumulated cost overflowed while relaxing node {node}")]
    CostOverflow { node: usize },

    #[error("unknown city: {0}")]
    UnknownCity(String),
}
