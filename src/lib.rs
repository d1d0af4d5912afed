//! Cheapest routes through a directed weighted graph under a stop budget

pub mod errors;
mod collections;
pub mod graph;
pub mod graph_algos;
pub mod network;

pub use errors::PathPlannerError;
pub use graph::Graph;
pub use graph_algos::bounded_stops::{cheapest_price, cheapest_route, find_cheapest_price, Route, UNREACHABLE};
pub use network::RouteNetwork;
