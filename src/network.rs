use crate::collections::FxIndexSet;
use crate::errors::PathPlannerError;
use crate::graph::Graph;
use crate::graph_algos::bounded_stops::{cheapest_price, cheapest_route};

use log::trace;


/// Flights between named cities
/// Names get dense ids in order of first mention, the id is the index in `cities`
#[derive(Debug, Default)]
pub struct RouteNetwork {
    cities: FxIndexSet<String>,
    flights: Vec<(usize, usize, i64)>,
}

impl RouteNetwork {

    pub fn new() -> Self {
        Self::default()
    }

    /// Id for `name`, allocating the next free id on first mention
    pub fn city_id(&mut self, name: &str) -> usize {
        if let Some(id) = self.cities.get_index_of(name) {
            return id;
        }
        let id = self.cities.insert_full(name.to_string()).0;
        trace!("city {name} -> id {id}");
        id
    }

    /// Id for `name` without allocating
    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.cities.get_index_of(name)
    }

    pub fn name(&self, id: usize) -> Option<&str> {
        self.cities.get_index(id).map(String::as_str)
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Add a one way flight, cities are created as needed
    pub fn add_flight(&mut self, from: &str, to: &str, cost: i64) -> Result<(), PathPlannerError> {
        let from_id = self.city_id(from);
        let to_id = self.city_id(to);
        if cost < 0 {
            return Err(PathPlannerError::NegativeCost { from: from_id, to: to_id });
        }
        self.flights.push((from_id, to_id, cost));
        Ok(())
    }

    /// Adjacency graph over every city seen so far
    pub fn graph(&self) -> Result<Graph<i64>, PathPlannerError> {
        Graph::from_edges(self.city_count(), &self.flights)
    }

    /// Cheapest price between two named cities with at most `max_stops` layovers
    pub fn cheapest_price(&self, from: &str, to: &str, max_stops: usize) -> Result<Option<i64>, PathPlannerError> {
        let (src, dst) = (self.resolve(from)?, self.resolve(to)?);
        cheapest_price(&self.graph()?, src, dst, max_stops)
    }

    /// Cheapest route between two named cities as (city names, price)
    pub fn cheapest_route(&self, from: &str, to: &str, max_stops: usize) -> Result<Option<(Vec<String>, i64)>, PathPlannerError> {
        let (src, dst) = (self.resolve(from)?, self.resolve(to)?);

        let Some(route) = cheapest_route(&self.graph()?, src, dst, max_stops)? else {
            return Ok(None);
        };
        let names = route.nodes.iter()
            .map(|&id| self.name(id).map(str::to_string)
                .ok_or(PathPlannerError::InvalidNode { node: id, node_count: self.city_count() }))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some((names, route.cost)))
    }

    fn resolve(&self, name: &str) -> Result<usize, PathPlannerError> {
        self.lookup(name).ok_or_else(|| PathPlannerError::UnknownCity(name.to_string()))
    }
}
