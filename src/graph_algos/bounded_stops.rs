use crate::errors::PathPlannerError;
use crate::graph::Graph;
use super::{shortest_path, StopTable};

use std::{collections::BinaryHeap, cmp::Ordering, fmt::Debug};
use num_traits::{CheckedAdd, Zero};
use log::{debug, trace};


/// Returned by `find_cheapest_price` when no admissible route exists
pub const UNREACHABLE: i64 = -1;


/// Cheapest route found by the search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route<C> {
    pub nodes: Vec<usize>, // src ..= dst
    pub cost: C,
}

impl<C> Route<C> {

    /// Intermediate nodes between src and dst
    pub fn stops(&self) -> usize {
        self.nodes.len().saturating_sub(2)
    }
}


/// Cheapest cost from `src` to `dst` using at most `max_stops` intermediate nodes
/// Ok(None) when every route needs more stops, or no route exists at all
/// Costs are accumulated with checked addition, relaxations that overflow are skipped.
/// CostOverflow is only returned when dst was not reached and some relaxation overflowed
pub fn cheapest_price<C>(graph: &Graph<C>, src: usize, dst: usize, max_stops: usize) -> Result<Option<C>, PathPlannerError>
where
    C: Zero + CheckedAdd + Ord + Copy + Debug,
{
    let (_, goal) = build_stop_table(graph, src, dst, max_stops)?;
    Ok(goal.map(|(_, cost)| cost))
}


/// Same search as `cheapest_price`, also returns the nodes along the route
pub fn cheapest_route<C>(graph: &Graph<C>, src: usize, dst: usize, max_stops: usize) -> Result<Option<Route<C>>, PathPlannerError>
where
    C: Zero + CheckedAdd + Ord + Copy + Debug,
{
    let (table, goal) = build_stop_table(graph, src, dst, max_stops)?;

    match goal {
        Some((goal_index, cost)) => {
            let nodes = shortest_path(&table, goal_index)?;
            Ok(Some(Route { nodes, cost }))
        }
        None => Ok(None),
    }
}


/// Flat interface over (from, to, cost) triples
/// Returns UNREACHABLE when no route within `k` stops exists
/// A negative `k` only admits the trivial route, so src == dst costs 0 and anything else is unreachable
pub fn find_cheapest_price(n: usize, edges: &[(usize, usize, i64)], src: usize, dst: usize, k: i64) -> Result<i64, PathPlannerError> {
    let graph = Graph::from_edges(n, edges)?;

    if k < 0 {
        graph.check_node(src)?;
        graph.check_node(dst)?;
        return Ok(if src == dst { 0 } else { UNREACHABLE });
    }
    let max_stops = usize::try_from(k).unwrap_or(usize::MAX);

    Ok(cheapest_price(&graph, src, dst, max_stops)?.unwrap_or(UNREACHABLE))
}


/// Cost ordered search over (node, stops) states
/// Returns the state table along with the flat index and cost of the goal state, if it was reached
fn build_stop_table<C>(graph: &Graph<C>, src: usize, dst: usize, max_stops: usize) -> Result<(StopTable<C>, Option<(usize, C)>), PathPlannerError>
where
    C: Zero + CheckedAdd + Ord + Copy + Debug,
{
    graph.check_node(src)?;
    graph.check_node(dst)?;

    // A cheapest route never repeats a node, so more than n stops can't help
    let max_stops = max_stops.min(graph.node_count());
    debug!("bounded stop search {src} -> {dst}, max_stops={max_stops}, nodes={}, edges={}",
        graph.node_count(), graph.edge_count());

    let mut table: StopTable<C> = StopTable::new(graph.node_count(), max_stops);
    let start_index = table.index(src, 0);
    table.best[start_index] = Some(C::zero());

    // Min first on cost, ties are broken arbitrarily
    let mut frontier: BinaryHeap<SearchState<C>> = BinaryHeap::new();
    frontier.push(SearchState { cost: C::zero(), node: src, stops: 0 });

    let mut expanded = 0usize;
    // Last node whose relaxation did not fit the cost type
    let mut overflowed: Option<usize> = None;
    while let Some(SearchState { cost, node, stops }) = frontier.pop() {
        let index = table.index(node, stops);

        // A cheaper entry for this exact state was already expanded
        if table.best[index].is_some_and(|best| cost > best) {
            continue;
        }

        // First pop of dst is the cheapest admissible route
        if node == dst {
            debug!("reached {dst} with cost {cost:?} after {stops} edge(s), expanded {expanded} state(s)");
            return Ok((table, Some((index, cost))));
        }

        // No stops left to extend this route
        if stops > max_stops {
            continue;
        }
        expanded += 1;

        for &(next, edge_cost) in graph.neighbors(node) {
            // Too expensive to represent, so it can't beat any representable route
            let Some(new_cost) = cost.checked_add(&edge_cost) else {
                trace!("relax {node} -> {next}: cost overflow, skipped");
                overflowed = Some(next);
                continue;
            };

            let next_index = table.index(next, stops + 1);
            if table.best[next_index].is_none_or(|best| new_cost < best) {
                trace!("relax {node} -> {next}: cost {new_cost:?} at {} edge(s)", stops + 1);
                table.best[next_index] = Some(new_cost);
                table.parents[next_index] = index;
                frontier.push(SearchState { cost: new_cost, node: next, stops: stops + 1 });
            }
        }
    }

    if let Some(node) = overflowed {
        debug!("{dst} not reached from {src}, cost overflowed at {node}");
        return Err(PathPlannerError::CostOverflow { node });
    }

    debug!("{dst} unreachable from {src} within {max_stops} stop(s), expanded {expanded} state(s)");
    Ok((table, None))
}


/// Frontier entry
/// - stops counts edges taken so far, a direct edge lands on stops = 1
/// - ordering only looks at cost, reversed so BinaryHeap pops the cheapest first
#[derive(Debug)]
struct SearchState<T> {
    cost: T,
    node: usize,
    stops: usize,
}

impl<T: Ord> Ord for SearchState<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
    }
}
impl<T: Ord> PartialOrd for SearchState<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialEq> PartialEq for SearchState<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}
impl<T: PartialEq> Eq for SearchState<T> {}
