
pub mod bounded_stops;
mod shortest_path;

use shortest_path::shortest_path;


/// Best known cost and parent for every (node, stops) search state
/// States are stored flat at `node * width + stops` with width = max_stops + 2,
/// so stops ranges over 0..=max_stops + 1 (edges taken, not intermediate nodes)
/// - best: None until the state is first reached (infinite cost)
/// - parents: flat index of the previous state, usize::MAX for the start state
#[derive(Debug)]
pub(crate) struct StopTable<C> {
    pub width: usize,
    pub best: Vec<Option<C>>,
    pub parents: Vec<usize>,
}

impl<C: Copy> StopTable<C> {

    pub fn new(node_count: usize, max_stops: usize) -> Self {
        let width = max_stops + 2;
        Self {
            width,
            best: vec![None; node_count * width],
            parents: vec![usize::MAX; node_count * width],
        }
    }

    pub fn index(&self, node: usize, stops: usize) -> usize {
        node * self.width + stops
    }

    /// Node id of a flat state index
    pub fn node_of(&self, index: usize) -> usize {
        index / self.width
    }
}
