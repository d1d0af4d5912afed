use crate::errors::PathPlannerError;
use super::StopTable;

/// Walk parent pointers from the goal state back to the start state
/// Returns the ordered path as node ids from start to goal
/// table: StopTable<C> - best costs and parents per (node, stops) state
/// goal_index: usize - flat index of the goal state in the table
pub(crate) fn shortest_path<C>(table: &StopTable<C>, goal_index: usize) -> Result<Vec<usize>, PathPlannerError>
where
    C: Copy,
{

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    while current_index != usize::MAX {
        match table.parents.get(current_index) {
            Some(&parent_index) => {
                path.push(table.node_of(current_index));
                current_index = parent_index;
            }
            None => {
                return Err(PathPlannerError::InvalidNode {
                    node: table.node_of(current_index),
                    node_count: table.best.len() / table.width,
                });
            }
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();
    Ok(path)
}
