use log::{debug, trace};

use crate::queue::PriorityQueue;
use crate::{AdjacencyList, Edge, Node, NodeMap, Path, Weight};

/// An estimate of the remaining cost from a node to the goal.
///
/// A* returns a minimum-cost path only if the estimate is *admissible*: it
/// must never overestimate the true remaining cost. An inadmissible estimate
/// silently degrades the result, it is not detected.
pub trait Heuristic {
    fn cost(&self, node: &Node) -> Weight;
}

impl<F> Heuristic for F
where
    F: Fn(&Node) -> Weight,
{
    fn cost(&self, node: &Node) -> Weight {
        self(node)
    }
}

fn reconstruct(came_from: &NodeMap<Node>, goal: Node) -> Path {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&parent) = came_from.get(&current) {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}

/// Find the lowest-cost path from `start` to `goal`.
///
/// Returns the total cost and the node sequence from `start` to `goal`, both
/// inclusive, or `None` if `goal` is unreachable. An unreachable goal is a
/// normal outcome, not an error. `a_star(g, n, n, h)` is `(0.0, vec![n])`.
///
/// Each call owns fresh bookkeeping; the graph itself is only read, so it can
/// be shared across sequential searches.
pub fn a_star(
    g: &AdjacencyList,
    start: Node,
    goal: Node,
    heuristic: impl Heuristic,
) -> Option<(Weight, Path)> {
    let mut g_score: NodeMap<Weight> = NodeMap::with_capacity(g.len());
    let mut came_from: NodeMap<Node> = NodeMap::with_capacity(g.len());
    let mut open_set: PriorityQueue<Node> = PriorityQueue::with_capacity(g.len());

    g_score.insert(start, 0.0);
    open_set.push(start, heuristic.cost(&start));

    let mut expanded = 0usize;
    while let Ok((_, current)) = open_set.pop_min() {
        expanded += 1;
        if current == goal {
            trace!("reached {goal} after {expanded} expansions");
            return Some((g_score[current], reconstruct(&came_from, goal)));
        }

        for &Edge { node: neighbor, weight } in g.edges(current) {
            let tentative = g_score[current] + weight;
            if !g_score.has(&neighbor) || tentative < g_score[neighbor] {
                g_score.insert(neighbor, tentative);
                came_from.insert(neighbor, current);
                // push re-prioritizes neighbors already on the frontier
                open_set.push(neighbor, tentative + heuristic.cost(&neighbor));
            }
        }
    }

    debug!("open set exhausted after {expanded} expansions, {goal} is unreachable from {start}");
    None
}

/// [`a_star`] with the zero heuristic, i.e. Dijkstra's algorithm.
pub fn shortest_path(g: &AdjacencyList, start: Node, goal: Node) -> Option<(Weight, Path)> {
    a_star(g, start, goal, |_: &Node| 0.0)
}
