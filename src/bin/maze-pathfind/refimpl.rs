//! Independent reference: breadth-first search straight on the map grid.
//!
//! Steps all cost 1, so BFS is exact and shares no code with the library's
//! A*, which makes it a useful cross-check.

use std::collections::{HashMap, VecDeque};

use movingai::{Coords2D, Map2D, MovingAiMap};

fn neighbors(map: &MovingAiMap, (x, y): Coords2D) -> Vec<Coords2D> {
    let mut out = Vec::with_capacity(4);
    if x + 1 < map.width() {
        out.push((x + 1, y));
    }
    if y + 1 < map.height() {
        out.push((x, y + 1));
    }
    if x > 0 {
        out.push((x - 1, y));
    }
    if y > 0 {
        out.push((x, y - 1));
    }
    out.retain(|&n| map.is_traversable_from((x, y), n) && map.is_traversable_from(n, (x, y)));
    out
}

pub fn shortest_path(map: &MovingAiMap, start: Coords2D, goal: Coords2D) -> Option<Vec<Coords2D>> {
    let mut parents: HashMap<Coords2D, Coords2D> = HashMap::new();
    let mut queue = VecDeque::new();
    parents.insert(start, start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            let mut path = vec![goal];
            let mut c = current;
            while c != start {
                c = parents[&c];
                path.push(c);
            }
            path.reverse();
            return Some(path);
        }

        for n in neighbors(map, current) {
            if !parents.contains_key(&n) {
                parents.insert(n, current);
                queue.push_back(n);
            }
        }
    }

    None
}
