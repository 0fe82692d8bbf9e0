use super::utils::reconstruct_path;
use crate::error::Result;
use crate::graph::{GraphView, Vertex};
use crate::queue::Queue;
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::Instant;
use tracing::debug;

struct BfsState<'a, V> {
    queue: Queue<&'a V>,
    visited: FxHashSet<&'a V>,
    parent_map: FxHashMap<&'a V, &'a V>,
}

impl<'a, V: Vertex> BfsState<'a, V> {
    fn new(start: &'a V) -> Self {
        let mut queue = Queue::new();
        let mut visited = FxHashSet::default();

        queue.enqueue(start);
        visited.insert(start);

        Self {
            queue,
            visited,
            parent_map: FxHashMap::default(),
        }
    }

    fn visit_neighbor(&mut self, neighbor: &'a V, current: &'a V) {
        if self.visited.insert(neighbor) {
            self.parent_map.insert(neighbor, current);
            self.queue.enqueue(neighbor);
        }
    }
}

/// Path with the fewest edges from `start` to `target`, both included.
///
/// Returns `Ok(None)` when `target` is unreachable.
pub fn find_shortest_path<'a, V: Vertex, G: GraphView<V>>(
    graph: &'a G,
    start: &'a V,
    target: &'a V,
) -> Result<Option<Vec<V>>> {
    graph.require_vertex(start)?;
    graph.require_vertex(target)?;

    let search_timer = Instant::now();
    let mut bfs_state = BfsState::new(start);

    while !bfs_state.queue.is_empty() {
        let current = bfs_state.queue.dequeue()?;
        if current == target {
            let path = reconstruct_path(&bfs_state.parent_map, start, target);
            debug!(
                %start,
                %target,
                hops = path.len() - 1,
                visited = bfs_state.visited.len(),
                elapsed_ms = search_timer.elapsed().as_millis() as u64,
                "shortest path found"
            );
            return Ok(Some(path));
        }

        for neighbor in graph.adjacent_vertices(current)? {
            bfs_state.visit_neighbor(neighbor, current);
        }
    }

    debug!(%start, %target, visited = bfs_state.visited.len(), "frontier exhausted, no path");
    Ok(None)
}
