use crate::error::Result;
use crate::graph::{GraphView, Vertex};
use crate::queue::Queue;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Number of vertices at each distance from `center`.
///
/// `result[i]` counts the vertices exactly `i` edges away, so `result[0]`
/// is always 1 for the center itself. Vertices unreachable from `center`
/// appear nowhere.
pub fn get_distance_distribution<V: Vertex, G: GraphView<V>>(
    graph: &G,
    center: &V,
) -> Result<Vec<usize>> {
    graph.require_vertex(center)?;

    let mut queue = Queue::new();
    let mut discovered = FxHashSet::default();
    let mut level_counts = vec![1];

    queue.enqueue((center, 0));
    discovered.insert(center);

    while !queue.is_empty() {
        let (current, level) = queue.dequeue()?;
        let next_level = level + 1;

        for neighbor in graph.adjacent_vertices(current)? {
            if discovered.insert(neighbor) {
                if level_counts.len() <= next_level {
                    level_counts.push(0);
                }
                level_counts[next_level] += 1;
                queue.enqueue((neighbor, next_level));
            }
        }
    }

    debug!(%center, reachable = discovered.len(), levels = level_counts.len(), "distance census done");
    Ok(level_counts)
}
