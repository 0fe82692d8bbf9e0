use super::utils::reconstruct_path;
use crate::error::Result;
use crate::graph::{GraphView, Vertex};
use crate::min_priority_queue::MinPriorityQueue;
use rustc_hash::FxHashMap;
use std::time::Instant;
use tracing::debug;

/// Weight of a vertex that has not been reached yet.
const UNREACHED: usize = usize::MAX;

struct ObscurePathState<'a, V> {
    queue: MinPriorityQueue<&'a V, usize>,
    weights: FxHashMap<&'a V, usize>,
    parent_map: FxHashMap<&'a V, &'a V>,
}

impl<'a, V: Vertex> ObscurePathState<'a, V> {
    fn new(vertices: &'a [V], start: &'a V) -> Result<Self> {
        let mut weights: FxHashMap<&'a V, usize> =
            vertices.iter().map(|vertex| (vertex, UNREACHED)).collect();
        weights.insert(start, 0);

        let priorities: Vec<usize> = vertices.iter().map(|vertex| weights[vertex]).collect();
        let queue = MinPriorityQueue::build(vertices.iter().collect(), priorities)?;

        Ok(Self {
            queue,
            weights,
            parent_map: FxHashMap::default(),
        })
    }

    fn relax(&mut self, neighbor: &'a V, current: &'a V, candidate: usize) {
        let existing = self.weights[neighbor];
        if candidate < existing {
            self.queue.decrease_priority(&neighbor, existing, candidate);
            self.weights.insert(neighbor, candidate);
            self.parent_map.insert(neighbor, current);
        }
    }
}

/// Path from `start` to `target` minimising the summed out-degree of every
/// vertex after `start`.
///
/// Dijkstra over a min-priority queue holding every vertex up front; each
/// relaxation lowers a priority in place. Out-degrees are never negative, so
/// exactly one extraction per vertex settles every weight.
/// Returns `Ok(None)` when `target` is unreachable.
pub fn find_obscure_path<'a, V: Vertex, G: GraphView<V>>(
    graph: &'a G,
    start: &'a V,
    target: &'a V,
) -> Result<Option<Vec<V>>> {
    graph.require_vertex(start)?;
    graph.require_vertex(target)?;

    let search_timer = Instant::now();
    let vertices = graph.vertices();
    let mut state = ObscurePathState::new(vertices, start)?;

    for _ in 0..vertices.len() {
        let current = state.queue.dequeue()?;
        let current_weight = state.weights[current];

        for neighbor in graph.adjacent_vertices(current)? {
            let candidate = current_weight.saturating_add(graph.out_degree(neighbor)?);
            state.relax(neighbor, current, candidate);
        }
    }

    let target_weight = state.weights[target];
    if target_weight == UNREACHED {
        debug!(%start, %target, "target unreachable, no obscure path");
        return Ok(None);
    }

    let path = reconstruct_path(&state.parent_map, start, target);
    debug!(
        %start,
        %target,
        weight = target_weight,
        hops = path.len() - 1,
        elapsed_ms = search_timer.elapsed().as_millis() as u64,
        "obscure path found"
    );
    Ok(Some(path))
}
