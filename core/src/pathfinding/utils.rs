use crate::error::Result;
use crate::graph::{GraphView, Vertex};
use rustc_hash::FxHashMap;

/// Walks `parent_map` back from `target` to `start` and returns the path in
/// forward order. Every vertex on the way must have a recorded parent.
pub fn reconstruct_path<'a, V: Vertex>(
    parent_map: &FxHashMap<&'a V, &'a V>,
    start: &'a V,
    target: &'a V,
) -> Vec<V> {
    let mut path = Vec::new();
    let mut current_node = target;

    while current_node != start {
        path.push(current_node.clone());
        current_node = parent_map[current_node];
    }

    path.push(start.clone());
    path.reverse();
    path
}

/// Sum of the out-degrees of every vertex on `path`.
pub fn degree_sum<V: Vertex, G: GraphView<V>>(graph: &G, path: &[V]) -> Result<usize> {
    path.iter().map(|vertex| graph.out_degree(vertex)).sum()
}
