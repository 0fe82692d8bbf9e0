use crate::error::Result;
use crate::graph::{GraphView, Vertex};
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

/// Depth-first enumeration of simple paths with a fixed vertex count.
///
/// `path` and `visited` grow on descent and shrink on the way back, so each
/// frame leaves them exactly as it found them.
struct FamousPathSearch<'a, V, G> {
    graph: &'a G,
    target: &'a V,
    length: usize,
    path: Vec<V>,
    visited: FxHashSet<&'a V>,
    best: Option<(usize, Vec<V>)>,
}

impl<'a, V: Vertex, G: GraphView<V>> FamousPathSearch<'a, V, G> {
    fn new(graph: &'a G, target: &'a V, length: usize) -> Self {
        Self {
            graph,
            target,
            length,
            path: Vec::with_capacity(length),
            visited: FxHashSet::default(),
            best: None,
        }
    }

    fn descend(&mut self, vertex: &'a V, degree_sum: usize) -> Result<()> {
        let degree_sum = degree_sum + self.graph.out_degree(vertex)?;

        self.path.push(vertex.clone());
        self.visited.insert(vertex);
        let outcome = self.extend(vertex, degree_sum);
        self.visited.remove(vertex);
        self.path.pop();

        outcome
    }

    fn extend(&mut self, vertex: &'a V, degree_sum: usize) -> Result<()> {
        if self.path.len() == self.length {
            if vertex == self.target {
                self.record(degree_sum);
            }
            return Ok(());
        }

        // Too short, and the target can't appear again further down.
        if vertex == self.target {
            return Ok(());
        }

        let graph = self.graph;
        for neighbor in graph.adjacent_vertices(vertex)? {
            if !self.visited.contains(neighbor) {
                self.descend(neighbor, degree_sum)?;
            }
        }
        Ok(())
    }

    fn record(&mut self, degree_sum: usize) {
        let improves = self
            .best
            .as_ref()
            .is_none_or(|(best_sum, _)| degree_sum > *best_sum);
        if improves {
            trace!(degree_sum, "new best famous path");
            self.best = Some((degree_sum, self.path.clone()));
        }
    }
}

/// Simple path of exactly `length` vertices from `start` to `target` whose
/// vertices have the largest total out-degree.
///
/// `length` counts both endpoints, so a direct edge has length 2. The first
/// path found wins ties. Returns `Ok(None)` when no simple path of exactly
/// that length ends at `target`, even if longer or shorter ones do.
/// The search is exponential in `length`.
pub fn find_famous_path<'a, V: Vertex, G: GraphView<V>>(
    graph: &'a G,
    start: &'a V,
    target: &'a V,
    length: usize,
) -> Result<Option<Vec<V>>> {
    graph.require_vertex(start)?;
    graph.require_vertex(target)?;

    if length == 0 {
        return Ok(None);
    }

    let mut search = FamousPathSearch::new(graph, target, length);
    search.descend(start, 0)?;

    match search.best {
        Some((degree_sum, path)) => {
            debug!(%start, %target, length, degree_sum, "famous path found");
            Ok(Some(path))
        }
        None => {
            debug!(%start, %target, length, "no path of the requested length");
            Ok(None)
        }
    }
}
