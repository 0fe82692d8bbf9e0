use super::{Graph, GraphView, Vertex};
use crate::error::Result;
use rustc_hash::FxHashMap;

/// Actors as vertices, shared movie titles as edge data.
pub type ActorGraph = EdgeDataGraph<String, String>;

/// A [`Graph`] whose edges each carry a payload.
///
/// Edges can only be added together with their data, so a payload exists
/// exactly when the edge does. Payloads are keyed by source, then target.
#[derive(Debug, Clone)]
pub struct EdgeDataGraph<V: Vertex, D> {
    graph: Graph<V>,
    edge_data: FxHashMap<V, FxHashMap<V, D>>,
}

impl<V: Vertex, D> Default for EdgeDataGraph<V, D> {
    fn default() -> Self {
        Self {
            graph: Graph::default(),
            edge_data: FxHashMap::default(),
        }
    }
}

impl<V: Vertex, D> EdgeDataGraph<V, D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, vertex: V) {
        self.graph.add_vertex(vertex);
    }

    /// Adds `from -> to` carrying `data`, replacing the data of an existing edge.
    pub fn add_edge(&mut self, from: V, to: V, data: D) {
        self.graph.add_edge(from.clone(), to.clone());
        self.edge_data.entry(from).or_default().insert(to, data);
    }

    /// Data stored on `from -> to`, or `None` if there is no such edge.
    pub fn edge_data(&self, from: &V, to: &V) -> Option<&D> {
        self.edge_data.get(from)?.get(to)
    }

    pub fn edges(&self) -> Vec<(V, V)> {
        self.graph.edges()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_data.values().map(FxHashMap::len).sum()
    }

    /// The underlying graph without edge data.
    pub fn graph(&self) -> &Graph<V> {
        &self.graph
    }
}

impl<V: Vertex, D> GraphView<V> for EdgeDataGraph<V, D> {
    fn vertices(&self) -> &[V] {
        self.graph.vertices()
    }

    fn adjacent_vertices(&self, vertex: &V) -> Result<&[V]> {
        self.graph.adjacent_vertices(vertex)
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.graph.contains_vertex(vertex)
    }
}
