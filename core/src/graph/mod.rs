mod edge_data;

pub use edge_data::{ActorGraph, EdgeDataGraph};

use crate::error::{Error, Result};
use rustc_hash::FxHashMap;
use std::{fmt::Display, hash::Hash};

/// Anything usable as a vertex identity.
pub trait Vertex: Clone + Eq + Hash + Display {}

impl<T: Clone + Eq + Hash + Display> Vertex for T {}

/// Read-only view shared by [`Graph`] and [`EdgeDataGraph`].
///
/// Every search in this crate is generic over this trait, so searches never
/// see edge data and can't mutate the graph.
pub trait GraphView<V: Vertex> {
    /// All vertices in insertion order.
    fn vertices(&self) -> &[V];

    /// Out-neighbours of `vertex` in edge insertion order.
    fn adjacent_vertices(&self, vertex: &V) -> Result<&[V]>;

    fn contains_vertex(&self, vertex: &V) -> bool;

    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    fn out_degree(&self, vertex: &V) -> Result<usize> {
        self.adjacent_vertices(vertex).map(<[V]>::len)
    }

    fn is_adjacent(&self, from: &V, to: &V) -> Result<bool> {
        Ok(self.adjacent_vertices(from)?.contains(to))
    }

    /// Fails with [`Error::VertexNotFound`] unless `vertex` is present.
    fn require_vertex(&self, vertex: &V) -> Result<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(Error::VertexNotFound(vertex.to_string()))
        }
    }
}

/// Directed graph stored as adjacency lists. Parallel edges are suppressed.
#[derive(Debug, Clone)]
pub struct Graph<V: Vertex> {
    vertices: Vec<V>,
    adjacency: FxHashMap<V, Vec<V>>,
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            adjacency: FxHashMap::default(),
        }
    }
}

impl<V: Vertex> Graph<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `vertex` with no edges. Does nothing if it is already present.
    pub fn add_vertex(&mut self, vertex: V) {
        if !self.adjacency.contains_key(&vertex) {
            self.adjacency.insert(vertex.clone(), Vec::new());
            self.vertices.push(vertex);
        }
    }

    /// Adds the directed edge `from -> to`, inserting either endpoint if needed.
    ///
    /// Returns `false` when the edge was already present.
    pub fn add_edge(&mut self, from: V, to: V) -> bool {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());

        let neighbors = self.adjacency.entry(from).or_default();
        if neighbors.contains(&to) {
            return false;
        }
        neighbors.push(to);
        true
    }

    /// Every `(from, to)` pair, grouped by source vertex in insertion order.
    pub fn edges(&self) -> Vec<(V, V)> {
        self.vertices
            .iter()
            .flat_map(|from| {
                self.adjacency
                    .get(from)
                    .into_iter()
                    .flatten()
                    .map(move |to| (from.clone(), to.clone()))
            })
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

impl<V: Vertex> GraphView<V> for Graph<V> {
    fn vertices(&self) -> &[V] {
        &self.vertices
    }

    fn adjacent_vertices(&self, vertex: &V) -> Result<&[V]> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::VertexNotFound(vertex.to_string()))
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }
}
