use crate::error::Result;
use crate::graph::{GraphView, Vertex};
use crate::pathfinding::{find_famous_path, find_obscure_path, find_shortest_path};
use serde::{Deserialize, Serialize};

/// Which kind of path a query asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathMode {
    /// Fewest hops.
    #[default]
    Shortest,
    /// Shortest hop count, then the best-connected vertices.
    Famous,
    /// Least-connected vertices, any hop count.
    Obscure,
}

impl PathMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PathMode::Shortest => "shortest",
            PathMode::Famous => "famous",
            PathMode::Obscure => "obscure",
        }
    }
}

impl From<&str> for PathMode {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "famous" => PathMode::Famous,
            "obscure" => PathMode::Obscure,
            _ => PathMode::Shortest,
        }
    }
}

impl From<String> for PathMode {
    fn from(s: String) -> Self {
        PathMode::from(s.as_str())
    }
}

impl std::fmt::Display for PathMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs the search selected by `mode`.
///
/// A famous path keeps the shortest path's vertex count, so it is `None`
/// whenever no shortest path exists.
pub fn find_path<'a, V: Vertex, G: GraphView<V>>(
    graph: &'a G,
    from: &'a V,
    to: &'a V,
    mode: PathMode,
) -> Result<Option<Vec<V>>> {
    match mode {
        PathMode::Shortest => find_shortest_path(graph, from, to),
        PathMode::Famous => match find_shortest_path(graph, from, to)? {
            Some(shortest) => find_famous_path(graph, from, to, shortest.len()),
            None => Ok(None),
        },
        PathMode::Obscure => find_obscure_path(graph, from, to),
    }
}
