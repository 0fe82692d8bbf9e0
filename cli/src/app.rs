use baconpath_core::{ActorGraph, ActorIndex, load_actor_graph};
use std::{error::Error, path::Path};
use tracing::info;

pub struct BaconPathApp {
    pub graph: ActorGraph,
    pub index: ActorIndex,
}

impl BaconPathApp {
    pub fn load(movies_path: &Path) -> Result<Self, Box<dyn Error>> {
        if !movies_path.exists() {
            return Err(format!("Movie listing not found: {:?}", movies_path).into());
        }

        let graph = load_actor_graph(movies_path)?;
        if graph.edge_count() == 0 {
            return Err(format!("No co-starring actors found in {:?}", movies_path).into());
        }

        Ok(Self::from_graph(graph))
    }

    pub fn from_graph(graph: ActorGraph) -> Self {
        let index = ActorIndex::from_graph(&graph);
        info!(actors = index.len(), edges = graph.edge_count(), "actor graph ready");
        Self { graph, index }
    }

    /// Canonical vertex name for what the user typed.
    pub fn resolve_actor(&self, name: &str) -> Result<String, String> {
        self.index.find_actor(name).map(str::to_string)
    }
}
