use crate::graph::{GraphView, Vertex};
use rustc_hash::FxHashMap;
use unidecode::unidecode;

/// Folds a name for lookup: ASCII transliteration, lowercase, no
/// punctuation, single spaces.
pub fn clean_name(input: &str) -> String {
    unidecode(input)
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Resolves typed names to vertex names, forgiving case, accents and spacing.
#[derive(Debug, Clone, Default)]
pub struct ActorIndex {
    exact: FxHashMap<String, String>,
    cleaned: FxHashMap<String, Vec<String>>,
}

impl ActorIndex {
    pub fn from_graph<V: Vertex, G: GraphView<V>>(graph: &G) -> Self {
        Self::from_names(graph.vertices().iter().map(ToString::to_string))
    }

    pub fn from_names<I: IntoIterator<Item = String>>(names: I) -> Self {
        let mut index = Self::default();
        for name in names {
            index
                .cleaned
                .entry(clean_name(&name))
                .or_default()
                .push(name.clone());
            index.exact.insert(name.clone(), name);
        }
        index
    }

    pub fn len(&self) -> usize {
        self.exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }

    /// Exact name first, then a case-insensitive exact match among names
    /// that clean to the same string, then the first of those names.
    pub fn find_actor(&self, query: &str) -> Result<&str, String> {
        if let Some(name) = self.exact.get(query) {
            return Ok(name.as_str());
        }

        let candidates = self
            .cleaned
            .get(&clean_name(query))
            .filter(|names| !names.is_empty())
            .ok_or_else(|| format!("Actor '{}' not found in database", query.trim()))?;

        if candidates.len() == 1 {
            return Ok(candidates[0].as_str());
        }

        // Multiple matches - prioritize exact match (case-insensitive)
        let lowercase_query = query.trim().to_lowercase();
        let best = candidates
            .iter()
            .find(|name| name.to_lowercase() == lowercase_query)
            .unwrap_or(&candidates[0]);
        Ok(best.as_str())
    }
}
