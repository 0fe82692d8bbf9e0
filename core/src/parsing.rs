//! Loader for the plain-text movie listing.
//!
//! ```text
//! Movie: The Shawshank Redemption
//! Actor: Tim Robbins
//! Actor: Morgan Freeman
//! Movie: Apollo 13
//! Actor: Kevin Bacon
//! ```
//!
//! A `Movie:` line opens a cast. Any other line names an actor: its first
//! token is a label and the rest is the name.

use crate::graph::{ActorGraph, GraphView};
use rustc_hash::FxHashMap;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    time::Instant,
};
use thiserror::Error;
use tracing::debug;

const MOVIE_LABEL: &str = "Movie:";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read movie listing: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: actor listed before any movie")]
    ActorBeforeMovie { line: usize },

    #[error("line {line}: label without a name")]
    MissingName { line: usize },
}

/// Casts grouped by title, in first-listed title order. A repeated
/// `Movie:` line starts that title's cast over.
#[derive(Debug, Default)]
pub struct MovieListing {
    titles: Vec<String>,
    casts: FxHashMap<String, Vec<String>>,
}

impl MovieListing {
    pub fn parse<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        let mut listing = Self::default();
        let mut current_title: Option<String> = None;

        for (line_index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = line_index + 1;

            let mut tokens = line.split_whitespace();
            let Some(label) = tokens.next() else {
                continue;
            };
            let name = tokens.collect::<Vec<&str>>().join(" ");
            if name.is_empty() {
                return Err(LoadError::MissingName { line: line_number });
            }

            if label == MOVIE_LABEL {
                listing.add_movie(&name);
                current_title = Some(name);
            } else {
                let title = current_title
                    .as_deref()
                    .ok_or(LoadError::ActorBeforeMovie { line: line_number })?;
                listing.add_actor(title, name);
            }
        }

        Ok(listing)
    }

    fn add_movie(&mut self, title: &str) {
        match self.casts.get_mut(title) {
            Some(cast) => cast.clear(),
            None => {
                self.titles.push(title.to_string());
                self.casts.insert(title.to_string(), Vec::new());
            }
        }
    }

    fn add_actor(&mut self, title: &str, actor: String) {
        self.casts.entry(title.to_string()).or_default().push(actor);
    }

    pub fn movie_count(&self) -> usize {
        self.titles.len()
    }

    pub fn cast(&self, title: &str) -> Option<&[String]> {
        self.casts.get(title).map(Vec::as_slice)
    }

    /// Links every pair of distinct co-stars both ways, labelled with the
    /// movie. Movies are applied in listing order, so the last shared movie
    /// wins the label. Actors with no co-stars don't become vertices.
    pub fn into_graph(self) -> ActorGraph {
        let mut graph = ActorGraph::new();

        for title in &self.titles {
            let cast = &self.casts[title];
            for first in cast {
                for second in cast {
                    if first != second {
                        graph.add_edge(first.clone(), second.clone(), title.clone());
                    }
                }
            }
        }

        graph
    }
}

pub fn parse_actor_graph<R: BufRead>(reader: R) -> Result<ActorGraph, LoadError> {
    Ok(MovieListing::parse(reader)?.into_graph())
}

pub fn load_actor_graph(listing_path: &Path) -> Result<ActorGraph, LoadError> {
    let load_timer = Instant::now();
    let file = File::open(listing_path)?;
    let listing = MovieListing::parse(BufReader::new(file))?;
    let movie_count = listing.movie_count();
    let graph = listing.into_graph();

    debug!(
        path = %listing_path.display(),
        movies = movie_count,
        actors = graph.vertex_count(),
        edges = graph.edge_count(),
        elapsed_ms = load_timer.elapsed().as_millis() as u64,
        "actor graph loaded"
    );
    Ok(graph)
}
