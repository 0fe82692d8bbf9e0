use super::distribution::get_distance_distribution;
use crate::error::Result;
use crate::graph::{GraphView, Vertex};
use serde::{Deserialize, Serialize};

/// How well connected a center vertex is to the rest of the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CenterStatistics {
    /// Mean distance over every reachable vertex, the center included.
    pub average_distance: f64,
    pub max_distance: usize,
    /// Share of all vertices reachable from the center, 0-100.
    pub percent_connected: f64,
    pub reachable: usize,
    pub total_vertices: usize,
    pub distribution: Vec<usize>,
}

impl CenterStatistics {
    pub fn from_distribution(distribution: Vec<usize>, total_vertices: usize) -> Self {
        let reachable: usize = distribution.iter().sum();
        let distance_sum: usize = distribution
            .iter()
            .enumerate()
            .map(|(distance, count)| distance * count)
            .sum();

        let average_distance = if reachable == 0 {
            0.0
        } else {
            distance_sum as f64 / reachable as f64
        };
        let percent_connected = if total_vertices == 0 {
            0.0
        } else {
            100.0 * reachable as f64 / total_vertices as f64
        };

        Self {
            average_distance,
            max_distance: distribution.len().saturating_sub(1),
            percent_connected,
            reachable,
            total_vertices,
            distribution,
        }
    }
}

pub fn get_center_statistics<V: Vertex, G: GraphView<V>>(
    graph: &G,
    center: &V,
) -> Result<CenterStatistics> {
    let distribution = get_distance_distribution(graph, center)?;
    Ok(CenterStatistics::from_distribution(
        distribution,
        graph.vertex_count(),
    ))
}
