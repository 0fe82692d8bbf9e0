use baconpath_core::{ActorGraph, CenterStatistics, PathMode, degree_sum};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct JsonPathOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub from: String,
    pub to: String,
    pub mode: PathMode,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hops: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree_sum: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<JsonStep>>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStep {
    pub actor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie_with_previous: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStatsOutput {
    pub center: String,
    #[serde(flatten)]
    pub statistics: CenterStatistics,
}

pub fn create_path_json(
    graph: &ActorGraph,
    from: String,
    to: String,
    mode: PathMode,
    path: Option<&[String]>,
) -> baconpath_core::Result<JsonPathOutput> {
    let result = match path {
        Some(path) => JsonResult {
            found: true,
            hops: Some(path.len().saturating_sub(1)),
            degree_sum: Some(degree_sum(graph, path)?),
            path: Some(create_json_steps(graph, path)),
        },
        None => JsonResult {
            found: false,
            hops: None,
            degree_sum: None,
            path: None,
        },
    };

    Ok(JsonPathOutput {
        query: JsonQuery { from, to, mode },
        result,
    })
}

fn create_json_steps(graph: &ActorGraph, path: &[String]) -> Vec<JsonStep> {
    path.iter()
        .enumerate()
        .map(|(i, actor)| JsonStep {
            actor: actor.clone(),
            movie_with_previous: if i > 0 {
                graph.edge_data(&path[i - 1], actor).cloned()
            } else {
                None
            },
        })
        .collect()
}
