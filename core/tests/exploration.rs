use baconpath_core::{
    CenterStatistics, Error, Graph, get_center_statistics, get_distance_distribution,
};

fn name(s: &str) -> String {
    s.to_string()
}

fn create_undirected_graph(pairs: &[(&str, &str)]) -> Graph<String> {
    let mut graph = Graph::new();
    for &(a, b) in pairs {
        graph.add_edge(name(a), name(b));
        graph.add_edge(name(b), name(a));
    }
    graph
}

#[test]
fn test_star_distribution() {
    let graph = create_undirected_graph(&[("X", "Y"), ("X", "Z"), ("X", "W")]);

    assert_eq!(get_distance_distribution(&graph, &name("X")).unwrap(), vec![1, 3]);
    assert_eq!(get_distance_distribution(&graph, &name("Y")).unwrap(), vec![1, 1, 2]);
}

#[test]
fn test_chain_distribution() {
    let graph = create_undirected_graph(&[("A", "B"), ("B", "C"), ("C", "D")]);

    assert_eq!(
        get_distance_distribution(&graph, &name("A")).unwrap(),
        vec![1, 1, 1, 1]
    );
    assert_eq!(get_distance_distribution(&graph, &name("B")).unwrap(), vec![1, 2, 1]);
}

#[test]
fn test_distribution_counts_each_vertex_once() {
    // Both B and C reach D; D must be counted a single time at distance 2
    let graph = create_undirected_graph(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);

    assert_eq!(get_distance_distribution(&graph, &name("A")).unwrap(), vec![1, 2, 1]);
}

#[test]
fn test_distribution_ignores_unreachable_vertices() {
    let graph = create_undirected_graph(&[("A", "B"), ("C", "D"), ("D", "E")]);

    let distribution = get_distance_distribution(&graph, &name("A")).unwrap();

    assert_eq!(distribution, vec![1, 1]);
    assert_eq!(distribution.iter().sum::<usize>(), 2);
}

#[test]
fn test_distribution_of_isolated_vertex() {
    let mut graph: Graph<String> = Graph::new();
    graph.add_vertex(name("Alone"));

    assert_eq!(get_distance_distribution(&graph, &name("Alone")).unwrap(), vec![1]);
}

#[test]
fn test_distribution_follows_edge_direction() {
    let mut graph = Graph::new();
    graph.add_edge(name("A"), name("B"));
    graph.add_edge(name("B"), name("C"));

    assert_eq!(get_distance_distribution(&graph, &name("A")).unwrap(), vec![1, 1, 1]);
    assert_eq!(get_distance_distribution(&graph, &name("C")).unwrap(), vec![1]);
}

#[test]
fn test_distribution_of_missing_center_fails() {
    let graph = create_undirected_graph(&[("A", "B")]);

    assert_eq!(
        get_distance_distribution(&graph, &name("Z")),
        Err(Error::VertexNotFound(name("Z")))
    );
}

#[test]
fn test_center_statistics() {
    let graph = create_undirected_graph(&[("A", "B"), ("B", "C"), ("C", "D"), ("E", "F")]);

    let stats = get_center_statistics(&graph, &name("A")).unwrap();

    assert_eq!(stats.distribution, vec![1, 1, 1, 1]);
    assert_eq!(stats.reachable, 4);
    assert_eq!(stats.total_vertices, 6);
    assert_eq!(stats.max_distance, 3);
    assert!((stats.average_distance - 1.5).abs() < 1e-9);
    assert!((stats.percent_connected - 200.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_statistics_from_star_distribution() {
    let stats = CenterStatistics::from_distribution(vec![1, 3], 4);

    assert!((stats.average_distance - 0.75).abs() < 1e-9);
    assert_eq!(stats.max_distance, 1);
    assert!((stats.percent_connected - 100.0).abs() < 1e-9);
}

#[test]
fn test_statistics_serialize_to_json() {
    let stats = CenterStatistics::from_distribution(vec![1, 2], 3);

    let json = serde_json::to_value(&stats).unwrap();

    assert_eq!(json["max_distance"], 1);
    assert_eq!(json["reachable"], 3);
    assert_eq!(json["distribution"], serde_json::json!([1, 2]));
}
