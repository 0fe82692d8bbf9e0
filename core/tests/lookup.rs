use baconpath_core::{ActorGraph, ActorIndex, clean_name};

fn create_test_index() -> ActorIndex {
    ActorIndex::from_names(
        ["Kevin Bacon", "Penélope Cruz", "Robert Downey Jr.", "Sam Smith", "Sam Smíth"]
            .into_iter()
            .map(String::from),
    )
}

#[test]
fn test_clean_name() {
    assert_eq!(clean_name("  Kevin   BACON "), "kevin bacon");
    assert_eq!(clean_name("Penélope Cruz"), "penelope cruz");
    assert_eq!(clean_name("Robert Downey Jr."), "robert downey jr");
}

#[test]
fn test_find_actor_exact() {
    let index = create_test_index();

    assert_eq!(index.find_actor("Kevin Bacon"), Ok("Kevin Bacon"));
    assert_eq!(index.len(), 5);
}

#[test]
fn test_find_actor_forgives_case_accents_and_punctuation() {
    let index = create_test_index();

    assert_eq!(index.find_actor("kevin bacon"), Ok("Kevin Bacon"));
    assert_eq!(index.find_actor("  KEVIN  bacon "), Ok("Kevin Bacon"));
    assert_eq!(index.find_actor("penelope cruz"), Ok("Penélope Cruz"));
    assert_eq!(index.find_actor("robert downey jr"), Ok("Robert Downey Jr."));
}

#[test]
fn test_find_actor_prefers_case_insensitive_exact_among_collisions() {
    let index = create_test_index();

    assert_eq!(index.find_actor("sam smíth"), Ok("Sam Smíth"));
    assert_eq!(index.find_actor("SAM SMITH"), Ok("Sam Smith"));
    // No exact spelling: first registered wins
    assert_eq!(index.find_actor("sam  smith!"), Ok("Sam Smith"));
}

#[test]
fn test_find_actor_unknown() {
    let index = create_test_index();

    assert_eq!(
        index.find_actor("Nobody"),
        Err("Actor 'Nobody' not found in database".to_string())
    );
}

#[test]
fn test_index_from_graph() {
    let mut graph = ActorGraph::new();
    graph.add_edge("Kevin Bacon".into(), "Tom Hanks".into(), "Apollo 13".into());

    let index = ActorIndex::from_graph(&graph);

    assert_eq!(index.len(), 2);
    assert_eq!(index.find_actor("tom hanks"), Ok("Tom Hanks"));
    assert!(!index.is_empty());
}
