pub mod error;
pub mod exploration;
pub mod graph;
pub mod lookup;
pub mod min_priority_queue;
pub mod parsing;
pub mod path_mode;
pub mod pathfinding;
pub mod queue;

// Re-export commonly used items
pub use error::{Error, Result};
pub use exploration::{CenterStatistics, get_center_statistics, get_distance_distribution};
pub use graph::{ActorGraph, EdgeDataGraph, Graph, GraphView, Vertex};
pub use lookup::{ActorIndex, clean_name};
pub use min_priority_queue::MinPriorityQueue;
pub use parsing::{LoadError, MovieListing, load_actor_graph, parse_actor_graph};
pub use path_mode::{PathMode, find_path};
pub use pathfinding::{degree_sum, find_famous_path, find_obscure_path, find_shortest_path};
pub use queue::Queue;
