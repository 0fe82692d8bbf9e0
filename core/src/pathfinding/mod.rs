pub mod bfs;
pub mod famous;
pub mod obscure;
pub mod utils;

// Re-export the public functions
pub use bfs::find_shortest_path;
pub use famous::find_famous_path;
pub use obscure::find_obscure_path;
pub use utils::degree_sum;
