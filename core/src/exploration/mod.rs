pub mod distribution;
pub mod statistics;

pub use distribution::get_distance_distribution;
pub use statistics::{CenterStatistics, get_center_statistics};
