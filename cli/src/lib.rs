pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod json_output;
pub mod logging;
pub mod query;
pub mod session;

// Re-export commonly used items
pub use app::BaconPathApp;
pub use args::{Args, Command};
pub use colors::ColorScheme;
pub use query::{PathQuery, run_path_query, run_stats_query};
pub use session::{MenuChoice, Session};
