use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "baconpath")]
#[command(about = "Play the Kevin Bacon game over a movie cast listing")]
pub struct Args {
    /// Movie listing to build the actor graph from
    #[arg(short, long, env = "BACONPATH_MOVIES", default_value = "top250.txt")]
    pub movies: PathBuf,

    /// Actor at the center of the game
    #[arg(short, long, env = "BACONPATH_CENTER", default_value = "Kevin Bacon")]
    pub center: String,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - log search and load details to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Run a single query instead of the interactive menu
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Find a path between two actors
    Path {
        /// Starting actor
        from: String,

        /// Actor to reach
        to: String,

        /// Kind of path to look for
        #[arg(short, long, default_value = "shortest", value_parser = ["shortest", "famous", "obscure"])]
        mode: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Distance statistics for an actor (defaults to the center)
    Stats {
        center: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}
