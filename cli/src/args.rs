use castpath_core::{ConnectivityStrategy, SearchMode};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "castpath")]
#[command(about = "Find how actors are connected through the movies they share")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose mode - debug logging and corpus statistics
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode - no progress bar and no summary
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write the shortest connecting path for every actor pair
    Path {
        /// Tab-separated cast file: actor, movie title, year
        cast_file: PathBuf,

        /// u for fewest movies, w for recency-weighted distance
        mode: SearchMode,

        /// Tab-separated actor pairs
        query_file: PathBuf,

        /// Where rendered paths are written
        output_file: PathBuf,
    },

    /// Write the earliest year every actor pair becomes connected
    Connect {
        /// Tab-separated cast file: actor, movie title, year
        cast_file: PathBuf,

        /// Tab-separated actor pairs
        query_file: PathBuf,

        /// Where actor pairs and years are written
        output_file: PathBuf,

        /// bfs or ufind
        #[arg(default_value = "bfs")]
        strategy: ConnectivityStrategy,
    },
}

impl Command {
    pub fn cast_file(&self) -> &PathBuf {
        match self {
            Command::Path { cast_file, .. } | Command::Connect { cast_file, .. } => cast_file,
        }
    }

    pub fn query_file(&self) -> &PathBuf {
        match self {
            Command::Path { query_file, .. } | Command::Connect { query_file, .. } => query_file,
        }
    }

    pub fn output_file(&self) -> &PathBuf {
        match self {
            Command::Path { output_file, .. } | Command::Connect { output_file, .. } => output_file,
        }
    }
}
