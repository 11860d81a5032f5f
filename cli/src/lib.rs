pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod logging;
pub mod search;

// Re-export commonly used items
pub use app::{CastPathApp, run};
pub use args::{Args, Command};
pub use display::format_number;
pub use search::{BatchSummary, answer_connection_queries, answer_path_queries};
