use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file could not be opened or mapped.
    #[error("failed to read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    pub fn unreadable(path: &std::path::Path, source: std::io::Error) -> Self {
        LoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        }
    }
}
