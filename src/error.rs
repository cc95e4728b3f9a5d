use std::path::PathBuf;

use thiserror::Error;

/// Domain categorizer error types
#[derive(Error, Debug)]
pub enum CategorizerError {
    #[error("Failed to read suffix list '{}': {source}", .path.display())]
    SuffixListRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CategorizerError>;
