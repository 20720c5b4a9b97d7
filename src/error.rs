use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TmdlSlimError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read document: {path}")]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {path}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to scan model folder: {0}")]
    FolderScan(#[from] walkdir::Error),

    #[error("Invalid rule pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TmdlSlimError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
