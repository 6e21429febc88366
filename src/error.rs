use thiserror::Error;

/// Errors that can occur while loading recipes.
///
/// Parsing itself is total and never produces one of these; they come from
/// the edges that touch the file system, configuration, or output encoding.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Failed to read a recipe file or list its directory
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Recipe path has no usable file name to derive a base name from
    #[error("Invalid recipe path: {0}")]
    InvalidPath(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Failed to serialize the parsed recipe
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LoadError>;
