//! Common error types for namecheck

use thiserror::Error;

/// Common result type for namecheck operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types shared by the namecheck crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Explicitly requested file does not exist (config, names list)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input (names list, CLI arguments)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
