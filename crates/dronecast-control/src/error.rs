//! Error types for the output pipeline
use thiserror::Error;

/// Output pipeline errors
#[derive(Error, Debug)]
pub enum ControlError {
    /// Configuration rejected at setup (bad universe, address, footprint)
    #[error("invalid DMX configuration: {0}")]
    InvalidConfig(String),

    /// I/O error from the transport socket
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for output operations
pub type Result<T> = std::result::Result<T, ControlError>;
