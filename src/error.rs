//! Error types for quantumnexus

use thiserror::Error;

/// Main error type for quantumnexus operations
#[derive(Error, Debug)]
pub enum Error {
    /// Rendered exactly as clap formats it (usage, help and version included)
    #[error("{0}")]
    Usage(#[from] clap::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias for quantumnexus operations
pub type Result<T> = std::result::Result<T, Error>;
