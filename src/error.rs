//! Error types for clust

use thiserror::Error;

/// Result type alias for clust operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in clust operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("Key too long: {len} symbols, maximum is {max}")]
    KeyTooLong { len: usize, max: usize },

    #[error("Invalid record on line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    #[error("Config error: {0}")]
    Config(String),
}
