//! Error types for armorylib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a catalog or building tables
#[derive(Error, Debug)]
pub enum ArmoryError {
    /// Failed to read a catalog file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// HTTP fetch of a remote catalog failed
    #[error("failed to fetch '{url}': {message}")]
    Fetch { url: String, message: String },

    /// Payload is not valid JSON
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record in the item array does not fit the item schema
    #[error("invalid item record at position {position}: {source}")]
    InvalidRecord {
        position: usize,
        source: serde_json::Error,
    },

    /// Payload is valid JSON but carries no item array
    #[error("malformed catalog: {0}")]
    MalformedCatalog(String),

    /// Type identifier is not one of the recognized item types
    #[error("unknown item type '{0}' (run `armory types` for the list)")]
    UnknownItemType(String),

    /// Presentation sink failed to render a table
    #[error("render error: {0}")]
    Render(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
