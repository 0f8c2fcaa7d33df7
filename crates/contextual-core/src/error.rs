//! Core error types for contextual-core.
//!
//! Location and eligibility outcomes are never errors -- they are typed
//! [`crate::engine::DecisionStatus`] values. The error hierarchy below
//! covers the genuine failure surfaces: storage, configuration and the
//! remote planner boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for contextual-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Memory-store errors
    #[error("Memory store error: {0}")]
    Memory(#[from] MemoryError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Remote planner errors
    #[error("Remote planner error: {0}")]
    Remote(#[from] RemoteError),

    /// Connector fetch errors
    #[error("Connector error: {0}")]
    Fetch(#[from] crate::connector::FetchError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Memory-store errors.
#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("Failed to read memory snapshot at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to persist memory snapshot at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode memory snapshot: {0}")]
    DecodeFailed(#[from] serde_json::Error),

    #[error("Failed to access data directory: {0}")]
    DataDir(String),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    #[error("Failed to parse configuration: {0}")]
    ParseFailed(#[from] toml::de::Error),

    #[error("Failed to serialize configuration: {0}")]
    SerializeFailed(#[from] toml::ser::Error),

    #[error("Failed to access data directory: {0}")]
    DataDir(String),
}

/// Remote planner errors. Every variant is recoverable by substituting
/// the local evaluator.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("Invalid planner endpoint '{0}'")]
    InvalidEndpoint(String),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Planner returned HTTP {status}: {body}")]
    BadStatus { status: u16, body: String },

    #[error("Planner response did not decode: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Planner response malformed: {0}")]
    Malformed(String),

    #[error("Request superseded by a newer one")]
    Superseded,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
