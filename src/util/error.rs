//! Error types for the particle export pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for export operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Scene file does not exist or cannot be accessed
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Target reference names nothing in the scene
    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    /// Primitive is not a point cloud
    #[error("Unsupported Primitive type: {0}")]
    UnsupportedPrimitive(String),

    /// Target is neither a primitive nor a model
    #[error("Unsupported Target ClassID: {0}")]
    UnsupportedTarget(String),

    /// No particle writer is registered for this extension
    #[error("Unknown particle file format: {0:?}")]
    UnknownFormat(String),

    /// Attribute kind has no marshaller
    #[error("Unsupported data type: {0}")]
    UnsupportedDataKind(String),

    /// Channel storage does not match the values written into it
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// A channel with this name already exists in the record set
    #[error("Duplicate channel: {0}")]
    DuplicateChannel(String),

    /// Host value array length differs from the point count
    #[error("Point count mismatch: expected {expected}, got {actual}")]
    PointCountMismatch { expected: usize, actual: usize },

    /// Format needs a channel the record set does not carry
    #[error("Missing required channel {channel:?} for {format} output")]
    MissingChannel { format: &'static str, channel: String },

    /// Output extension names a different format than the exporter writes
    #[error("Output {path:?} does not name a {expected} file")]
    FormatMismatch { expected: &'static str, path: String },

    /// Channel name cannot be encoded by the format
    #[error("Invalid channel name {name:?}: {reason}")]
    InvalidChannelName { name: String, reason: String },

    /// Writing the particle file failed
    #[error("Write failed: {0}")]
    WriteFailed(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Scene description could not be parsed
    #[error("Invalid scene description: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an "other" error from a string.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Create a write failure error.
    pub fn write_failed(msg: impl Into<String>) -> Self {
        Self::WriteFailed(msg.into())
    }
}

/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, Error>;
