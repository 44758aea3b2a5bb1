//! Error types for the snapshotter

use thiserror::Error;

/// Result type alias for snapshot operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing a pixel buffer
#[derive(Error, Debug)]
pub enum Error {
    /// The drawing surface or pixel buffer could not be allocated
    #[error("Unable to allocate a {width}x{height} surface")]
    ResourceExhaustion { width: u32, height: u32 },

    /// No asset with this identifier exists in the resolver
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// The asset exists but could not be decoded
    #[error("Failed to decode resource {id}: {reason}")]
    DecodeFailure { id: String, reason: String },

    /// Failed to encode a buffer for export
    #[error("Encoding failed: {0}")]
    EncodeFailure(String),

    /// Raw pixel data that does not match its declared dimensions
    #[error("Invalid pixel buffer: {0}")]
    InvalidBuffer(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl Error {
    /// Whether the caller can reasonably recover, e.g. by substituting a
    /// default icon. Allocation failures are never recoverable.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::ResourceNotFound(_) | Error::DecodeFailure { .. })
    }
}
