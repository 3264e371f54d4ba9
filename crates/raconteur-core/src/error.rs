//! Error types for the Raconteur story pipeline.
//!
//! Errors are organized by layer: the inference client reports what went
//! wrong on the wire, each stage reports its own failure kind, and the
//! orchestrator only ever sees stage failures.

use thiserror::Error;

/// Top-level error type for Raconteur operations.
#[derive(Error, Debug)]
pub enum RaconteurError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A pipeline stage failed
    #[error("Pipeline error: {0}")]
    Stage(#[from] StageError),

    /// Image URL preflight validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Failures of a single remote inference call.
///
/// The client performs exactly one round trip per call; whether a failure is
/// retried is entirely the caller's decision, so these variants carry enough
/// context for that decision without prescribing one.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The endpoint could not be reached (connection, DNS, timeout)
    #[error("transport failure for {endpoint}: {message}")]
    Transport { endpoint: String, message: String },

    /// The endpoint answered with a non-success status
    #[error("{endpoint} rejected request with HTTP {status}: {body}")]
    RemoteRejected {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// Success status, but the body does not match the expected shape
    #[error("malformed response from {endpoint}: {message}")]
    MalformedResponse { endpoint: String, message: String },
}

/// Per-stage pipeline failures.
#[derive(Error, Debug)]
pub enum StageError {
    /// Captioning is a single shot; any client error surfaces here unchanged
    #[error("captioning failed: {0}")]
    CaptioningFailed(String),

    /// Every candidate model exhausted its retry budget
    #[error("story generation exhausted all {candidates} candidate models (last error: {last_error})")]
    StoryGenerationExhausted {
        candidates: usize,
        last_error: String,
    },

    /// Speech synthesis is a single shot; any client error surfaces here unchanged
    #[error("narration failed: {0}")]
    NarrationFailed(String),
}

/// Image URL preflight failures.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The URL could not be fetched at all
    #[error("image URL unreachable: {0}")]
    Unreachable(String),

    /// The URL answered with a non-success status
    #[error("image URL returned HTTP {0}")]
    BadStatus(u16),

    /// The URL serves something other than an image
    #[error("URL does not point at an image (content-type: {0})")]
    NotAnImage(String),
}

/// Convenience type alias for Raconteur results.
pub type Result<T> = std::result::Result<T, RaconteurError>;
