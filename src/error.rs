//! Error types for starsweep
//!
//! This module provides comprehensive error handling for the library, including:
//! - Domain-specific error types (Resolve, Checkpoint, Row, DataBank)
//! - Context information (identifier, field, file path, HTTP status)
//! - A crate-wide [`Result`] alias

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for starsweep operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for starsweep
///
/// This is the primary error type used throughout the library. Each variant includes
/// contextual information to help diagnose issues.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "sweep.star_count")
        key: Option<String>,
    },

    /// Object resolution failed
    #[error("resolve error: {0}")]
    Resolve(#[from] ResolveError),

    /// Checkpoint load or persist failed
    #[error("checkpoint error: {0}")]
    Checkpoint(#[from] CheckpointError),

    /// Databank operation failed
    #[error("databank error: {0}")]
    DataBank(#[from] DataBankError),

    /// Record could not be serialized to an output row
    #[error("row error: {0}")]
    Row(#[from] RowError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Object resolution errors
///
/// Every failure mode of a single lookup against the catalog service. The sweep
/// treats all of these as recoverable: the identifier is logged and skipped.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Transport-level failure (DNS, connect, timeout, body read)
    #[error("network error resolving {ident}: {source}")]
    Network {
        /// The identifier being resolved when the failure occurred
        ident: String,
        /// The underlying transport error
        source: reqwest::Error,
    },

    /// The service answered with a non-success HTTP status
    #[error("service returned status {status} for {ident}")]
    Status {
        /// The identifier being resolved
        ident: String,
        /// The HTTP status code returned by the service
        status: u16,
    },

    /// The service answered but knows no object by this identifier
    #[error("no object found for {ident}")]
    NotFound {
        /// The identifier the service did not recognize
        ident: String,
    },
}

/// Row serialization errors
///
/// Raised when a resolved record cannot form a single delimited output line,
/// or when a stored line cannot be read back into a record.
#[derive(Debug, Error)]
pub enum RowError {
    /// A field embeds the delimiter or a line break
    #[error("field {field} of {ident} cannot form a delimited row")]
    UnserializableField {
        /// The identifier of the record that failed to serialize
        ident: String,
        /// The name of the offending field
        field: &'static str,
    },

    /// A stored row does not parse back into a record
    #[error("malformed row: {reason}")]
    Malformed {
        /// Why the row was rejected
        reason: String,
    },
}

/// Checkpoint errors
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// The checkpoint file exists but cannot be interpreted
    #[error("corrupt checkpoint at {path}: {reason}")]
    Corrupt {
        /// Path of the unreadable checkpoint file
        path: PathBuf,
        /// Why the document was rejected
        reason: String,
    },
}

/// Databank errors
#[derive(Debug, Error)]
pub enum DataBankError {
    /// A save was requested but no file path is known
    #[error("no databank path specified")]
    NoPath,
}
