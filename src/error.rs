//! # Error Handling
//!
//! This module defines the centralized error type for descriptor resolution.
//! It uses the `thiserror` library to build a single `Error` enum covering every
//! hard failure the library can report, each carrying enough context (paths,
//! service names, versions) to diagnose the problem from the message alone.
//!
//! ## Not-found is not an error
//!
//! A provider that simply has no answer for a request returns `Ok(None)`. Only
//! the [`crate::resolver`] turns that outcome into
//! [`Error::UnresolvedDescriptor`]. Everything in this enum is a *hard* error:
//! provider chains propagate it immediately instead of trying the next source.
//!
//! ## Key Components
//!
//! - **`Error`**: every failure mode of the library.
//! - **`Result<T>`**: alias for `std::result::Result<T, Error>`.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for descriptor-registry operations
#[derive(Error, Debug)]
pub enum Error {
    /// A provider was configured with a base directory that does not exist.
    #[error("Invalid descriptor directory: {} does not exist or is not a directory", path.display())]
    InvalidDirectory { path: PathBuf },

    /// The caller asked for a document type outside `api`, `paginator`, `waiter`.
    #[error("Invalid document type: '{value}' (expected one of: api, paginator, waiter)")]
    InvalidDocumentType { value: String },

    /// A descriptor file exists but its contents could not be decoded.
    #[error("Failed to parse descriptor {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// Every available provider reported no result for the request.
    #[error("Unable to resolve {doc_type} descriptor for service '{service}' at version '{version}'")]
    UnresolvedDescriptor {
        doc_type: String,
        service: String,
        version: String,
    },

    /// The manifest file is missing or malformed.
    #[error("Failed to load manifest {}: {message}", path.display())]
    ManifestLoad { path: PathBuf, message: String },

    /// The sources configuration file is invalid.
    ///
    /// Includes an optional hint about how to fix it.
    #[error("Configuration error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Config {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON error outside of descriptor parsing (e.g. writing output).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// An error indicating that a mutex has been poisoned.
    #[error("Lock poisoned: {context}")]
    LockPoisoned { context: String },

    /// An error occurred while encoding a precompiled descriptor.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
