//! Error types for restload
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Errors fall into two tiers: configuration errors are fatal and abort a
//! run before any network activity, while everything else is scoped to a
//! single resource and caught at the orchestrator boundary.

use thiserror::Error;

/// The main error type for restload
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors (fatal)
    // ============================================================================
    /// Bad or missing configuration; aborts startup
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Malformed resource entry; a contract violation, unreachable through
    /// a validated catalog
    #[error("Invalid resource definition: {message}")]
    InvalidResource { message: String },

    /// A named resource is absent from the catalog
    #[error("Resource '{name}' not found in catalog")]
    ResourceNotFound { name: String },

    // ============================================================================
    // Fetch Errors (per-resource)
    // ============================================================================
    /// The API answered with a non-2xx status
    #[error("API request failed with status {status}")]
    HttpStatus { status: u16 },

    /// Transport-level HTTP failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL does not parse
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A malformed NDJSON line; terminates that resource's stream
    #[error("Malformed JSON on line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    // ============================================================================
    // Sink Errors (per-resource)
    // ============================================================================
    /// Destination write failure
    #[error("Sink error: {message}")]
    Sink { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    /// JSON (de)serialization failure outside the record stream
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Filesystem failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid resource error
    pub fn invalid_resource(message: impl Into<String>) -> Self {
        Self::InvalidResource {
            message: message.into(),
        }
    }

    /// Create a resource-not-found error
    pub fn resource_not_found(name: impl Into<String>) -> Self {
        Self::ResourceNotFound { name: name.into() }
    }

    /// Create a sink error
    pub fn sink(message: impl Into<String>) -> Self {
        Self::Sink {
            message: message.into(),
        }
    }

    /// Whether this error aborts the whole run rather than a single resource
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Config { .. } | Error::InvalidResource { .. } | Error::ResourceNotFound { .. }
        )
    }
}

/// Result type alias for restload
pub type Result<T> = std::result::Result<T, Error>;
