//! # restload
//!
//! A batch loader that extracts records from a line-delimited JSON REST
//! API and stages them for a tabular warehouse.
//!
//! ## Features
//!
//! - **Full and incremental loads**: full runs reload all history bounded
//!   at end of yesterday; incremental runs reload exactly the previous
//!   calendar day. Both replace the destination table.
//! - **Per-resource overrides**: an `always_full` flag forces full-load
//!   semantics for small reference resources even on incremental runs.
//! - **Streaming ingest**: the NDJSON response body is decoded line by
//!   line as the sink drains it, so memory stays bounded regardless of
//!   response size.
//! - **Failure isolation**: one resource failing never aborts its
//!   siblings; each run reports per-resource outcomes.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use restload::catalog::ResourceCatalog;
//! use restload::credentials::EnvCredential;
//! use restload::fetch::Fetcher;
//! use restload::orchestrator::LoadOrchestrator;
//! use restload::sink::FilesystemSink;
//!
//! # async fn example() -> restload::Result<()> {
//! let orchestrator = LoadOrchestrator::new(
//!     ResourceCatalog::load("configs/resources.json")?,
//!     Fetcher::new()?,
//!     Box::new(EnvCredential::new("RESTLOAD_TOKEN")),
//!     Box::new(FilesystemSink::new("/var/staging", "main")),
//!     "https://api.example.com/export",
//! );
//!
//! let outcomes = orchestrator.run_incremental(chrono::Utc::now()).await;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! catalog ─► window ─► request ─► fetch ─► sink
//!                    (orchestrator sequences per resource)
//! ```
//!
//! Resources are loaded one at a time, in catalog order. The only
//! suspension point is the streaming network read.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Resource catalog parsing and lookup
pub mod catalog;

/// Load window planning
pub mod window;

/// Request descriptor building
pub mod request;

/// Streaming fetch and NDJSON decoding
pub mod fetch;

/// Sink boundary and staging writer
pub mod sink;

/// Run orchestration
pub mod orchestrator;

/// Credential provision
pub mod credentials;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::{LoadMode, Record, WriteDisposition};

pub use catalog::ResourceCatalog;
pub use orchestrator::{LoadOrchestrator, LoadOutcome, LoadStatus};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
