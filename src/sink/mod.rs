//! Sink boundary
//!
//! The outbound interface to the warehouse pipeline engine: a sink takes a
//! table name, a write disposition, and a lazy record sequence, and commits
//! the stream into the destination.
//!
//! # Overview
//!
//! - `LoadSink` - The load-execution primitive the orchestrator drives
//! - `LoadSummary` - Row-count metadata returned per load
//! - `FilesystemSink` - NDJSON staging writer with replace semantics
//!
//! Transactionality is the sink's concern. If the record source fails
//! mid-stream, whether already-consumed records stick depends entirely on
//! the sink implementation; `FilesystemSink` leaves a partial staging file
//! that the next replace run overwrites.

mod filesystem;

pub use filesystem::FilesystemSink;

use crate::error::Result;
use crate::fetch::RecordSource;
use crate::types::WriteDisposition;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Metadata summary of one completed load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadSummary {
    /// Destination table that was written
    pub table: String,
    /// Rows committed
    pub rows: u64,
}

impl std::fmt::Display for LoadSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} rows into table '{}'", self.rows, self.table)
    }
}

/// Load-execution primitive: commit a record stream into a destination
/// table under the given write disposition.
#[async_trait]
pub trait LoadSink: Send + Sync {
    /// Drain `records` into `table`.
    ///
    /// Record-source errors (fetch, decode) propagate unchanged; failures
    /// writing to the destination surface as [`crate::error::Error::Sink`].
    async fn load(
        &self,
        table: &str,
        disposition: WriteDisposition,
        records: &mut dyn RecordSource,
    ) -> Result<LoadSummary>;
}
