//! Common types used throughout restload
//!
//! Shared type definitions and type aliases used across multiple modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// A single record extracted from the API — one JSON object per NDJSON line.
///
/// Records are opaque to the core: no schema is enforced here, conformance
/// is the destination's responsibility.
pub type Record = serde_json::Value;

// ============================================================================
// Load Mode
// ============================================================================

/// Load mode for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadMode {
    /// Reload all history, bounded above by end of yesterday
    Full,
    /// Reload exactly the previous calendar day
    Incremental,
}

impl std::fmt::Display for LoadMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadMode::Full => write!(f, "full"),
            LoadMode::Incremental => write!(f, "incremental"),
        }
    }
}

// ============================================================================
// Write Disposition
// ============================================================================

/// How data is committed into the destination table.
///
/// Every load replaces the destination table, full and incremental alike —
/// incremental loads replace the table's data for the affected window rather
/// than appending or merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteDisposition {
    /// Overwrite the destination table on every load
    #[default]
    Replace,
}

impl std::fmt::Display for WriteDisposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteDisposition::Replace => write!(f, "replace"),
        }
    }
}
