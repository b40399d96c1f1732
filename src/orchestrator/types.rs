//! Orchestrator types
//!
//! Per-resource outcome reporting.

use crate::sink::LoadSummary;
use serde::{Deserialize, Serialize};

/// Terminal state of one resource load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum LoadStatus {
    /// The resource's stream was fully committed
    Succeeded {
        /// Row-count metadata from the sink
        summary: LoadSummary,
    },
    /// The load failed; sibling resources are unaffected
    Failed {
        /// Human-readable error description
        error: String,
    },
}

/// Result of one resource load within a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOutcome {
    /// Resource the outcome belongs to
    pub resource: String,
    /// Terminal state
    #[serde(flatten)]
    pub status: LoadStatus,
}

impl LoadOutcome {
    /// Build a success outcome
    pub fn succeeded(resource: impl Into<String>, summary: LoadSummary) -> Self {
        Self {
            resource: resource.into(),
            status: LoadStatus::Succeeded { summary },
        }
    }

    /// Build a failure outcome
    pub fn failed(resource: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self {
            resource: resource.into(),
            status: LoadStatus::Failed {
                error: error.to_string(),
            },
        }
    }

    /// Whether the load succeeded
    pub fn is_success(&self) -> bool {
        matches!(self.status, LoadStatus::Succeeded { .. })
    }
}

impl std::fmt::Display for LoadOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.status {
            LoadStatus::Succeeded { summary } => {
                write!(f, "{}: succeeded ({summary})", self.resource)
            }
            LoadStatus::Failed { error } => write!(f, "{}: failed ({error})", self.resource),
        }
    }
}
