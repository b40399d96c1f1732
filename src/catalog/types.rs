//! Catalog types
//!
//! Serde targets for the JSON resource catalog.

use serde::{Deserialize, Serialize};

// ============================================================================
// Catalog Definition
// ============================================================================

/// Top-level catalog document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDefinition {
    /// Resource definitions, in load order
    pub resources: Vec<ResourceDefinition>,
}

// ============================================================================
// Resource Definition
// ============================================================================

/// One logical dataset sourced from the API, with its own filter and
/// override settings. Immutable after the catalog is loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDefinition {
    /// Unique resource name; doubles as the destination table name
    pub name: String,
    /// Per-resource request parameters
    #[serde(default)]
    pub params: ResourceParams,
}

impl ResourceDefinition {
    /// Static filter clause sent as the `where` query parameter
    pub fn filter_clause(&self) -> &str {
        &self.params.where_clause
    }

    /// Whether this resource is always reloaded in full, even on
    /// incremental runs
    pub fn always_full(&self) -> bool {
        self.params.always_full
    }
}

/// Per-resource request parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ResourceParams {
    /// Static filter clause (SQL-ish, passed through verbatim)
    #[serde(rename = "where", default = "default_where")]
    pub where_clause: String,
    /// Force full-load semantics regardless of the requested mode.
    /// Used for small reference/dimension resources that should always be
    /// reloaded in entirety.
    #[serde(default)]
    pub always_full: bool,
}

impl Default for ResourceParams {
    fn default() -> Self {
        Self {
            where_clause: default_where(),
            always_full: false,
        }
    }
}

fn default_where() -> String {
    "1=1".to_string()
}
