//! Resource catalog module
//!
//! Parse resource definitions from a JSON catalog file.
//!
//! # Overview
//!
//! The catalog module provides:
//! - `ResourceDefinition` - Declarative resource specification
//! - `ResourceCatalog` - Read-only holder with lookup by name
//! - JSON parsing with validation
//!
//! The catalog is loaded once at startup and never mutated afterwards.

mod parser;
mod types;

pub use parser::{load_catalog, load_catalog_from_str};
pub use types::{CatalogDefinition, ResourceDefinition, ResourceParams};

use crate::error::Result;
use std::path::Path;

/// Read-only collection of resource definitions, in catalog order
#[derive(Debug, Clone)]
pub struct ResourceCatalog {
    resources: Vec<ResourceDefinition>,
}

impl ResourceCatalog {
    /// Load a catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_definition(load_catalog(path)?))
    }

    /// Load a catalog from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::from_definition(load_catalog_from_str(json)?))
    }

    /// Build a catalog from an already-parsed definition
    pub fn from_definition(def: CatalogDefinition) -> Self {
        Self {
            resources: def.resources,
        }
    }

    /// Look up a resource by name
    pub fn lookup(&self, name: &str) -> Option<&ResourceDefinition> {
        self.resources.iter().find(|r| r.name == name)
    }

    /// Resources in catalog order
    pub fn resources(&self) -> &[ResourceDefinition] {
        &self.resources
    }

    /// Number of resources in the catalog
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether the catalog holds no resources
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
