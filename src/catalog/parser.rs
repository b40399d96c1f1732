//! JSON parser for the resource catalog
//!
//! Parses and validates catalog files. A catalog that is unreadable or
//! malformed is a fatal configuration error — nothing is loaded until the
//! whole catalog checks out.

use crate::catalog::types::{CatalogDefinition, ResourceDefinition};
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Load a catalog definition from a JSON file
pub fn load_catalog(path: impl AsRef<Path>) -> Result<CatalogDefinition> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::config(format!(
            "Failed to read catalog file '{}': {}",
            path.display(),
            e
        ))
    })?;
    load_catalog_from_str(&content)
}

/// Load a catalog definition from a JSON string
pub fn load_catalog_from_str(json: &str) -> Result<CatalogDefinition> {
    let def: CatalogDefinition = serde_json::from_str(json)
        .map_err(|e| Error::config(format!("Failed to parse catalog JSON: {e}")))?;

    validate_catalog(&def)?;
    Ok(def)
}

/// Validate a catalog definition
fn validate_catalog(def: &CatalogDefinition) -> Result<()> {
    let names: std::collections::HashSet<_> = def.resources.iter().map(|r| &r.name).collect();

    if names.len() != def.resources.len() {
        return Err(Error::config("Duplicate resource names found"));
    }

    for resource in &def.resources {
        validate_resource(resource)?;
    }

    Ok(())
}

/// Validate a resource definition
fn validate_resource(resource: &ResourceDefinition) -> Result<()> {
    if resource.name.is_empty() {
        return Err(Error::config("Resource name cannot be empty"));
    }

    Ok(())
}
