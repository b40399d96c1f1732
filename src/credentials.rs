//! Credential provision
//!
//! The API credential is retrieved through an injected provider so the
//! core stays testable without a real secret store. The credential value
//! is opaque to the rest of the crate; only the request builder touches
//! it, and only to base64-encode it.

use crate::error::{Error, Result};

/// Source of the API credential
pub trait CredentialProvider: Send + Sync {
    /// Return the credential string, or a config error if it cannot be
    /// retrieved
    fn credential(&self) -> Result<String>;
}

/// Fixed credential, handed in directly. Useful for tests and local runs.
#[derive(Debug, Clone)]
pub struct StaticCredential {
    value: String,
}

impl StaticCredential {
    /// Wrap a credential value
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl CredentialProvider for StaticCredential {
    fn credential(&self) -> Result<String> {
        Ok(self.value.clone())
    }
}

/// Credential read from an environment variable at load time.
///
/// The variable is read on every call rather than cached, so a rotated
/// credential is picked up without restarting long-lived processes.
#[derive(Debug, Clone)]
pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    /// Read the credential from the named environment variable
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl CredentialProvider for EnvCredential {
    fn credential(&self) -> Result<String> {
        std::env::var(&self.var).map_err(|_| {
            Error::config(format!(
                "Credential environment variable '{}' is not set",
                self.var
            ))
        })
    }
}
