//! Streaming fetch module
//!
//! Opens a single streaming HTTP GET per resource and exposes the NDJSON
//! body as a lazy record sequence.
//!
//! # Overview
//!
//! - **One connection per load**: no pagination protocol beyond what the
//!   server returns in a single streamed response.
//! - **Fail fast on status**: a non-2xx response fails before any record
//!   is yielded.
//! - **Bounded memory**: the consumer pulls one record at a time and the
//!   connection is never advanced faster than the consumer drains it.
//!
//! There is no retry logic here. A transient failure fails the resource
//! for the run; re-running the job is the recovery mechanism.

mod stream;

pub use stream::{RecordSource, RecordStream};

use crate::error::{Error, Result};
use crate::request::RequestDescriptor;
use std::time::Duration;
use tracing::debug;

#[cfg(test)]
mod tests;

/// Configuration for the HTTP transport
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// TCP connect timeout
    pub connect_timeout: Duration,
    /// Idle timeout between body chunks
    pub read_timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            read_timeout: Duration::from_secs(30),
            user_agent: format!("restload/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpConfig {
    /// Create a new config builder
    pub fn builder() -> HttpConfigBuilder {
        HttpConfigBuilder::default()
    }
}

/// Builder for HTTP transport config
#[derive(Default)]
pub struct HttpConfigBuilder {
    config: HttpConfig,
}

impl HttpConfigBuilder {
    /// Set the connect timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set the read timeout
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.config.read_timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpConfig {
        self.config
    }
}

/// Streaming fetcher for resource loads
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    /// Create a fetcher with default transport configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpConfig::default())
    }

    /// Create a fetcher with custom transport configuration
    pub fn with_config(config: HttpConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// Open a streaming connection for the descriptor and return the lazy
    /// record sequence.
    ///
    /// Fails with [`Error::HttpStatus`] before yielding anything if the
    /// response status is not 2xx. The returned stream is single-pass and
    /// not restartable.
    pub async fn fetch(&self, descriptor: &RequestDescriptor) -> Result<RecordStream> {
        debug!(
            resource = %descriptor.resource,
            url = %descriptor.url,
            "opening streaming request"
        );

        let mut req = self.client.get(&descriptor.url).query(&descriptor.query);
        for (key, value) in &descriptor.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
            });
        }

        Ok(RecordStream::new(response.bytes_stream()))
    }
}
