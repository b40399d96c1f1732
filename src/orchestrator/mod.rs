//! Load orchestration
//!
//! Top-level driver for a run: for each resource in catalog order, plan
//! the window, build the request, open the stream, and drain it into the
//! sink.
//!
//! # Failure isolation
//!
//! Each resource's load is isolated. A failure in one resource — fetch
//! error, decode error, sink error — is recorded as a `Failed` outcome
//! and the run proceeds to the next resource. A multi-resource batch job
//! should not lose every resource's data because one API call failed
//! transiently. There is no retry; re-running the job is the recovery
//! mechanism.
//!
//! Resources are loaded strictly sequentially, bounding the number of
//! open connections at one and keeping failure attribution simple.

mod types;

pub use types::{LoadOutcome, LoadStatus};

use crate::catalog::{ResourceCatalog, ResourceDefinition};
use crate::credentials::CredentialProvider;
use crate::error::{Error, Result};
use crate::fetch::Fetcher;
use crate::request;
use crate::sink::{LoadSink, LoadSummary};
use crate::types::LoadMode;
use crate::window;
use chrono::{DateTime, Utc};
use tracing::{error, info};


/// Drives full and incremental runs over the whole catalog
pub struct LoadOrchestrator {
    catalog: ResourceCatalog,
    fetcher: Fetcher,
    credentials: Box<dyn CredentialProvider>,
    sink: Box<dyn LoadSink>,
    base_url: String,
}

impl LoadOrchestrator {
    /// Assemble an orchestrator from its injected collaborators
    pub fn new(
        catalog: ResourceCatalog,
        fetcher: Fetcher,
        credentials: Box<dyn CredentialProvider>,
        sink: Box<dyn LoadSink>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            fetcher,
            credentials,
            sink,
            base_url: base_url.into(),
        }
    }

    /// Run a full load of every resource, bounded at end of yesterday
    /// relative to `reference`
    pub async fn run_full(&self, reference: DateTime<Utc>) -> Vec<LoadOutcome> {
        self.run(LoadMode::Full, reference).await
    }

    /// Run an incremental load of every resource, covering exactly the
    /// calendar day before `reference`
    pub async fn run_incremental(&self, reference: DateTime<Utc>) -> Vec<LoadOutcome> {
        self.run(LoadMode::Incremental, reference).await
    }

    /// Load a single resource by name.
    ///
    /// Unlike the whole-catalog runs this propagates the error, so a
    /// caller targeting one resource sees the cause directly. Fails with
    /// [`Error::ResourceNotFound`] before any network activity if the
    /// name is not in the catalog.
    pub async fn run_resource(
        &self,
        name: &str,
        mode: LoadMode,
        reference: DateTime<Utc>,
    ) -> Result<LoadSummary> {
        let resource = self
            .catalog
            .lookup(name)
            .ok_or_else(|| Error::resource_not_found(name))?;
        self.load_resource(resource, mode, reference).await
    }

    async fn run(&self, mode: LoadMode, reference: DateTime<Utc>) -> Vec<LoadOutcome> {
        info!(%mode, resources = self.catalog.len(), "starting run");

        let mut outcomes = Vec::with_capacity(self.catalog.len());
        for resource in self.catalog.resources() {
            info!(resource = %resource.name, %mode, "loading resource");

            match self.load_resource(resource, mode, reference).await {
                Ok(summary) => {
                    info!(resource = %resource.name, rows = summary.rows, "load succeeded");
                    outcomes.push(LoadOutcome::succeeded(&resource.name, summary));
                }
                Err(e) => {
                    error!(resource = %resource.name, error = %e, "load failed");
                    outcomes.push(LoadOutcome::failed(&resource.name, e));
                }
            }
        }

        let failed = outcomes.iter().filter(|o| !o.is_success()).count();
        info!(
            succeeded = outcomes.len() - failed,
            failed, "run complete"
        );

        outcomes
    }

    async fn load_resource(
        &self,
        resource: &ResourceDefinition,
        mode: LoadMode,
        reference: DateTime<Utc>,
    ) -> Result<LoadSummary> {
        let window = window::plan(resource, mode, reference)?;
        info!(
            resource = %resource.name,
            mode = %window.mode,
            from = %window.from,
            to = %window.to,
            "planned load window"
        );

        let credential = self.credentials.credential()?;
        let descriptor = request::build(&self.base_url, &credential, &resource.name, &window);

        let mut stream = self.fetcher.fetch(&descriptor).await?;
        self.sink
            .load(&resource.name, descriptor.write_disposition, &mut stream)
            .await
    }
}
