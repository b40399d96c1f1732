//! CLI runner - wires collaborators and executes a run

use crate::catalog::ResourceCatalog;
use crate::cli::commands::Cli;
use crate::credentials::EnvCredential;
use crate::error::Result;
use crate::fetch::Fetcher;
use crate::orchestrator::LoadOrchestrator;
use crate::sink::FilesystemSink;
use crate::types::LoadMode;
use chrono::Utc;
use url::Url;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the requested run.
    ///
    /// Per-resource failures are reported but do not fail the process;
    /// only a configuration problem (bad base URL, unreadable catalog,
    /// missing credential for a single-resource run) returns an error
    /// here.
    pub async fn run(&self) -> Result<()> {
        let base_url: Url = self.cli.base_url.parse()?;
        let catalog = ResourceCatalog::load(&self.cli.catalog)?;

        let orchestrator = LoadOrchestrator::new(
            catalog,
            Fetcher::new()?,
            Box::new(EnvCredential::new(&self.cli.token_env)),
            Box::new(FilesystemSink::new(&self.cli.staging, &self.cli.dataset)),
            base_url.as_str(),
        );

        let mode = LoadMode::from(self.cli.mode);
        let reference = Utc::now();

        if let Some(resource) = &self.cli.resource {
            let summary = orchestrator.run_resource(resource, mode, reference).await?;
            println!("{resource}: succeeded ({summary})");
            return Ok(());
        }

        let outcomes = match mode {
            LoadMode::Full => orchestrator.run_full(reference).await,
            LoadMode::Incremental => orchestrator.run_incremental(reference).await,
        };

        for outcome in &outcomes {
            println!("{outcome}");
        }

        Ok(())
    }
}
