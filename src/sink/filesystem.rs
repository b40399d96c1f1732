//! NDJSON staging writer
//!
//! Writes one `<staging>/<dataset>/<table>.jsonl` file per load. The
//! staging directory stands in for the warehouse's filesystem staging
//! location; a downstream commit step picks the files up from there.

use super::{LoadSink, LoadSummary};
use crate::error::{Error, Result};
use crate::fetch::RecordSource;
use crate::types::WriteDisposition;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Sink that stages records as newline-delimited JSON files
#[derive(Debug, Clone)]
pub struct FilesystemSink {
    root: PathBuf,
    dataset: String,
}

impl FilesystemSink {
    /// Create a sink rooted at `root`, staging under the named dataset
    pub fn new(root: impl Into<PathBuf>, dataset: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            dataset: dataset.into(),
        }
    }

    /// Path of the staging file for a table
    pub fn table_path(&self, table: &str) -> PathBuf {
        self.root.join(&self.dataset).join(format!("{table}.jsonl"))
    }

    async fn open(&self, path: &Path, disposition: WriteDisposition) -> Result<tokio::fs::File> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| Error::sink(format!("Failed to create staging dir: {e}")))?;
        }

        match disposition {
            // Replace truncates: re-running a load leaves identical state.
            WriteDisposition::Replace => tokio::fs::File::create(path)
                .await
                .map_err(|e| Error::sink(format!("Failed to open staging file: {e}"))),
        }
    }
}

#[async_trait]
impl LoadSink for FilesystemSink {
    async fn load(
        &self,
        table: &str,
        disposition: WriteDisposition,
        records: &mut dyn RecordSource,
    ) -> Result<LoadSummary> {
        let path = self.table_path(table);
        let mut file = self.open(&path, disposition).await?;
        let mut rows = 0u64;

        while let Some(next) = records.next_record().await {
            let record = next?;
            let line = serde_json::to_vec(&record)?;
            file.write_all(&line)
                .await
                .map_err(|e| Error::sink(format!("Failed to write record: {e}")))?;
            file.write_all(b"\n")
                .await
                .map_err(|e| Error::sink(format!("Failed to write record: {e}")))?;
            rows += 1;
        }

        file.flush()
            .await
            .map_err(|e| Error::sink(format!("Failed to flush staging file: {e}")))?;

        debug!(table, rows, path = %path.display(), "staged table");

        Ok(LoadSummary {
            table: table.to_string(),
            rows,
        })
    }
}
