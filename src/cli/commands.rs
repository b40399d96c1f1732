//! CLI arguments and parsing

use crate::types::LoadMode;
use clap::Parser;
use std::path::PathBuf;

/// Batch loader for line-delimited JSON REST APIs
#[derive(Parser, Debug)]
#[command(name = "restload")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Load mode for this run
    #[arg(value_enum)]
    pub mode: ModeArg,

    /// Staging location for the warehouse (local directory)
    pub staging: PathBuf,

    /// Resource catalog file (JSON)
    #[arg(short, long, default_value = "configs/resources.json")]
    pub catalog: PathBuf,

    /// Base URL of the REST API
    #[arg(long)]
    pub base_url: String,

    /// Dataset name scoping the staged tables
    #[arg(long, default_value = "main")]
    pub dataset: String,

    /// Environment variable holding the API credential
    #[arg(long, default_value = "RESTLOAD_TOKEN")]
    pub token_env: String,

    /// Load only this resource instead of the whole catalog
    #[arg(long)]
    pub resource: Option<String>,
}

/// Load mode argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ModeArg {
    /// Reload all history up to end of yesterday
    Full,
    /// Reload exactly the previous calendar day
    Incremental,
}

impl From<ModeArg> for LoadMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Full => LoadMode::Full,
            ModeArg::Incremental => LoadMode::Incremental,
        }
    }
}
