//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

use crate::config::{api, defaults, host};
use crate::error::{Result, TfeError};

/// Terraform resources-under-management usage report
#[derive(Parser, Debug)]
#[command(name = "hcpusage")]
#[command(version)]
#[command(
    about = "Report resources under management across TFE/HCP Terraform organizations",
    long_about = None
)]
pub struct Cli {
    /// Report on every organization accessible to the token
    #[arg(short, long, conflicts_with = "name")]
    pub all: bool,

    /// Report on a single organization
    #[arg(short, long)]
    pub name: Option<String>,

    /// Log pagination and per-workspace progress
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// TFE host name
    #[arg(short = 'H', long, env = host::ENV_VAR, default_value = defaults::HOST)]
    pub host: String,

    /// API token (overrides env vars and credentials file)
    #[arg(short = 't', long)]
    pub token: Option<String>,

    /// Path of the CSV report
    #[arg(short, long, default_value = defaults::REPORT_FILE)]
    pub output: PathBuf,

    /// Items per page for list requests
    #[arg(
        long,
        default_value_t = api::DEFAULT_PAGE_SIZE,
        value_parser = clap::value_parser!(u32).range(1..=api::MAX_PAGE_SIZE as i64)
    )]
    pub page_size: u32,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinner
    #[arg(long, default_value_t = false)]
    pub batch: bool,
}

/// Which organizations a run covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunScope {
    /// Every accessible organization
    All,
    /// Organizations matching the given name
    Named(String),
}

impl RunScope {
    /// Search term to send with the organization listing
    pub fn name(&self) -> Option<&str> {
        match self {
            RunScope::All => None,
            RunScope::Named(name) => Some(name),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, RunScope::All)
    }
}

impl Cli {
    /// Resolve the run scope; an empty name counts as absent
    pub fn scope(&self) -> Result<RunScope> {
        match self.name.as_deref().filter(|n| !n.is_empty()) {
            Some(name) => Ok(RunScope::Named(name.to_string())),
            None if self.all => Ok(RunScope::All),
            None => Err(TfeError::Config(
                "Please provide either --all or --name".to_string(),
            )),
        }
    }
}
