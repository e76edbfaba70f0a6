//! hcpusage - Resources-under-management report for Terraform Enterprise
//!
//! Walks the organizations and workspaces visible to an API token, looks up
//! billable resource counts for every workspace that manages resources, and
//! writes a per-workspace CSV report plus per-organization statistics.
//!
//! # Features
//!
//! - Report on every accessible organization or on a single one
//! - Automatic pagination handling for organizations and workspaces
//! - Per-organization totals, averages and top-N averages
//! - Grand total of resources under management across organizations
//!
//! # Example
//!
//! ```bash
//! # Report on every organization
//! hcpusage --all
//!
//! # Report on one organization with progress logging
//! hcpusage --name my-org --verbose
//!
//! # Custom host and report path
//! hcpusage --all -H tfe.example.com -o reports/usage.csv
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod hcp;
pub mod output;
pub mod ui;
pub mod usage;

pub use cli::{Cli, RunScope};
pub use error::{Result, TfeError};
pub use hcp::{Organization, Paginator, TfeClient, TfeResource, TokenResolver, Workspace};
pub use output::{print_summary_table, write_usage_report};
pub use usage::{
    build_report, run_report, run_usage_command, OrgSummary, RunOptions, UsageReport, UsageRow,
};
