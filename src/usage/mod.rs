//! Resource usage aggregation
//!
//! Collects workspace resource counts per organization, derives summary
//! statistics and assembles the usage report.

mod accumulator;
mod commands;
mod report;
pub mod stats;

pub use accumulator::{accumulate, OrgUsage, UsageRow};
pub use commands::{build_report, run_report, run_usage_command, RunOptions};
pub use report::{OrgSummary, UsageReport};
