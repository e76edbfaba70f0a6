//! Usage report assembly: rows, per-organization summaries and grand total

use std::fmt;

use crate::config::report::{TOP_LARGE, TOP_SMALL};
use crate::error::Result;

use super::accumulator::{OrgUsage, UsageRow};
use super::stats::{self, NonEmptyCounts};

/// Summary statistics of one organization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgSummary {
    pub organization: String,
    pub workspaces: usize,
    pub total_resources: u64,
    pub total_billable: u64,
    /// `None` when no workspace tracks any resource
    pub average_per_used_workspace: Option<u64>,
    pub top_small_average: u64,
    pub top_large_average: u64,
}

impl OrgSummary {
    /// Derive the summary of an organization's collected usage
    ///
    /// Fails with `EmptyInput` if `usage` holds no workspaces, which
    /// [`accumulate`](super::accumulate) never produces.
    pub fn from_usage(usage: &OrgUsage) -> Result<Self> {
        let used: Vec<u32> = usage
            .resource_counts
            .iter()
            .copied()
            .filter(|&count| count > 0)
            .collect();

        Ok(Self {
            organization: usage.organization.clone(),
            workspaces: usage.workspace_count(),
            total_resources: stats::sum(&usage.resource_counts),
            total_billable: stats::sum(&usage.billable_counts),
            average_per_used_workspace: NonEmptyCounts::new(&used).map(|c| c.average()),
            top_small_average: stats::top_average(&usage.resource_counts, TOP_SMALL)?,
            top_large_average: stats::top_average(&usage.resource_counts, TOP_LARGE)?,
        })
    }

    /// Average per used workspace, or "n/a"
    pub fn average_per_used_display(&self) -> String {
        self.average_per_used_workspace
            .map(|avg| avg.to_string())
            .unwrap_or_else(|| "n/a".to_string())
    }
}

impl fmt::Display for OrgSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Org: {}, Workspaces: {}, RUM: {}, Billable RUM: {}, \
             Average RUM per used workspace: {}, Top {} workspaces RUM: {}, Top {} workspaces RUM: {}",
            self.organization,
            self.workspaces,
            self.total_resources,
            self.total_billable,
            self.average_per_used_display(),
            TOP_SMALL,
            self.top_small_average,
            TOP_LARGE,
            self.top_large_average
        )
    }
}

/// Ordered usage rows plus one summary per reported organization
#[derive(Debug, Default)]
pub struct UsageReport {
    rows: Vec<UsageRow>,
    summaries: Vec<OrgSummary>,
    grand_total: u64,
}

impl UsageReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an organization's rows and summary
    pub fn add_organization(&mut self, usage: OrgUsage) -> Result<&OrgSummary> {
        let summary = OrgSummary::from_usage(&usage)?;
        self.grand_total += summary.total_resources;
        self.rows.extend(usage.rows);
        self.summaries.push(summary);
        Ok(&self.summaries[self.summaries.len() - 1])
    }

    /// Rows in discovery order
    pub fn rows(&self) -> &[UsageRow] {
        &self.rows
    }

    pub fn summaries(&self) -> &[OrgSummary] {
        &self.summaries
    }

    /// Total resources across every reported organization
    pub fn grand_total(&self) -> u64 {
        self.grand_total
    }
}
