//! Per-organization collection of workspace resource counts

use std::future::Future;

use log::{log, Level};

use crate::error::Result;
use crate::hcp::{TfeResource, Workspace};

/// One line of the usage report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageRow {
    pub organization: String,
    pub workspace: String,
    pub resource_count: u32,
    pub billable_resource_count: u32,
}

impl UsageRow {
    /// Fields in report column order
    pub fn fields(&self) -> [String; 4] {
        [
            self.organization.clone(),
            self.workspace.clone(),
            self.resource_count.to_string(),
            self.billable_resource_count.to_string(),
        ]
    }
}

/// Everything collected for one organization with at least one workspace
#[derive(Debug, Clone)]
pub struct OrgUsage {
    pub organization: String,
    /// Rows in workspace listing order
    pub rows: Vec<UsageRow>,
    /// Resource count of every workspace, same order as `rows`
    pub resource_counts: Vec<u32>,
    /// Billable count of every workspace, same order as `rows`
    pub billable_counts: Vec<u32>,
    /// Workspaces with at least one resource
    pub used_workspaces: usize,
}

impl OrgUsage {
    pub fn workspace_count(&self) -> usize {
        self.rows.len()
    }
}

/// Collect resource and billable counts for the workspaces of one organization
///
/// Returns `None` when the organization has no workspaces; such an
/// organization contributes no rows and no summary. `billable_count` is only
/// called for workspaces that track resources, the others count as 0 billable.
/// The first lookup error aborts the organization.
pub async fn accumulate<F, Fut>(
    organization: &str,
    workspaces: &[Workspace],
    mut billable_count: F,
    verbose: bool,
) -> Result<Option<OrgUsage>>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<u32>>,
{
    if workspaces.is_empty() {
        return Ok(None);
    }

    let level = if verbose { Level::Info } else { Level::Debug };

    let mut usage = OrgUsage {
        organization: organization.to_string(),
        rows: Vec::with_capacity(workspaces.len()),
        resource_counts: Vec::with_capacity(workspaces.len()),
        billable_counts: Vec::with_capacity(workspaces.len()),
        used_workspaces: 0,
    };

    for ws in workspaces {
        log!(level, "Processing workspace: {}", ws.name());

        let resource_count = ws.resource_count();
        let billable_resource_count = if ws.is_used() {
            usage.used_workspaces += 1;
            billable_count(ws.id().to_string()).await?
        } else {
            0
        };

        usage.rows.push(UsageRow {
            organization: organization.to_string(),
            workspace: ws.name().to_string(),
            resource_count,
            billable_resource_count,
        });
        usage.resource_counts.push(resource_count);
        usage.billable_counts.push(billable_resource_count);
    }

    Ok(Some(usage))
}
