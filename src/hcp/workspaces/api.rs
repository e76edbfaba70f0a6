//! Workspace API operations

use crate::config::api;
use crate::error::Result;
use crate::hcp::pagination::Paginator;
use crate::hcp::traits::ApiListResponse;
use crate::hcp::TfeClient;

use super::models::Workspace;

/// Build the API path for the workspaces of an organization
fn build_workspaces_path(org: &str) -> String {
    format!(
        "/{}/{}/{}",
        api::ORGANIZATIONS,
        urlencoding::encode(org),
        api::WORKSPACES
    )
}

impl TfeClient {
    /// Get every workspace of an organization, following all pages
    pub async fn get_workspaces(&self, org: &str, paginator: &Paginator) -> Result<Vec<Workspace>> {
        let path = build_workspaces_path(org);
        let error_context = format!("workspaces for organization '{}'", org);

        self.fetch_all_pages::<Workspace, ApiListResponse<Workspace>>(
            &path,
            &error_context,
            paginator,
        )
        .await
    }
}
