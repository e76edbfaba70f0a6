//! State version API operations

use log::debug;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::TfeClient;

use super::models::CurrentStateVersionResponse;

impl TfeClient {
    /// Get the current state version of a workspace
    pub async fn get_current_state_version(
        &self,
        workspace_id: &str,
    ) -> Result<CurrentStateVersionResponse> {
        let url = format!(
            "{}/{}/{}/{}",
            self.base_url(),
            api::WORKSPACES,
            workspace_id,
            api::CURRENT_STATE_VERSION
        );

        debug!("Fetching current state version for: {}", workspace_id);

        let response = self.get(&url).send().await?;

        match response.status().as_u16() {
            200 => {
                let data: CurrentStateVersionResponse = response.json().await?;
                Ok(data)
            }
            404 => Err(TfeError::Api {
                status: 404,
                message: format!(
                    "No state version found for workspace '{}'. The workspace may be empty.",
                    workspace_id
                ),
            }),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(TfeError::Api {
                    status,
                    message: format!(
                        "Failed to get state version for '{}': {}",
                        workspace_id, body
                    ),
                })
            }
        }
    }

    /// Get the billable resource count of a workspace's current state
    pub async fn get_billable_resource_count(&self, workspace_id: &str) -> Result<u32> {
        let state_version = self.get_current_state_version(workspace_id).await?;
        Ok(state_version.data.billable_rum_count())
    }
}
