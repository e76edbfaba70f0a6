//! Organization API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::hcp::pagination::Paginator;
use crate::hcp::traits::ApiListResponse;
use crate::hcp::TfeClient;

use super::models::Organization;

/// Query options for listing organizations
#[derive(Default, Debug, Clone, Copy)]
pub struct OrganizationQuery<'a> {
    /// Server-side search on organization name or email
    pub search: Option<&'a str>,
}

/// Build the API path for organizations with optional query params
fn build_organizations_path(query: &OrganizationQuery<'_>) -> String {
    let mut path = format!("/{}", api::ORGANIZATIONS);
    if let Some(q) = query.search.filter(|q| !q.is_empty()) {
        path.push_str(&format!("?q={}", urlencoding::encode(q)));
    }
    path
}

impl TfeClient {
    /// List every organization accessible to the token, following all pages
    pub async fn get_organizations(
        &self,
        query: OrganizationQuery<'_>,
        paginator: &Paginator,
    ) -> Result<Vec<Organization>> {
        let path = build_organizations_path(&query);
        debug!("Listing organizations (query: {:?})", query.search);

        self.fetch_all_pages::<Organization, ApiListResponse<Organization>>(
            &path,
            "organizations",
            paginator,
        )
        .await
    }
}
