//! TFE API client module
//!
//! This module provides functionality to interact with Terraform Enterprise API.

mod client;
mod credentials;
pub mod organizations;
pub mod pagination;
pub mod state;
pub mod traits;
pub mod workspaces;

use serde::Deserialize;

pub use client::TfeClient;
pub use credentials::TokenResolver;
pub use organizations::{Organization, OrganizationAttributes};
pub use pagination::{PageRequest, PageResult, Paginator};
pub use traits::{ApiListResponse, PaginatedResponse, TfeResource};
pub use workspaces::{Workspace, WorkspaceAttributes};

/// Pagination metadata from TFE API (shared across resources)
#[derive(Deserialize, Debug, Default, Clone)]
pub struct PaginationMeta {
    pub pagination: Option<Pagination>,
}

/// Pagination details
#[derive(Deserialize, Debug, Clone)]
pub struct Pagination {
    #[serde(rename = "current-page")]
    pub current_page: u32,
    #[serde(rename = "total-pages")]
    pub total_pages: u32,
    #[serde(rename = "next-page", default)]
    pub next_page: Option<u32>,
}
