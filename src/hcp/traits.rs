//! Common traits for TFE resources

use serde::Deserialize;

use crate::hcp::pagination::PageResult;
use crate::hcp::PaginationMeta;

/// Common trait for TFE resources (organizations, workspaces)
pub trait TfeResource {
    /// Get the resource ID
    fn id(&self) -> &str;

    /// Get the human-readable name
    fn name(&self) -> &str;
}

/// Trait for API responses that contain paginated data
///
/// Implement this trait for a list response to use it with
/// `TfeClient::fetch_page()` and the [`Paginator`](crate::hcp::Paginator).
pub trait PaginatedResponse<T>: Sized {
    /// Consume self and return the data items
    fn into_data(self) -> Vec<T>;
    /// Get reference to pagination metadata
    fn meta(&self) -> Option<&PaginationMeta>;

    /// Convert into a page result, keeping pagination metadata if present
    fn into_page(self) -> PageResult<T> {
        let pagination = self.meta().and_then(|m| m.pagination.clone());
        let items = self.into_data();
        match pagination {
            Some(p) => PageResult {
                items,
                current_page: Some(p.current_page),
                total_pages: Some(p.total_pages),
                next_page: p.next_page,
            },
            None => PageResult::single(items),
        }
    }
}

/// Generic API list response wrapper for paginated endpoints
#[derive(Deserialize, Debug)]
pub struct ApiListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Option<PaginationMeta>,
}

impl<T> PaginatedResponse<T> for ApiListResponse<T> {
    fn into_data(self) -> Vec<T> {
        self.data
    }

    fn meta(&self) -> Option<&PaginationMeta> {
        self.meta.as_ref()
    }
}
