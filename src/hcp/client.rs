//! TFE HTTP client for API interactions

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::pagination::{PageRequest, PageResult, Paginator};
use crate::hcp::traits::PaginatedResponse;

/// TFE API client
pub struct TfeClient {
    client: Client,
    token: String,
    host: String,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
}

impl TfeClient {
    /// Create a new TFE client with connection reuse and timeouts
    pub fn new(token: String, host: String) -> Self {
        let client = Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            host,
            base_url_override: None,
        }
    }

    /// Create a client with custom base URL (for testing with mock servers)
    #[cfg(test)]
    pub fn with_base_url(token: String, host: String, base_url: String) -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            host,
            base_url_override: Some(base_url),
        }
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.clone();
        }
        format!(
            "https://{}/{}",
            self.host,
            api::BASE_PATH.trim_start_matches('/')
        )
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/vnd.api+json")
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(TfeError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }
        Ok(response.json().await?)
    }

    /// Build the URL of one page of a listing
    ///
    /// The first request carries only the page size so the server picks its
    /// own first page.
    fn page_url(&self, path: &str, request: PageRequest) -> String {
        let separator = if path.contains('?') { "&" } else { "?" };
        let mut url = format!(
            "{}{}{}page[size]={}",
            self.base_url(),
            path,
            separator,
            request.size
        );
        if let Some(number) = request.number {
            url.push_str(&format!("&page[number]={}", number));
        }
        url
    }

    /// Fetch a single page of a paginated listing
    ///
    /// # Type Parameters
    /// * `T` - The item type (e.g., Organization, Workspace)
    /// * `R` - The response type that implements PaginatedResponse<T>
    pub async fn fetch_page<T, R>(
        &self,
        path: &str,
        request: PageRequest,
        error_context: &str,
    ) -> Result<PageResult<T>>
    where
        R: DeserializeOwned + PaginatedResponse<T>,
    {
        let url = self.page_url(path, request);
        debug!("Fetching page {:?} from: {}", request.number, url);

        let response = self.get(&url).send().await?;

        let page_context = match request.number {
            Some(n) => format!("{} (page {})", error_context, n),
            None => error_context.to_string(),
        };
        let resp: R = self.parse_api_response(response, &page_context).await?;
        Ok(resp.into_page())
    }

    /// Fetch every page of a listing, one page at a time
    ///
    /// # Arguments
    /// * `path` - API path (e.g., "/organizations/my-org/workspaces" or with query "...?q=foo")
    /// * `error_context` - Context for error messages (e.g., "workspaces for organization 'my-org'")
    /// * `paginator` - Page size and progress verbosity
    pub async fn fetch_all_pages<T, R>(
        &self,
        path: &str,
        error_context: &str,
        paginator: &Paginator,
    ) -> Result<Vec<T>>
    where
        R: DeserializeOwned + PaginatedResponse<T>,
    {
        paginator
            .collect(error_context, |request| {
                self.fetch_page::<T, R>(path, request, error_context)
            })
            .await
    }
}

#[cfg(test)]
impl TfeClient {
    /// Create a test client with mock base URL
    pub fn test_client(base_url: &str) -> Self {
        Self::with_base_url(
            "test-token".to_string(),
            "mock.terraform.io".to_string(),
            base_url.to_string(),
        )
    }
}
