/// Configuration constants for TFE API
pub mod api {
    /// Base path for TFE API v2
    pub const BASE_PATH: &str = "/api/v2";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Workspaces endpoint
    pub const WORKSPACES: &str = "workspaces";

    /// Current state version subresource of a workspace
    pub const CURRENT_STATE_VERSION: &str = "current-state-version";

    /// Default page size for list requests
    pub const DEFAULT_PAGE_SIZE: u32 = 50;

    /// Largest page size accepted by the API
    pub const MAX_PAGE_SIZE: u32 = 100;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Credentials file name
    pub const FILE_NAME: &str = "terraform.d/credentials.tfrc.json";

    /// Path to Terraform credentials file on Unix (relative to HOME)
    pub const FILE_PATH_UNIX: &str = ".terraform.d/credentials.tfrc.json";

    /// Environment variable names for token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["HCP_TOKEN", "TFC_TOKEN", "TFE_TOKEN"];
}

/// Configuration constants for host resolution
pub mod host {
    /// Environment variable holding the TFE hostname
    pub const ENV_VAR: &str = "TFE_HOSTNAME";
}

/// Default values for CLI
pub mod defaults {
    /// Default TFE host
    pub const HOST: &str = "app.terraform.io";

    /// Default log level (summary lines are logged at info)
    pub const LOG_LEVEL: &str = "info";

    /// Default report file
    pub const REPORT_FILE: &str = "usage.csv";
}

/// Report layout constants
pub mod report {
    /// CSV header row
    pub const HEADER: [&str; 4] = [
        "Organization",
        "Workspace",
        "Resource Count",
        "Billable Resource Count",
    ];

    /// Size of the smaller top-N average
    pub const TOP_SMALL: usize = 10;

    /// Size of the larger top-N average
    pub const TOP_LARGE: usize = 20;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_path_format() {
        assert!(api::BASE_PATH.starts_with('/'));
    }

    #[test]
    fn test_default_page_size_within_api_limit() {
        assert!(api::DEFAULT_PAGE_SIZE > 0);
        assert!(api::DEFAULT_PAGE_SIZE <= api::MAX_PAGE_SIZE);
    }

    #[test]
    fn test_credentials_env_vars() {
        assert_eq!(
            credentials::TOKEN_ENV_VARS,
            &["HCP_TOKEN", "TFC_TOKEN", "TFE_TOKEN"]
        );
    }

    #[test]
    fn test_default_host_is_valid() {
        assert!(defaults::HOST.contains('.'));
        assert!(!defaults::HOST.starts_with("https://"));
    }

    #[test]
    fn test_report_header_columns() {
        assert_eq!(report::HEADER[0], "Organization");
        assert_eq!(report::HEADER[3], "Billable Resource Count");
        assert!(report::TOP_SMALL < report::TOP_LARGE);
    }
}
