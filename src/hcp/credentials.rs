//! API token lookup: CLI flag, environment, then Terraform credentials file

use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::config::credentials;
use crate::error::{Result, TfeError};

/// `credentials.tfrc.json` as written by `terraform login`
#[derive(Deserialize, Debug)]
struct CredentialsFile {
    credentials: HashMap<String, HostCredential>,
}

#[derive(Deserialize, Debug)]
struct HostCredential {
    token: String,
}

/// Finds the API token for one host
pub struct TokenResolver {
    host: String,
    credentials_path: Option<PathBuf>,
}

impl TokenResolver {
    /// Resolver for `host` using the platform's Terraform credentials file
    pub fn new(host: &str) -> Self {
        Self {
            host: host.to_string(),
            credentials_path: default_credentials_path(),
        }
    }

    /// Read credentials from `path` instead of the platform default
    pub fn with_credentials_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.credentials_path = Some(path.into());
        self
    }

    /// First token found among `--token`, the token env vars in order, and
    /// the credentials file entry for this host
    pub fn resolve(&self, cli_token: Option<&str>) -> Result<String> {
        if let Some(token) = cli_token {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        let from_env = credentials::TOKEN_ENV_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok().map(|token| (var, token)));
        if let Some((var, token)) = from_env {
            debug!("Using token from {} environment variable", var);
            return Ok(token);
        }

        self.token_from_credentials_file()
    }

    fn token_from_credentials_file(&self) -> Result<String> {
        let path = self
            .credentials_path
            .as_ref()
            .ok_or_else(|| self.not_found())?;
        debug!("Looking up {} in {}", self.host, path.display());

        let content = fs::read_to_string(path).map_err(|_| self.not_found())?;
        let file: CredentialsFile = serde_json::from_str(&content).map_err(|e| {
            TfeError::Credentials(format!(
                "Could not parse credentials file {}: {}",
                path.display(),
                e
            ))
        })?;

        file.credentials
            .get(&self.host)
            .map(|cred| cred.token.clone())
            .ok_or_else(|| self.not_found())
    }

    fn not_found(&self) -> TfeError {
        let env_vars = credentials::TOKEN_ENV_VARS.join(", ");
        let checked = match &self.credentials_path {
            Some(path) => format!("{} and {}", env_vars, path.display()),
            None => env_vars,
        };
        TfeError::TokenNotFound(format!(
            "No API token found for host '{}'. Pass --token, set HCP_TOKEN \
             (or TFC_TOKEN, TFE_TOKEN), or run `terraform login {}`. Checked: {}",
            self.host, self.host, checked
        ))
    }
}

/// `%APPDATA%\terraform.d\credentials.tfrc.json` on Windows,
/// `~/.terraform.d/credentials.tfrc.json` elsewhere
fn default_credentials_path() -> Option<PathBuf> {
    if cfg!(windows) {
        dirs::config_dir().map(|p| p.join(credentials::FILE_NAME))
    } else {
        dirs::home_dir().map(|p| p.join(credentials::FILE_PATH_UNIX))
    }
}
