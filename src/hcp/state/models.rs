//! State version data models

use serde::Deserialize;

/// Response wrapper for current state version
#[derive(Deserialize, Debug)]
pub struct CurrentStateVersionResponse {
    pub data: CurrentStateVersion,
}

/// State version data from TFE API
#[derive(Deserialize, Debug)]
pub struct CurrentStateVersion {
    pub attributes: StateVersionAttributes,
}

/// State version attributes from TFE API
#[derive(Deserialize, Debug)]
pub struct StateVersionAttributes {
    #[serde(rename = "billable-rum-count")]
    pub billable_rum_count: Option<u32>,
}

impl CurrentStateVersion {
    /// Billable resources under management, 0 when the API omits it
    pub fn billable_rum_count(&self) -> u32 {
        self.attributes.billable_rum_count.unwrap_or(0)
    }
}
