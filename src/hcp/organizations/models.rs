//! Organization data models

use serde::Deserialize;

use crate::hcp::traits::TfeResource;

/// Organization data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Organization {
    pub id: String,
    pub attributes: Option<OrganizationAttributes>,
}

/// Organization attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct OrganizationAttributes {
    pub email: Option<String>,
}

impl Organization {
    /// Get email from attributes
    pub fn email(&self) -> &str {
        self.attributes
            .as_ref()
            .and_then(|a| a.email.as_deref())
            .unwrap_or("")
    }
}

impl TfeResource for Organization {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        // For orgs, id and name are the same
        &self.id
    }
}
