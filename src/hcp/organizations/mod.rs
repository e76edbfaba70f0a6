//! Organization module

mod api;
mod models;

pub use api::OrganizationQuery;
pub use models::{Organization, OrganizationAttributes};
