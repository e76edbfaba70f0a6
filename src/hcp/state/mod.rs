//! State version module - billable resource counts

mod api;
mod models;

pub use models::{CurrentStateVersion, CurrentStateVersionResponse, StateVersionAttributes};
