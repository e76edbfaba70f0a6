//! UI utilities for terminal output
//!
//! This module provides the progress spinner shown while the report is built.

mod spinner;

pub use spinner::{
    clear_spinner, create_spinner, finish_spinner, set_spinner_message, suspend,
};
