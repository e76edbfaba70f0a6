//! Output module
//!
//! Writes the usage report as CSV and prints the organization summary table.

mod common;
mod csv;
mod table;

pub use self::common::escape_csv;
pub use self::csv::{write_usage_csv, write_usage_report};
pub use self::table::{print_summary_table, render_summary_table};
