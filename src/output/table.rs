//! Summary table output

use comfy_table::{presets::NOTHING, Table};

use crate::config::report::{TOP_LARGE, TOP_SMALL};
use crate::usage::OrgSummary;

/// Build the per-organization summary table
///
/// `grand_total` adds a trailing total row when present.
pub fn render_summary_table(summaries: &[OrgSummary], grand_total: Option<u64>) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING).set_header(vec![
        "Org".to_string(),
        "Workspaces".to_string(),
        "RUM".to_string(),
        "Billable RUM".to_string(),
        "Avg RUM/Used WS".to_string(),
        format!("Top {} Avg", TOP_SMALL),
        format!("Top {} Avg", TOP_LARGE),
    ]);

    for summary in summaries {
        table.add_row(vec![
            summary.organization.clone(),
            summary.workspaces.to_string(),
            summary.total_resources.to_string(),
            summary.total_billable.to_string(),
            summary.average_per_used_display(),
            summary.top_small_average.to_string(),
            summary.top_large_average.to_string(),
        ]);
    }

    if let Some(total) = grand_total {
        table.add_row(vec!["Total".to_string(), String::new(), total.to_string()]);
    }

    table
}

/// Print the summary table to stdout
pub fn print_summary_table(summaries: &[OrgSummary], grand_total: Option<u64>) {
    println!();
    println!("{}", render_summary_table(summaries, grand_total));
}
