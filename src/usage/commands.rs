//! Usage report command handler

use indicatif::ProgressBar;
use log::{info, log, Level};

use crate::cli::{Cli, RunScope};
use crate::error::Result;
use crate::hcp::organizations::OrganizationQuery;
use crate::hcp::{Paginator, TfeClient, TfeResource, TokenResolver};
use crate::output::{print_summary_table, write_usage_report};
use crate::ui::{clear_spinner, create_spinner, finish_spinner, set_spinner_message, suspend};

use super::accumulator::accumulate;
use super::report::UsageReport;

/// Settings threaded through a report run
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Items per list request
    pub page_size: u32,
    /// Log per-page and per-workspace progress at info
    pub verbose: bool,
}

impl RunOptions {
    fn paginator(&self) -> Paginator {
        Paginator::new(self.page_size).verbose(self.verbose)
    }

    fn progress_level(&self) -> Level {
        if self.verbose {
            Level::Info
        } else {
            Level::Debug
        }
    }
}

impl From<&Cli> for RunOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            page_size: cli.page_size,
            verbose: cli.verbose,
        }
    }
}

/// Walk the organizations in scope and build the usage report
///
/// Organizations are processed one at a time. Organizations without
/// workspaces are logged and skipped. Any API error aborts the run.
pub async fn build_report(
    client: &TfeClient,
    scope: &RunScope,
    options: &RunOptions,
    spinner: &Option<ProgressBar>,
) -> Result<UsageReport> {
    let paginator = options.paginator();
    let level = options.progress_level();

    let query = OrganizationQuery {
        search: scope.name(),
    };
    let organizations = client.get_organizations(query, &paginator).await?;

    if options.verbose {
        suspend(spinner, || {
            info!("Found organizations:");
            for org in &organizations {
                match org.email() {
                    "" => info!("   {}", org.name()),
                    email => info!("   {} <{}>", org.name(), email),
                }
            }
        });
    }

    let mut report = UsageReport::new();

    for org in &organizations {
        let org_name = org.name();
        suspend(spinner, || log!(level, "Processing org: {}", org_name));
        set_spinner_message(spinner, &format!("Fetching workspaces for {}...", org_name));

        let workspaces = client.get_workspaces(org_name, &paginator).await?;

        let usage = accumulate(
            org_name,
            &workspaces,
            |workspace_id| async move { client.get_billable_resource_count(&workspace_id).await },
            options.verbose,
        )
        .await?;

        match usage {
            Some(usage) => {
                let summary = report.add_organization(usage)?;
                suspend(spinner, || info!("{}", summary));
            }
            None => {
                suspend(spinner, || info!("Org: {}, no workspaces found", org_name));
            }
        }
    }

    Ok(report)
}

/// Run the usage report: resolve credentials, build the report, write it out
pub async fn run_usage_command(cli: &Cli) -> Result<()> {
    // Scope is validated before any API call
    cli.scope()?;

    let token = TokenResolver::new(&cli.host).resolve(cli.token.as_deref())?;
    let client = TfeClient::new(token, cli.host.clone());

    run_report(&client, cli).await
}

/// Build the report with `client` and write it to `cli.output`
///
/// The CSV is only written once every organization has been processed; a
/// failed run leaves no report behind.
pub async fn run_report(client: &TfeClient, cli: &Cli) -> Result<()> {
    let scope = cli.scope()?;
    let options = RunOptions::from(cli);

    let spinner = create_spinner("Fetching organizations...", cli.batch || cli.verbose);

    let report = match build_report(client, &scope, &options, &spinner).await {
        Ok(report) => report,
        Err(e) => {
            clear_spinner(spinner);
            return Err(e);
        }
    };
    finish_spinner(spinner, "Done");

    let grand_total = scope.is_all().then(|| report.grand_total());
    if let Some(total) = grand_total {
        info!("Total Resources Under Management: {}", total);
    }

    write_usage_report(&cli.output, report.rows())?;
    info!(
        "Wrote {} rows to {}",
        report.rows().len(),
        cli.output.display()
    );

    print_summary_table(report.summaries(), grand_total);
    Ok(())
}
