//! hcpusage - Main entry point

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use hcpusage::{run_usage_command, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting hcpusage v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: all={}, name={:?}, host={}, output={}, page_size={}, verbose={}",
        cli.all,
        cli.name,
        cli.host,
        cli.output.display(),
        cli.page_size,
        cli.verbose
    );

    match run_usage_command(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
