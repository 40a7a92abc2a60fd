mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod progress;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::progress::CliProgressHandler;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    let progress = CliProgressHandler::new(!cli.quiet);
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone(), progress.bar())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("🚀 log2xyz v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let config = config::build_conversion_config(&cli)?;
    match commands::convert::run(&config, &progress) {
        Ok(summary) => {
            info!(
                "✅ Converted {} of {} job(s).",
                summary.converged, summary.total
            );
            Ok(())
        }
        Err(e) => {
            error!("❌ Conversion failed: {}", e);
            Err(e)
        }
    }
}
