mod defaults;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use log2xyz::workflows::config::{ConversionConfig, ConversionConfigBuilder};
use std::path::PathBuf;
use tracing::debug;

/// Merges the parsed command line with the built-in defaults into the
/// configuration consumed by the conversion workflow.
pub fn build_conversion_config(cli: &Cli) -> Result<ConversionConfig> {
    let defaults = DefaultsConfig::default();

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&defaults.output));

    let config = ConversionConfigBuilder::new()
        .input_dir(&cli.input)
        .output_path(output)
        .resubmit_script(defaults.resubmit_script)
        .resubmit_command(defaults.resubmit_command)
        .worker_count(defaults.worker_count)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    debug!("Final conversion configuration: {:?}", config);
    Ok(config)
}
