use crate::error::Result;
use crate::progress::CliProgressHandler;
use log2xyz::workflows::{
    config::ConversionConfig,
    convert::{self, BatchSummary},
    progress::ProgressReporter,
};
use tracing::info;

pub fn run(config: &ConversionConfig, progress: &CliProgressHandler) -> Result<BatchSummary> {
    let reporter = ProgressReporter::with_callback(progress.get_callback());

    info!("Converting log files in {:?}", &config.input_dir);
    let summary = convert::run(config, &reporter)?;

    for line in summary_lines(&summary) {
        println!("{}", line);
    }
    Ok(summary)
}

/// The human-readable report printed after a batch.
pub fn summary_lines(summary: &BatchSummary) -> Vec<String> {
    let mut lines = vec![
        format!("The number of gjf files: {}", summary.total),
        format!(
            "The number of normal termination log files: {}",
            summary.converged
        ),
        format!(
            "The cartesian coordinates and energies are saved to {}",
            summary.output_path.display()
        ),
        format!(
            "The number of error termination log files: {}",
            summary.failed()
        ),
    ];
    if let Some(script) = &summary.resubmit_script {
        lines.push(format!(
            "You can restart calculation with {}",
            script.display()
        ));
    }
    lines
}
