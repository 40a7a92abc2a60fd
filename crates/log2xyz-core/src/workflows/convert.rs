use super::config::ConversionConfig;
use super::error::WorkflowError;
use super::progress::{Progress, ProgressReporter};
use super::resubmit::ResubmitScript;
use super::scan::{self, JobFile};
use crate::core::io::gaussian::{GaussianError, GaussianLog};
use crate::core::io::traits::FrameFile;
use crate::core::io::xyz::XyzFile;
use crate::core::models::record::{FailureReason, LogOutcome};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};

/// A job that did not produce a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedJob {
    pub job_name: String,
    pub reason: FailureReason,
}

/// Outcome of a completed batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub converged: usize,
    pub output_path: PathBuf,
    /// Path of the resubmission script, `None` when every job converged.
    pub resubmit_script: Option<PathBuf>,
    pub failures: Vec<FailedJob>,
}

impl BatchSummary {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Converts every job in `config.input_dir` into frames of `config.output_path`.
///
/// Jobs are processed one at a time in file name order. Each converged log
/// appends one frame; each failed or missing log adds a line to the
/// resubmission script, which is deleted at the end if no job failed.
///
/// # Errors
///
/// Aborts with a [`WorkflowError`] when the input directory cannot be listed,
/// a log file is structurally malformed, a frame cannot be written (e.g. an
/// unsupported element), or an output file cannot be created or written.
/// Frames written before the error stay in the output file.
#[instrument(skip_all, name = "conversion_workflow", fields(input = %config.input_dir.display()))]
pub fn run(
    config: &ConversionConfig,
    reporter: &ProgressReporter,
) -> Result<BatchSummary, WorkflowError> {
    let jobs = scan::find_jobs(
        &config.input_dir,
        &config.job_extension,
        &config.result_extension,
    )?;
    info!("Found {} job file(s) to convert.", jobs.len());

    let output_file = File::create(&config.output_path)
        .map_err(|e| WorkflowError::io(&config.output_path, e))?;
    let mut output = BufWriter::new(output_file);
    let mut resubmit = ResubmitScript::create(&config.resubmit)?;

    reporter.report(Progress::BatchStart {
        total_jobs: jobs.len() as u64,
    });

    let mut converged = 0;
    let mut failures = Vec::new();
    for job in &jobs {
        match read_outcome(job, config)? {
            LogOutcome::Converged(record) => {
                XyzFile::write_frame(&record, &mut output).map_err(|source| {
                    WorkflowError::FrameWriting {
                        path: job.result_path.clone(),
                        source,
                    }
                })?;
                converged += 1;
                debug!(job = %job.job_name, atoms = record.len(), "Frame written.");
                reporter.report(Progress::JobFinished {
                    job_name: job.job_name.clone(),
                    converged: true,
                });
            }
            LogOutcome::Failed(reason) => {
                warn!(job = %job.job_name, %reason, "Job did not converge; scheduling resubmission.");
                resubmit.record(&job.job_name)?;
                failures.push(FailedJob {
                    job_name: job.job_name.clone(),
                    reason,
                });
                reporter.report(Progress::JobFinished {
                    job_name: job.job_name.clone(),
                    converged: false,
                });
            }
        }
    }

    output
        .flush()
        .map_err(|e| WorkflowError::io(&config.output_path, e))?;
    let resubmit_script = resubmit.finish()?;
    reporter.report(Progress::BatchFinish);

    info!(
        total = jobs.len(),
        converged,
        failed = failures.len(),
        "Conversion finished."
    );
    Ok(BatchSummary {
        total: jobs.len(),
        converged,
        output_path: config.output_path.clone(),
        resubmit_script,
        failures,
    })
}

fn read_outcome(job: &JobFile, config: &ConversionConfig) -> Result<LogOutcome, WorkflowError> {
    match GaussianLog::read_from_path(&job.result_path, &config.markers) {
        Ok(outcome) => Ok(outcome),
        Err(GaussianError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            Ok(LogOutcome::Failed(FailureReason::MissingResultFile))
        }
        Err(source) => Err(WorkflowError::LogParsing {
            path: job.result_path.clone(),
            source,
        }),
    }
}
