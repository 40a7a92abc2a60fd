use super::config::ResubmitConfig;
use super::error::WorkflowError;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Shell script collecting one re-run command per failed job.
///
/// The script is created (truncating any previous one) when the batch starts,
/// so a stale script from an earlier run never survives. [`ResubmitScript::finish`]
/// removes it again if nothing was recorded.
pub struct ResubmitScript {
    path: PathBuf,
    command: String,
    worker_count: usize,
    writer: BufWriter<File>,
    entries: usize,
}

impl ResubmitScript {
    pub fn create(config: &ResubmitConfig) -> Result<Self, WorkflowError> {
        let file = File::create(&config.script_path)
            .map_err(|e| WorkflowError::io(&config.script_path, e))?;
        debug!(path = %config.script_path.display(), "Created resubmission script.");
        Ok(Self {
            path: config.script_path.clone(),
            command: config.command.clone(),
            worker_count: config.worker_count,
            writer: BufWriter::new(file),
            entries: 0,
        })
    }

    /// Appends the re-run line for the job input file `job_name`.
    pub fn record(&mut self, job_name: &str) -> Result<(), WorkflowError> {
        writeln!(
            self.writer,
            "{} {} {}",
            self.command, job_name, self.worker_count
        )
        .map_err(|e| WorkflowError::io(&self.path, e))?;
        self.entries += 1;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Flushes the script to disk, or deletes it when no job failed.
    ///
    /// # Return
    ///
    /// The script path if it was kept, `None` if it was removed.
    pub fn finish(mut self) -> Result<Option<PathBuf>, WorkflowError> {
        self.writer
            .flush()
            .map_err(|e| WorkflowError::io(&self.path, e))?;
        let Self {
            path,
            writer,
            entries,
            ..
        } = self;
        drop(writer);

        if entries == 0 {
            fs::remove_file(&path).map_err(|e| WorkflowError::io(&path, e))?;
            debug!(path = %path.display(), "No failed jobs; removed resubmission script.");
            Ok(None)
        } else {
            info!(entries, path = %path.display(), "Failed jobs written to resubmission script.");
            Ok(Some(path))
        }
    }
}
