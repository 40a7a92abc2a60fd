use crate::core::io::gaussian::LogMarkers;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_JOB_EXTENSION: &str = ".gjf";
pub const DEFAULT_RESULT_EXTENSION: &str = ".log";

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

/// How failed jobs are written to the resubmission script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResubmitConfig {
    pub script_path: PathBuf,
    /// Command placed in front of every job file name.
    pub command: String,
    /// Worker count passed after the job file name.
    pub worker_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    pub input_dir: PathBuf,
    pub output_path: PathBuf,
    pub job_extension: String,
    pub result_extension: String,
    pub markers: LogMarkers,
    pub resubmit: ResubmitConfig,
}

#[derive(Default)]
pub struct ConversionConfigBuilder {
    input_dir: Option<PathBuf>,
    output_path: Option<PathBuf>,
    job_extension: Option<String>,
    result_extension: Option<String>,
    markers: Option<LogMarkers>,
    resubmit_script: Option<PathBuf>,
    resubmit_command: Option<String>,
    worker_count: Option<usize>,
}

impl ConversionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_dir = Some(path.into());
        self
    }
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }
    pub fn job_extension(mut self, ext: impl Into<String>) -> Self {
        self.job_extension = Some(ext.into());
        self
    }
    pub fn result_extension(mut self, ext: impl Into<String>) -> Self {
        self.result_extension = Some(ext.into());
        self
    }
    pub fn markers(mut self, markers: LogMarkers) -> Self {
        self.markers = Some(markers);
        self
    }
    pub fn resubmit_script(mut self, path: impl Into<PathBuf>) -> Self {
        self.resubmit_script = Some(path.into());
        self
    }
    pub fn resubmit_command(mut self, command: impl Into<String>) -> Self {
        self.resubmit_command = Some(command.into());
        self
    }
    pub fn worker_count(mut self, count: usize) -> Self {
        self.worker_count = Some(count);
        self
    }

    /// Validates the collected settings. Extensions and markers fall back to
    /// the Gaussian defaults; paths and the resubmission command are required.
    pub fn build(self) -> Result<ConversionConfig, ConfigError> {
        let job_extension = self
            .job_extension
            .unwrap_or_else(|| DEFAULT_JOB_EXTENSION.to_string());
        let result_extension = self
            .result_extension
            .unwrap_or_else(|| DEFAULT_RESULT_EXTENSION.to_string());
        validate_extension("job_extension", &job_extension)?;
        validate_extension("result_extension", &result_extension)?;
        if job_extension == result_extension {
            return Err(ConfigError::InvalidValue {
                name: "result_extension",
                reason: "must differ from the job extension".to_string(),
            });
        }

        let resubmit = ResubmitConfig {
            script_path: self
                .resubmit_script
                .ok_or(ConfigError::MissingParameter("resubmit_script"))?,
            command: self
                .resubmit_command
                .ok_or(ConfigError::MissingParameter("resubmit_command"))?,
            worker_count: self
                .worker_count
                .ok_or(ConfigError::MissingParameter("worker_count"))?,
        };
        if resubmit.worker_count == 0 {
            return Err(ConfigError::InvalidValue {
                name: "worker_count",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(ConversionConfig {
            input_dir: self
                .input_dir
                .ok_or(ConfigError::MissingParameter("input_dir"))?,
            output_path: self
                .output_path
                .ok_or(ConfigError::MissingParameter("output_path"))?,
            job_extension,
            result_extension,
            markers: self.markers.unwrap_or_default(),
            resubmit,
        })
    }
}

fn validate_extension(name: &'static str, ext: &str) -> Result<(), ConfigError> {
    if ext.len() < 2 || !ext.starts_with('.') {
        return Err(ConfigError::InvalidValue {
            name,
            reason: format!("'{}' must start with '.' followed by a suffix", ext),
        });
    }
    Ok(())
}
