use super::atom::Atom;
use std::fmt;

/// The geometry and energy extracted from one successfully terminated log file.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub atoms: Vec<Atom>,
    pub energy: f64,
}

impl LogRecord {
    pub fn new(atoms: Vec<Atom>, energy: f64) -> Self {
        Self { atoms, energy }
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

/// Why a log file did not yield a [`LogRecord`].
///
/// These are expected outcomes of a batch (crashed or unfinished jobs) and are
/// routed to the resubmission script rather than aborting the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    /// The last line of the log does not carry the success marker.
    AbnormalTermination,
    /// The geometry section header never occurs.
    MissingGeometry,
    /// The geometry section is present but holds no atom lines.
    EmptyGeometry,
    /// The energy tag never occurs.
    MissingEnergy,
    /// No result file exists next to the job file.
    MissingResultFile,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FailureReason::AbnormalTermination => "abnormal termination",
            FailureReason::MissingGeometry => "no geometry section",
            FailureReason::EmptyGeometry => "empty geometry section",
            FailureReason::MissingEnergy => "no energy value",
            FailureReason::MissingResultFile => "result file not found",
        };
        f.write_str(text)
    }
}

/// Result of parsing one log file.
#[derive(Debug, Clone, PartialEq)]
pub enum LogOutcome {
    Converged(LogRecord),
    Failed(FailureReason),
}

impl LogOutcome {
    pub fn is_converged(&self) -> bool {
        matches!(self, LogOutcome::Converged(_))
    }
}
