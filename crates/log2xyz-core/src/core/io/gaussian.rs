use crate::core::models::atom::Atom;
use crate::core::models::record::{FailureReason, LogOutcome, LogRecord};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, trace};

/// Number of whitespace-separated fields read from each geometry line:
/// center number, atomic number, atomic type, x, y, z.
const GEOMETRY_FIELDS: usize = 6;

/// Text conventions used to locate results inside a log file.
///
/// The defaults match Gaussian output with an MP2 energy. Other energy
/// keywords (e.g. `SCF Done:`) can be used by replacing [`LogMarkers::energy_tag`];
/// the value is always taken from the last token of the tagged line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMarkers {
    /// Substring that must appear on the final line of a finished job.
    pub success_marker: String,
    /// Header of the coordinate table; the last occurrence wins.
    pub geometry_header: String,
    /// Distance in lines from the header to the first atom line.
    pub geometry_offset: usize,
    /// Line prefix that closes the coordinate table.
    pub block_separator: String,
    /// Substring identifying the energy line; the last occurrence wins.
    pub energy_tag: String,
}

impl Default for LogMarkers {
    fn default() -> Self {
        Self {
            success_marker: "Normal termination".to_string(),
            geometry_header: "Input orientation:".to_string(),
            geometry_offset: 5,
            block_separator: " -------".to_string(),
            energy_tag: "EUMP2 =".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum GaussianError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: GaussianParseErrorKind,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum GaussianParseErrorKind {
    #[error("Geometry line has {found} field(s), expected at least 6")]
    TooFewFields { found: usize },
    #[error("Invalid number in geometry column {column} (value: '{value}')")]
    InvalidFloat { column: usize, value: String },
    #[error("Invalid atomic number {0}")]
    InvalidAtomicNumber(f64),
    #[error("Invalid energy value '{0}'")]
    InvalidEnergy(String),
}

/// Reader for Gaussian log files.
pub struct GaussianLog;

impl GaussianLog {
    /// Extracts the final geometry and energy from the lines of a log file.
    ///
    /// Only the last line is inspected before deciding the job terminated
    /// abnormally; the rest of the file is not examined in that case.
    ///
    /// # Return
    ///
    /// [`LogOutcome::Converged`] when both a geometry and an energy were found,
    /// otherwise [`LogOutcome::Failed`] with the first missing piece.
    ///
    /// A geometry header followed directly by the block separator yields
    /// [`FailureReason::EmptyGeometry`]: the job goes to resubmission rather
    /// than being counted as converged with a zero-atom frame.
    ///
    /// # Errors
    ///
    /// Returns [`GaussianError::Parse`] when a geometry line or the energy value
    /// is malformed. Such files are structurally broken rather than unfinished.
    pub fn parse<S: AsRef<str>>(
        lines: &[S],
        markers: &LogMarkers,
    ) -> Result<LogOutcome, GaussianError> {
        let terminated = lines
            .last()
            .is_some_and(|line| line.as_ref().contains(&markers.success_marker));
        if !terminated {
            return Ok(LogOutcome::Failed(FailureReason::AbnormalTermination));
        }

        let Some(header_idx) = lines
            .iter()
            .rposition(|line| line.as_ref().contains(&markers.geometry_header))
        else {
            return Ok(LogOutcome::Failed(FailureReason::MissingGeometry));
        };

        let atoms = Self::parse_geometry(lines, header_idx + markers.geometry_offset, markers)?;
        if atoms.is_empty() {
            return Ok(LogOutcome::Failed(FailureReason::EmptyGeometry));
        }

        let Some(energy) = Self::parse_energy(lines, &markers.energy_tag)? else {
            return Ok(LogOutcome::Failed(FailureReason::MissingEnergy));
        };

        debug!(
            atoms = atoms.len(),
            energy, "Extracted geometry and energy from log."
        );
        Ok(LogOutcome::Converged(LogRecord::new(atoms, energy)))
    }

    /// Reads a whole log from `reader` and parses it. Invalid UTF-8 is replaced
    /// rather than rejected.
    pub fn read_from(
        reader: &mut impl Read,
        markers: &LogMarkers,
    ) -> Result<LogOutcome, GaussianError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = String::from_utf8_lossy(&bytes);
        let lines: Vec<&str> = text.lines().collect();
        Self::parse(&lines, markers)
    }

    pub fn read_from_path<P: AsRef<Path>>(
        path: P,
        markers: &LogMarkers,
    ) -> Result<LogOutcome, GaussianError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader, markers)
    }

    fn parse_geometry<S: AsRef<str>>(
        lines: &[S],
        start: usize,
        markers: &LogMarkers,
    ) -> Result<Vec<Atom>, GaussianError> {
        let mut atoms = Vec::new();
        for (idx, line) in lines.iter().enumerate().skip(start) {
            let line = line.as_ref();
            if line.starts_with(&markers.block_separator) {
                break;
            }
            trace!(line = idx + 1, "Reading geometry line.");
            let atom = parse_geometry_line(line).map_err(|kind| GaussianError::Parse {
                line: idx + 1,
                kind,
            })?;
            atoms.push(atom);
        }
        Ok(atoms)
    }

    fn parse_energy<S: AsRef<str>>(lines: &[S], tag: &str) -> Result<Option<f64>, GaussianError> {
        let Some(idx) = lines.iter().rposition(|line| line.as_ref().contains(tag)) else {
            return Ok(None);
        };
        let raw = lines[idx]
            .as_ref()
            .split_whitespace()
            .last()
            .unwrap_or_default();
        let normalized = raw.replace('D', "e");
        normalized
            .parse::<f64>()
            .map(Some)
            .map_err(|_| GaussianError::Parse {
                line: idx + 1,
                kind: GaussianParseErrorKind::InvalidEnergy(raw.to_string()),
            })
    }
}

fn parse_geometry_line(line: &str) -> Result<Atom, GaussianParseErrorKind> {
    let fields: Vec<&str> = line.split_whitespace().take(GEOMETRY_FIELDS).collect();
    if fields.len() < GEOMETRY_FIELDS {
        return Err(GaussianParseErrorKind::TooFewFields {
            found: fields.len(),
        });
    }

    let mut values = [0.0_f64; GEOMETRY_FIELDS];
    for (column, (slot, raw)) in values.iter_mut().zip(&fields).enumerate() {
        *slot = raw
            .parse()
            .map_err(|_| GaussianParseErrorKind::InvalidFloat {
                column: column + 1,
                value: raw.to_string(),
            })?;
    }

    let [_center, atomic_number, _atomic_type, x, y, z] = values;
    let truncated = atomic_number.trunc();
    if !truncated.is_finite() || truncated < 0.0 || truncated > u32::MAX as f64 {
        return Err(GaussianParseErrorKind::InvalidAtomicNumber(atomic_number));
    }
    Ok(Atom::new(truncated as u32, x, y, z))
}
