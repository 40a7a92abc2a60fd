use crate::core::io::traits::FrameFile;
use crate::core::models::atom::Atom;
use crate::core::models::element::{self, ElementError};
use crate::core::models::record::LogRecord;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: XyzParseErrorKind },
    #[error("Cannot write atom {index} of frame: {source}")]
    Element {
        index: usize,
        #[source]
        source: ElementError,
    },
}

#[derive(Debug, Error)]
pub enum XyzParseErrorKind {
    #[error("Invalid atom count '{0}'")]
    InvalidCount(String),
    #[error("Invalid energy value '{0}'")]
    InvalidEnergy(String),
    #[error("Atom line needs a symbol and three coordinates, found {0} field(s)")]
    TooFewFields(usize),
    #[error("Invalid coordinate '{0}'")]
    InvalidCoordinate(String),
    #[error(transparent)]
    Element(#[from] ElementError),
    #[error("Frame ended after {found} of {expected} atom lines")]
    TruncatedFrame { expected: usize, found: usize },
}

/// The multi-frame XYZ format with the energy stored on the comment line.
///
/// ```text
/// 2
/// -7612.34567000
/// C       0.000000       0.000000       0.000000
/// O       0.000000       0.000000       1.128000
/// ```
pub struct XyzFile;

impl FrameFile for XyzFile {
    type Frame = LogRecord;
    type Error = XyzError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Self::Frame>, Self::Error> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        let mut frames = Vec::new();
        let mut cursor = 0;

        while cursor < lines.len() {
            let count_line = lines[cursor].trim();
            if count_line.is_empty() {
                cursor += 1;
                continue;
            }
            let count: usize = count_line.parse().map_err(|_| XyzError::Parse {
                line: cursor + 1,
                kind: XyzParseErrorKind::InvalidCount(count_line.to_string()),
            })?;

            let energy_idx = cursor + 1;
            let energy_line = lines.get(energy_idx).ok_or(XyzError::Parse {
                line: energy_idx + 1,
                kind: XyzParseErrorKind::TruncatedFrame {
                    expected: count,
                    found: 0,
                },
            })?;
            let energy_str = energy_line.trim();
            let energy: f64 = energy_str.parse().map_err(|_| XyzError::Parse {
                line: energy_idx + 1,
                kind: XyzParseErrorKind::InvalidEnergy(energy_str.to_string()),
            })?;

            let first_atom = energy_idx + 1;
            let mut atoms = Vec::with_capacity(count);
            for offset in 0..count {
                let idx = first_atom + offset;
                let line = lines.get(idx).ok_or(XyzError::Parse {
                    line: idx + 1,
                    kind: XyzParseErrorKind::TruncatedFrame {
                        expected: count,
                        found: offset,
                    },
                })?;
                atoms.push(parse_atom_line(line).map_err(|kind| XyzError::Parse {
                    line: idx + 1,
                    kind,
                })?);
            }

            frames.push(LogRecord::new(atoms, energy));
            cursor = first_atom + count;
        }

        Ok(frames)
    }

    fn write_frame(frame: &Self::Frame, writer: &mut impl Write) -> Result<(), Self::Error> {
        // Every symbol must resolve before the frame header is emitted.
        let symbols = frame
            .atoms
            .iter()
            .enumerate()
            .map(|(index, atom)| {
                atom.symbol()
                    .map_err(|source| XyzError::Element { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        writeln!(writer, "{}", frame.atoms.len())?;
        writeln!(writer, "{:.8}", frame.energy)?;
        for (symbol, atom) in symbols.iter().zip(&frame.atoms) {
            writeln!(
                writer,
                "{} {:14.6} {:14.6} {:14.6}",
                symbol, atom.position.x, atom.position.y, atom.position.z
            )?;
        }
        Ok(())
    }
}

fn parse_atom_line(line: &str) -> Result<Atom, XyzParseErrorKind> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(XyzParseErrorKind::TooFewFields(fields.len()));
    }
    let atomic_number = element::atomic_number(fields[0])?;
    let mut coords = [0.0; 3];
    for (slot, raw) in coords.iter_mut().zip(&fields[1..4]) {
        *slot = raw
            .parse()
            .map_err(|_| XyzParseErrorKind::InvalidCoordinate(raw.to_string()))?;
    }
    Ok(Atom::new(atomic_number, coords[0], coords[1], coords[2]))
}
