use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for multi-frame coordinate file formats.
///
/// A frame file is a concatenation of independent structures. Writers append
/// one frame at a time so a batch can stream results into a single open file;
/// readers return every frame in file order.
pub trait FrameFile {
    /// The in-memory representation of one frame.
    type Frame;

    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads every frame from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Self::Frame>, Self::Error>;

    /// Appends a single frame to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame cannot be serialized or writing fails.
    fn write_frame(frame: &Self::Frame, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Writes a sequence of frames to a writer, in order.
    fn write_to(frames: &[Self::Frame], writer: &mut impl Write) -> Result<(), Self::Error> {
        for frame in frames {
            Self::write_frame(frame, writer)?;
        }
        Ok(())
    }

    /// Reads every frame from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Self::Frame>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a sequence of frames to a file path, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(frames: &[Self::Frame], path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(frames, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
