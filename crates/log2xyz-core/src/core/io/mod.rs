//! Provides input/output functionality for the supported file formats.
//!
//! Gaussian log files are only ever read; XYZ files are written frame by frame
//! during a batch and can be read back through the shared [`traits::FrameFile`]
//! interface.

pub mod gaussian;
pub mod traits;
pub mod xyz;
