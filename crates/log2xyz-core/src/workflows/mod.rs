//! # Workflows Module
//!
//! High-level entry points that turn a directory of finished (or failed)
//! quantum-chemistry jobs into a single XYZ trajectory.
//!
//! - **Conversion Workflow** ([`convert`]) - scans a job directory, parses each
//!   result log, appends converged structures to the output file and collects
//!   failed jobs into a resubmission script.
//!
//! Supporting pieces are exposed so callers can compose them differently:
//! [`scan`] for job discovery, [`resubmit`] for the failure script, [`config`]
//! for the explicit run configuration and [`progress`] for event reporting.

pub mod config;
pub mod convert;
pub mod error;
pub mod progress;
pub mod resubmit;
pub mod scan;
