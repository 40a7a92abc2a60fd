//! # log2xyz Core Library
//!
//! Extracts final geometries and energies from Gaussian log files and writes them
//! as frames of a multi-structure XYZ file, collecting failed jobs into a
//! resubmission script.
//!
//! ## Architectural Philosophy
//!
//! The library follows a two-layer layout:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Atom`, `LogRecord`, the
//!   element table) and the file format implementations (Gaussian log parsing,
//!   XYZ reading and writing).
//!
//! - **[`workflows`]: The Public API.** Ties the `core` pieces together into the
//!   batch conversion: directory scanning, failure tracking, progress reporting
//!   and the summary returned to callers.

pub mod core;
pub mod workflows;
