//! # Core Module
//!
//! Fundamental building blocks for turning quantum-chemistry output into
//! coordinate files.
//!
//! - **Molecular Representation** ([`models`]) - Atoms, parsed log records and the element table
//! - **File I/O** ([`io`]) - Gaussian log parsing and XYZ reading/writing

pub mod io;
pub mod models;
