//! Data structures describing what is extracted from a single log file.

pub mod atom;
pub mod element;
pub mod record;
