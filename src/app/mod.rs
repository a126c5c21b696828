//! Application layer
//!
//! CLI surface, configuration management, and the stroke-file format used by
//! the offline evaluation harness. Nothing here participates in the decision
//! core; it only feeds it and reports its verdicts.

pub mod cli;
pub mod config;
pub mod stroke_file;
