//! Tooling & Integration Layer
//!
//! Command-line front end and report formatting.

pub mod cli;
pub mod report;

pub use cli::{Cli, CliContext, ReportFormat};
