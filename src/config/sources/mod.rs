//! Configuration sources

pub mod environment;
pub mod file;
