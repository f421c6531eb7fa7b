//! Merge of configuration sources

pub mod service;
