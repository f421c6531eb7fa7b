//! MergeService: orchestrates sources and deserializes to GenConfig.

use crate::config::sources::{environment, file};
use crate::config::GenConfig;
use crate::error::Result;
use config::Config;
use std::path::Path;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Precedence: struct defaults (lowest) -> config file -> environment (highest).
    pub fn load(config_file: Option<&Path>) -> Result<GenConfig> {
        let builder = Config::builder();
        let builder = match config_file {
            Some(path) => file::add_to_builder(builder, path)?,
            None => builder,
        };
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}
