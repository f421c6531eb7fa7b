//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::GenConfig;
use crate::error::Result;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from defaults and the environment.
    pub fn load() -> Result<GenConfig> {
        MergeService::load(None)
    }

    /// Load configuration from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<GenConfig> {
        MergeService::load(Some(path))
    }

    /// Create default configuration.
    pub fn default() -> GenConfig {
        GenConfig::default()
    }
}
