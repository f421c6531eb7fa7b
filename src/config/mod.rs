//! Configuration
//!
//! Settings come from built-in defaults, an optional TOML file, `GENRSRC__*`
//! environment variables and finally command-line flags, in increasing
//! precedence. The first three layers are merged here; the CLI applies its
//! flags on top of the result.

pub mod facade;
pub mod merge;
pub mod sources;

pub use facade::ConfigLoader;

use crate::emit::{EmissionOrder, HeaderOptions, DEFAULT_ALIGN};
use crate::error::{GenError, Result};
use crate::logging::LoggingConfig;
use crate::symbol::SymbolPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_NAMESPACE: &str = "resource";
pub const DEFAULT_GUARD: &str = "_GENERATED_RESOURCES_H";

/// Complete generator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    /// Prefix of assembly labels and extern names.
    pub prefix: String,

    /// Namespace wrapping every generated declaration.
    pub namespace: String,

    /// Include guard token of the header.
    pub guard: String,

    /// Class instantiated per resource; must be constexpr-constructible
    /// from `(const char*, size_t)`.
    pub resource_class: Option<String>,

    /// Extra headers included by the generated header, in order.
    pub includes: Vec<String>,

    /// Directories searched for resources; the first match wins.
    pub search: Vec<PathBuf>,

    /// Alignment of every embedded blob, in bytes.
    pub align: u32,

    pub order: EmissionOrder,

    pub symbol_policy: SymbolPolicy,

    pub logging: LoggingConfig,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            guard: DEFAULT_GUARD.to_string(),
            resource_class: None,
            includes: Vec::new(),
            search: Vec::new(),
            align: DEFAULT_ALIGN,
            order: EmissionOrder::default(),
            symbol_policy: SymbolPolicy::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl GenConfig {
    /// Check the settings a generation run depends on.
    pub fn validate(&self) -> Result<()> {
        if self.search.is_empty() {
            return Err(GenError::Config(
                "At least one search directory is required".to_string(),
            ));
        }
        if self.align == 0 || !self.align.is_power_of_two() {
            return Err(GenError::Config(format!(
                "Alignment must be a power of two, got {}",
                self.align
            )));
        }
        self.header_options()?.validate()
    }

    /// Header settings; fails when no resource class was configured.
    pub fn header_options(&self) -> Result<HeaderOptions> {
        let resource_class = self
            .resource_class
            .clone()
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| GenError::Config("A resource class is required".to_string()))?;
        Ok(HeaderOptions {
            namespace: self.namespace.clone(),
            guard: self.guard.clone(),
            includes: self.includes.clone(),
            resource_class,
            order: self.order,
        })
    }
}
