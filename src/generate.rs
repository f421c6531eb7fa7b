//! End-to-end generation run
//!
//! Resolves every resource, builds the bundle, then writes the assembly and
//! the header. All validation happens before the first output file is opened.

use crate::bundle::Bundle;
use crate::config::GenConfig;
use crate::emit::{write_assembly, write_header};
use crate::error::Result;
use crate::resource::resolve_all;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{error, info};

/// What to generate and where.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Logical resource names, in output order.
    pub resources: Vec<String>,
    pub asm_output: PathBuf,
    pub header_output: PathBuf,
}

/// One generated resource as reported back to the caller.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReportEntry {
    pub name: String,
    pub symbol: String,
    pub size: u64,
    pub path: PathBuf,
}

/// Result of a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub asm: PathBuf,
    pub header: PathBuf,
    pub resources: Vec<ReportEntry>,
}

/// Run a full generation for `request` using `config`.
pub fn generate(request: &GenerateRequest, config: &GenConfig) -> Result<GenerationReport> {
    run(request, config).map_err(|e| {
        error!(error = %e, "Resource generation failed");
        e
    })
}

fn run(request: &GenerateRequest, config: &GenConfig) -> Result<GenerationReport> {
    config.validate()?;
    let options = config.header_options()?;

    let resources = resolve_all(
        &request.resources,
        &config.search,
        &config.prefix,
        config.symbol_policy,
    )?;
    let bundle = Bundle::from_resources(resources, config.symbol_policy)?;

    write_assembly(&request.asm_output, &bundle, config.align)?;
    write_header(&request.header_output, &bundle, &options)?;

    info!(
        resources = bundle.len(),
        asm = %request.asm_output.display(),
        header = %request.header_output.display(),
        "Generated resources"
    );

    Ok(GenerationReport {
        asm: request.asm_output.clone(),
        header: request.header_output.clone(),
        resources: bundle
            .resources()
            .iter()
            .map(|r| ReportEntry {
                name: r.name.clone(),
                symbol: r.symbol.clone(),
                size: r.size,
                path: r.path.clone(),
            })
            .collect(),
    })
}
