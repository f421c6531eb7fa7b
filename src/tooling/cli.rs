//! CLI Tooling
//!
//! Command-line interface for the resource compiler. Merges flags over the
//! loaded configuration and runs one generation.

use crate::config::{ConfigLoader, GenConfig};
use crate::emit::EmissionOrder;
use crate::error::GenError;
use crate::generate::{generate, GenerateRequest};
use crate::symbol::SymbolPolicy;
use crate::tooling::report::{format_report_json, format_report_text};
use clap::{Parser, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::debug;

/// Generate an assembly file and header from resources
#[derive(Parser, Debug)]
#[command(name = "genrsrc")]
#[command(about = "Generate an assembly file and header from resources")]
pub struct Cli {
    /// Resources to compile, relative to the search directories
    #[arg(value_name = "RESOURCES")]
    pub resources: Vec<String>,

    /// Output paths of the generated assembly and header files
    #[arg(short = 'o', long, num_args = 2, value_names = ["ASM", "HEADER"], required = true)]
    pub output: Vec<PathBuf>,

    /// Prefix of assembly labels and extern variable names
    #[arg(short = 'p', long, value_name = "PREFIX", allow_hyphen_values = true)]
    pub prefix: Option<String>,

    /// Search directory for resources (repeatable, first match wins)
    #[arg(short = 'S', long = "search", value_name = "PATH")]
    pub search: Vec<PathBuf>,

    /// Namespace to place the resources in [default: resource]
    #[arg(short = 'n', long, value_name = "NAMESPACE")]
    pub namespace: Option<String>,

    /// Header guard [default: _GENERATED_RESOURCES_H]
    #[arg(short = 'g', long, value_name = "GUARD")]
    pub guard: Option<String>,

    /// Header to include from the generated file (repeatable)
    #[arg(short = 'I', long = "include", value_name = "FILE")]
    pub includes: Vec<String>,

    /// Resource class; must provide a constexpr constructor taking
    /// `const char*` and `size_t`, and should be included via -I
    #[arg(short = 'c', long, value_name = "CLASS")]
    pub resource_class: Option<String>,

    /// Configuration file path (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Emit namespaces and resources in sorted order instead of input order
    #[arg(long)]
    pub sorted: bool,

    /// Escape characters that are not valid in symbols instead of failing
    #[arg(long)]
    pub escape_symbols: bool,

    /// Alignment of embedded resources in bytes
    #[arg(long, value_name = "BYTES")]
    pub align: Option<u32>,

    /// Report printed after a successful run
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub report: ReportFormat,

    /// Enable verbose logging (debug level)
    #[arg(short = 'v', long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    None,
}

impl Cli {
    /// Apply command-line flags on top of `config`.
    pub fn apply_to(&self, config: &mut GenConfig) {
        if let Some(ref prefix) = self.prefix {
            config.prefix = prefix.clone();
        }
        if let Some(ref namespace) = self.namespace {
            config.namespace = namespace.clone();
        }
        if let Some(ref guard) = self.guard {
            config.guard = guard.clone();
        }
        if let Some(ref class) = self.resource_class {
            config.resource_class = Some(class.clone());
        }
        if !self.search.is_empty() {
            config.search = self.search.clone();
        }
        if !self.includes.is_empty() {
            config.includes = self.includes.clone();
        }
        if let Some(align) = self.align {
            config.align = align;
        }
        if self.sorted {
            config.order = EmissionOrder::Sorted;
        }
        if self.escape_symbols {
            config.symbol_policy = SymbolPolicy::Escape;
        }

        if self.verbose {
            config.logging.level = "debug".to_string();
        }
        if let Some(ref level) = self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(ref format) = self.log_format {
            config.logging.format = format.clone();
        }
        if let Some(ref output) = self.log_output {
            config.logging.output = output.clone();
        }
        if let Some(ref file) = self.log_file {
            config.logging.file = Some(file.clone());
        }
    }

    /// Generation request described by the positional arguments and `-o`.
    pub fn request(&self) -> Result<GenerateRequest, GenError> {
        match self.output.as_slice() {
            [asm, header] => Ok(GenerateRequest {
                resources: self.resources.clone(),
                asm_output: asm.clone(),
                header_output: header.clone(),
            }),
            _ => Err(GenError::Config(
                "Expected exactly two output paths: <ASM> <HEADER>".to_string(),
            )),
        }
    }
}

/// CLI execution context: the merged configuration for one invocation.
pub struct CliContext {
    config: GenConfig,
}

impl CliContext {
    /// Load configuration (file and environment) and apply the CLI flags.
    pub fn new(cli: &Cli) -> Result<Self, GenError> {
        let mut config = match cli.config {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        cli.apply_to(&mut config);
        Ok(CliContext { config })
    }

    pub fn from_config(config: GenConfig) -> Self {
        CliContext { config }
    }

    pub fn config(&self) -> &GenConfig {
        &self.config
    }

    /// Styled report headings only when enabled, `NO_COLOR` is unset and stdout
    /// is a terminal.
    fn report_color(&self) -> bool {
        self.config.logging.color
            && std::env::var_os("NO_COLOR").is_none()
            && std::io::stdout().is_terminal()
    }

    /// Run the generation and return the report text to print.
    pub fn execute(&self, cli: &Cli) -> Result<String, GenError> {
        let request = cli.request()?;
        debug!(resources = request.resources.len(), "Starting generation");
        let report = generate(&request, &self.config)?;
        Ok(match cli.report {
            ReportFormat::Text => format_report_text(&report, self.report_color()),
            ReportFormat::Json => format_report_json(&report),
            ReportFormat::None => String::new(),
        })
    }
}
