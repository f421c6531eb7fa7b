//! Error types for resource compilation

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving resources or generating output.
///
/// Every variant is fatal: the run stops and no retry is attempted.
#[derive(Error, Debug)]
pub enum GenError {
    #[error("Resource '{name}' not found in search directories {searched:?}")]
    ResourceNotFound { name: String, searched: Vec<PathBuf> },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid identifier '{name}': {reason}")]
    InvalidIdentifier { name: String, reason: String },

    #[error("Symbol '{symbol}' is produced by both '{first}' and '{second}'")]
    DuplicateSymbol {
        symbol: String,
        first: String,
        second: String,
    },

    #[error("Identifier '{ident}' declared twice in namespace '{scope}' (by '{first}' and '{second}')")]
    DuplicateDeclaration {
        scope: String,
        ident: String,
        first: String,
        second: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl GenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<config::ConfigError> for GenError {
    fn from(err: config::ConfigError) -> Self {
        GenError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
