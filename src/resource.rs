//! Resource descriptors and search-path resolution

use crate::error::{GenError, Result};
use crate::symbol::{self, SymbolPolicy};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One resource to embed.
///
/// Built once per input name and read-only afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Resource {
    /// Symbol prefix shared by the whole run.
    pub prefix: String,
    /// Logical name as supplied by the caller, e.g. `icons/a.png`.
    pub name: String,
    /// Absolute path of the file found for `name`.
    pub path: PathBuf,
    /// File size in bytes, without the appended terminator.
    pub size: u64,
    /// Linker symbol for the resource bytes.
    pub symbol: String,
    /// Identifier of the constant object inside its namespace.
    pub ident: String,
}

impl Resource {
    /// Create a descriptor for a file that has already been located.
    ///
    /// Only the file's metadata is read; contents are left to the assembler.
    pub fn new(prefix: &str, name: &str, path: &Path, policy: SymbolPolicy) -> Result<Self> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GenError::ResourceNotFound {
                    name: name.to_string(),
                    searched: Vec::new(),
                }
            } else {
                GenError::io(path, e)
            }
        })?;

        let file_name = Path::new(name)
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| GenError::InvalidIdentifier {
                name: name.to_string(),
                reason: "resource name has no file name component".to_string(),
            })?;

        let symbol = symbol::mangle_checked(prefix, name, policy)?;
        let ident = symbol::resource_identifier(file_name, policy)?;
        let path = dunce::canonicalize(path).map_err(|e| GenError::io(path, e))?;

        Ok(Resource {
            prefix: prefix.to_string(),
            name: name.to_string(),
            path,
            size: metadata.len(),
            symbol,
            ident,
        })
    }
}

/// Find `name` in the first search directory that contains it as a regular file.
pub fn find_file(name: &str, directories: &[PathBuf]) -> Result<PathBuf> {
    for dir in directories {
        let candidate = dir.join(name);
        if candidate.is_file() {
            debug!(resource = name, path = %candidate.display(), "Resolved resource");
            return Ok(candidate);
        }
    }
    Err(GenError::ResourceNotFound {
        name: name.to_string(),
        searched: directories.to_vec(),
    })
}

/// Resolve and describe every resource, in input order.
///
/// Fails on the first missing or invalid resource, before any output exists.
pub fn resolve_all(
    names: &[String],
    directories: &[PathBuf],
    prefix: &str,
    policy: SymbolPolicy,
) -> Result<Vec<Resource>> {
    names
        .iter()
        .map(|name| {
            let path = find_file(name, directories)?;
            Resource::new(prefix, name, &path, policy)
        })
        .collect()
}
