//! Code generators for the assembly and header artifacts

pub mod asm;
pub mod header;

pub use asm::{render_assembly, write_assembly, DEFAULT_ALIGN};
pub use header::{render_header, write_header, EmissionOrder, HeaderOptions};

use crate::error::{GenError, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Write `contents` to `path`, truncating any existing file.
///
/// The handle is dropped before returning, on success or failure.
pub(crate) fn write_output(path: &Path, contents: &str) -> Result<()> {
    let mut file = std::fs::File::create(path).map_err(|e| GenError::io(path, e))?;
    file.write_all(contents.as_bytes())
        .and_then(|_| file.flush())
        .map_err(|e| GenError::io(path, e))?;
    info!(path = %path.display(), bytes = contents.len(), "Wrote output");
    Ok(())
}
