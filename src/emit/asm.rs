//! Assembly emitter
//!
//! Each resource becomes a global, aligned label followed by an `.incbin` of
//! the file and one terminating zero byte.

use super::write_output;
use crate::bundle::Bundle;
use crate::error::Result;
use crate::resource::Resource;
use std::fmt::Write;
use std::path::Path;

pub const DEFAULT_ALIGN: u32 = 4;

/// Render the assembly source for `resources`, in the given order.
pub fn render_assembly(resources: &[Resource], align: u32) -> String {
    let mut out = String::from(".section .rodata\n");
    for res in resources {
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "    .global {sym}\n    .align {align}\n{sym}:\n    .incbin \"{file}\"\n    .byte 0\n",
            sym = res.symbol,
            align = align,
            file = quote_operand(&res.name),
        );
    }
    out
}

/// Escape `name` for use inside a double-quoted assembler string.
///
/// Backslash and quote are backslash-escaped; control characters are written
/// as three-digit octal escapes.
fn quote_operand(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\{:03o}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

pub fn write_assembly(path: &Path, bundle: &Bundle, align: u32) -> Result<()> {
    write_output(path, &render_assembly(bundle.resources(), align))
}
