//! Header emitter
//!
//! Produces a C++ header with one `extern "C"` declaration per resource and a
//! namespace tree of `constexpr` resource objects referring to them.

use super::write_output;
use crate::bundle::Bundle;
use crate::error::{GenError, Result};
use crate::resource::Resource;
use crate::symbol::{self, SymbolPolicy};
use crate::tree::Directory;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Order of namespaces and resources inside each level of the tree.
///
/// The extern block and the assembly always follow input order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmissionOrder {
    /// First-seen first-emitted.
    #[default]
    Insertion,
    /// Lexicographic by namespace name / resource identifier.
    Sorted,
}

/// Caller-supplied settings for the header.
#[derive(Debug, Clone)]
pub struct HeaderOptions {
    pub namespace: String,
    pub guard: String,
    pub includes: Vec<String>,
    pub resource_class: String,
    pub order: EmissionOrder,
}

impl HeaderOptions {
    /// Reject settings that would produce a header that cannot compile.
    pub fn validate(&self) -> Result<()> {
        symbol::sanitize(&self.namespace, SymbolPolicy::Reject)?;
        symbol::sanitize(&self.guard, SymbolPolicy::Reject)?;

        let class = self.resource_class.strip_prefix("::").unwrap_or(&self.resource_class);
        for part in class.split("::") {
            symbol::sanitize(part, SymbolPolicy::Reject).map_err(|_| {
                GenError::Config(format!("Invalid resource class: '{}'", self.resource_class))
            })?;
        }

        for include in &self.includes {
            if include.is_empty() || include.contains(['"', '\n', '\r']) {
                return Err(GenError::Config(format!("Invalid include: {:?}", include)));
            }
        }
        Ok(())
    }
}

/// Render the header for `bundle`.
pub fn render_header(bundle: &Bundle, options: &HeaderOptions) -> String {
    let includes = options
        .includes
        .iter()
        .map(|file| format!("#include \"{}\"", file))
        .collect::<Vec<_>>()
        .join("\n");

    let externals = bundle
        .resources()
        .iter()
        .map(|res| format!("\t\textern \"C\" const char {}[];", res.symbol))
        .collect::<Vec<_>>()
        .join("\n");

    let body = serialize_directory(bundle.tree(), bundle.resources(), options, 1);

    format!(
        "#ifndef {guard}\n\
         #define {guard}\n\
         \n\
         #include <cstddef>\n\
         {includes}\n\
         \n\
         namespace {namespace} {{\n\
         \x20   namespace externals {{\n\
         {externals}\n\
         \x20   }}\n\
         \n\
         {body}\n\
         }}\n\
         \n\
         #endif\n",
        guard = options.guard,
        includes = includes,
        namespace = options.namespace,
        externals = externals,
        body = body,
    )
}

/// Serialize one namespace level: child namespaces first, then the resources
/// attached directly to it.
fn serialize_directory(
    dir: &Directory,
    resources: &[Resource],
    options: &HeaderOptions,
    depth: usize,
) -> String {
    let indent = " ".repeat(depth * 4);

    let mut children: Vec<&Directory> = dir.children().iter().collect();
    let mut attached: Vec<&Resource> = dir.resources().iter().map(|&i| &resources[i]).collect();
    if options.order == EmissionOrder::Sorted {
        children.sort_by(|a, b| a.name().cmp(b.name()));
        attached.sort_by(|a, b| a.ident.cmp(&b.ident));
    }

    let mut items = Vec::with_capacity(children.len() + attached.len());
    for child in children {
        items.push(format!(
            "{indent}namespace {name} {{\n{nested}\n{indent}}}",
            indent = indent,
            name = child.name(),
            nested = serialize_directory(child, resources, options, depth + 1),
        ));
    }
    for res in attached {
        items.push(format!(
            "{indent}constexpr const {class} {ident}(externals::{symbol}, {size});",
            indent = indent,
            class = options.resource_class,
            ident = res.ident,
            symbol = res.symbol,
            size = res.size,
        ));
    }
    items.join("\n")
}

pub fn write_header(path: &Path, bundle: &Bundle, options: &HeaderOptions) -> Result<()> {
    write_output(path, &render_header(bundle, options))
}
