//! Resource tree
//!
//! Logical names are split on their directory components; each component
//! becomes a nested namespace in the generated header.

pub mod node;

pub use node::Directory;

use std::path::{Component, Path};

/// Directory components of a logical name, normalized.
///
/// `a/./b/../c/d.bin` yields `["a", "c"]`; a bare file name yields nothing.
pub fn split_dir_path(name: &str) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::ParentDir => {
                parts.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    parts.pop();
    parts
}
