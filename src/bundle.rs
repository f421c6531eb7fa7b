//! Ordered resource list plus the namespace tree built from it
//!
//! Both emitters read from one `Bundle`: the assembly and the header's extern
//! block walk `resources()` in input order, and the header body walks `tree()`.

use crate::error::{GenError, Result};
use crate::resource::Resource;
use crate::symbol::{self, SymbolPolicy};
use crate::tree::{split_dir_path, Directory};
use std::collections::HashMap;
use tracing::trace;

/// Resources in input order and the tree that classifies them.
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    resources: Vec<Resource>,
    tree: Directory,
    symbols: HashMap<String, usize>,
}

impl Bundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bundle from resolved resources, keeping their order.
    pub fn from_resources(resources: Vec<Resource>, policy: SymbolPolicy) -> Result<Self> {
        let mut bundle = Bundle::new();
        for resource in resources {
            bundle.insert(resource, policy)?;
        }
        Ok(bundle)
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn tree(&self) -> &Directory {
        &self.tree
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Append `resource` to the flat list and attach it to the tree.
    ///
    /// Rejects a symbol already defined by another resource, and any name that
    /// would be declared twice in the same namespace.
    pub fn insert(&mut self, resource: Resource, policy: SymbolPolicy) -> Result<()> {
        if let Some(&existing) = self.symbols.get(&resource.symbol) {
            return Err(GenError::DuplicateSymbol {
                symbol: resource.symbol.clone(),
                first: self.resources[existing].name.clone(),
                second: resource.name,
            });
        }

        let namespaces = split_dir_path(&resource.name)
            .iter()
            .map(|component| symbol::namespace_identifier(component, policy))
            .collect::<Result<Vec<_>>>()?;

        let index = self.resources.len();
        let scope = self.check_declarations(&namespaces, &resource)?;

        trace!(resource = %resource.name, scope = %scope_name(&scope), "Inserted resource");
        self.tree.insert_resource(namespaces.as_slice(), index);
        self.symbols.insert(resource.symbol.clone(), index);
        self.resources.push(resource);
        Ok(())
    }

    /// Walk `namespaces` without creating nodes and reject any name that would
    /// be declared twice. Returns the scope path on success.
    fn check_declarations<'n>(
        &self,
        namespaces: &'n [String],
        resource: &Resource,
    ) -> Result<Vec<&'n str>> {
        let mut scope: Vec<&str> = Vec::with_capacity(namespaces.len());
        let mut node = Some(&self.tree);

        for ns in namespaces {
            if scope.is_empty() && ns == EXTERNALS_NAMESPACE {
                return Err(reserved_externals(resource));
            }
            if let Some(dir) = node {
                if let Some(clash) = find_resource(dir, &self.resources, ns) {
                    return Err(GenError::DuplicateDeclaration {
                        scope: scope_name(&scope),
                        ident: ns.clone(),
                        first: clash.name.clone(),
                        second: resource.name.clone(),
                    });
                }
                node = dir.child(ns);
            }
            scope.push(ns.as_str());
        }

        if scope.is_empty() && resource.ident == EXTERNALS_NAMESPACE {
            return Err(reserved_externals(resource));
        }

        // A namespace that does not exist yet holds nothing to clash with.
        let Some(dir) = node else {
            return Ok(scope);
        };
        if let Some(clash) = find_resource(dir, &self.resources, &resource.ident) {
            return Err(GenError::DuplicateDeclaration {
                scope: scope_name(&scope),
                ident: resource.ident.clone(),
                first: clash.name.clone(),
                second: resource.name.clone(),
            });
        }
        if dir.child(&resource.ident).is_some() {
            return Err(GenError::DuplicateDeclaration {
                scope: scope_name(&scope),
                ident: resource.ident.clone(),
                first: format!("namespace {}", resource.ident),
                second: resource.name.clone(),
            });
        }
        Ok(scope)
    }
}

/// Namespace the header emits at the root for the extern declarations.
pub const EXTERNALS_NAMESPACE: &str = "externals";

fn reserved_externals(resource: &Resource) -> GenError {
    GenError::DuplicateDeclaration {
        scope: scope_name(&[]),
        ident: EXTERNALS_NAMESPACE.to_string(),
        first: format!("namespace {}", EXTERNALS_NAMESPACE),
        second: resource.name.clone(),
    }
}

fn find_resource<'a>(node: &Directory, resources: &'a [Resource], ident: &str) -> Option<&'a Resource> {
    node.resources()
        .iter()
        .map(|&i| &resources[i])
        .find(|r| r.ident == ident)
}

fn scope_name(scope: &[&str]) -> String {
    if scope.is_empty() {
        "<root>".to_string()
    } else {
        scope.join("::")
    }
}
