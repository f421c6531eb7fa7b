//! Namespace node of the resource tree

/// One namespace level.
///
/// Children and resources keep first-insertion order. Resources are stored as
/// indices into the flat resource list owned by [`crate::bundle::Bundle`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    name: String,
    children: Vec<Directory>,
    resources: Vec<usize>,
}

impl Directory {
    /// Empty root node.
    pub fn root() -> Self {
        Self::default()
    }

    fn named(name: &str) -> Self {
        Directory {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Namespace name; empty for the root.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[Directory] {
        &self.children
    }

    /// Indices of the resources attached directly to this node.
    pub fn resources(&self) -> &[usize] {
        &self.resources
    }

    pub fn child(&self, name: &str) -> Option<&Directory> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Return the child namespace `name`, appending it if it does not exist yet.
    pub fn get_or_create_child(&mut self, name: &str) -> &mut Directory {
        let pos = match self.children.iter().position(|c| c.name == name) {
            Some(pos) => pos,
            None => {
                self.children.push(Directory::named(name));
                self.children.len() - 1
            }
        };
        &mut self.children[pos]
    }

    pub fn append_resource(&mut self, index: usize) {
        self.resources.push(index);
    }

    /// Attach resource `index` under the namespace path `path`, creating
    /// intermediate nodes as needed.
    pub fn insert_resource<S: AsRef<str>>(&mut self, path: &[S], index: usize) {
        match path.split_first() {
            None => self.append_resource(index),
            Some((head, rest)) => self
                .get_or_create_child(head.as_ref())
                .insert_resource(rest, index),
        }
    }

    /// Total number of resources in this subtree.
    pub fn resource_count(&self) -> usize {
        self.resources.len()
            + self
                .children
                .iter()
                .map(Directory::resource_count)
                .sum::<usize>()
    }

    /// Depth of the deepest namespace below this node (0 for a leaf).
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}
