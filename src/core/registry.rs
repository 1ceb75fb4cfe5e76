use std::collections::BTreeMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::core::node::Node;
use crate::core::nodes::{RandomImageLoader, RandomImagePath};

/// Node-class and display-name mappings the host uses to discover and
/// instantiate nodes.
#[derive(Default)]
pub struct NodeRegistry {
    classes: BTreeMap<&'static str, Arc<dyn Node>>,
    display_names: BTreeMap<&'static str, &'static str>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, node: Arc<dyn Node>) {
        self.display_names.insert(node.name(), node.display_name());
        self.classes.insert(node.name(), node);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Node>> {
        self.classes.get(name)
    }

    pub fn display_name(&self, name: &str) -> Option<&'static str> {
        self.display_names.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.classes.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Register both picker nodes into a host-owned registry.
pub fn register_builtin(registry: &mut NodeRegistry) {
    registry.register(Arc::new(RandomImageLoader));
    registry.register(Arc::new(RandomImagePath));
}

static BUILTIN: Lazy<NodeRegistry> = Lazy::new(|| {
    let mut registry = NodeRegistry::new();
    register_builtin(&mut registry);
    registry
});

/// The crate's built-in node table.
pub fn builtin_nodes() -> &'static NodeRegistry {
    &BUILTIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_has_both_nodes() {
        let registry = builtin_nodes();
        assert_eq!(registry.len(), 2);
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, ["RandomImageLoader", "RandomImagePath"]);
    }

    #[test]
    fn display_names_track_registration() {
        let registry = builtin_nodes();
        assert_eq!(
            registry.display_name("RandomImageLoader"),
            Some("Random Image Loader")
        );
        assert_eq!(
            registry.display_name("RandomImagePath"),
            Some("Random Image Path")
        );
        assert_eq!(registry.display_name("NoSuchNode"), None);
    }

    #[test]
    fn lookup_returns_the_registered_class() {
        let registry = builtin_nodes();
        let node = registry.get("RandomImagePath").unwrap();
        assert_eq!(node.category(), "image/random");
        assert_eq!(node.returns().len(), 1);
    }
}
