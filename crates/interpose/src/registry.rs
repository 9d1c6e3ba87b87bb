//! Plugin trait, host contract, and the ordered plugin registry.

use std::fmt;
use std::sync::Arc;

use tracing::info;

use crate::hooks::definitions::HookTable;

/// Trait that all plugins implement.
///
/// A plugin contributes hooks through its [`HookTable`]; one instance may
/// hook any number of operations and hook kinds at once. The name appears in
/// conflict diagnostics, so it should identify the plugin to an operator.
pub trait Plugin<H>: Send + Sync + fmt::Debug {
    /// Returns the plugin name.
    fn name(&self) -> &str;

    /// Returns the plugin's capability table.
    fn hooks(&self) -> &HookTable<H>;
}

/// Contract a host type satisfies to have its operations intercepted.
///
/// The plugin sequence is owned by the host and populated externally before
/// any intercepted call occurs; iteration order of the returned slice is the
/// hook resolution order.
pub trait Host: Sized {
    /// Returns the ordered plugin sequence.
    fn plugins(&self) -> &[Arc<dyn Plugin<Self>>];
}

/// Ordered collection of plugins a host can embed to satisfy [`Host`].
///
/// Insertion order is preserved and is the resolution order. Nothing else is
/// imposed on the sequence; in particular, duplicate names are allowed.
pub struct PluginRegistry<H> {
    /// Plugins in registration order.
    plugins: Vec<Arc<dyn Plugin<H>>>,
}

impl<H> PluginRegistry<H> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    /// Appends a plugin at the end of the resolution order.
    pub fn register(&mut self, plugin: Arc<dyn Plugin<H>>) {
        info!(plugin = %plugin.name(), "plugin registered");
        self.plugins.push(plugin);
    }

    /// Inserts a plugin at a specific position in the resolution order.
    pub fn insert(&mut self, index: usize, plugin: Arc<dyn Plugin<H>>) {
        info!(plugin = %plugin.name(), index, "plugin inserted");
        self.plugins.insert(index, plugin);
    }

    /// Removes every plugin with the given name, returning how many were
    /// dropped.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.plugins.len();
        self.plugins.retain(|plugin| plugin.name() != name);
        before - self.plugins.len()
    }

    /// Returns whether a plugin with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.name() == name)
    }

    /// Number of registered plugins.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Returns whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// The ordered plugin slice, as the [`Host`] contract returns it.
    pub fn as_slice(&self) -> &[Arc<dyn Plugin<H>>] {
        &self.plugins
    }

    /// Iterates plugins in resolution order.
    pub fn iter(&self) -> std::slice::Iter<'_, Arc<dyn Plugin<H>>> {
        self.plugins.iter()
    }
}

impl<H> Default for PluginRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> fmt::Debug for PluginRegistry<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.plugins.iter().map(|plugin| plugin.name()).collect();
        f.debug_struct("PluginRegistry")
            .field("plugins", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::HookPlugin;

    fn named(name: &str) -> Arc<dyn Plugin<()>> {
        Arc::new(HookPlugin::new(name))
    }

    #[test]
    fn test_registration_order_is_preserved() {
        let mut registry: PluginRegistry<()> = PluginRegistry::new();
        registry.register(named("first"));
        registry.register(named("second"));
        registry.insert(0, named("zeroth"));

        let order: Vec<&str> = registry.iter().map(|plugin| plugin.name()).collect();
        assert_eq!(order, vec!["zeroth", "first", "second"]);
    }

    #[test]
    fn test_remove_drops_every_match() {
        let mut registry: PluginRegistry<()> = PluginRegistry::new();
        registry.register(named("audit"));
        registry.register(named("mock"));
        registry.register(named("audit"));

        assert_eq!(registry.remove("audit"), 2);
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("mock"));
        assert!(!registry.contains("audit"));
    }
}
