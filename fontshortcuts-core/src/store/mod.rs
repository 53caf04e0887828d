//! Configuration service abstraction and the stores that implement it.
//!
//! Reads are synchronous and resolve the effective value across layers
//! (workspace over user over built-in defaults). Writes are asynchronous and
//! target one layer.

mod json;
mod memory;

pub use json::JsonSettingsStore;
pub use memory::MemoryStore;

use futures::future::BoxFuture;
use serde_json::{Map, Value};

use crate::error::StoreError;

/// Layer an update is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigurationTarget {
    /// User settings, applied across every workspace
    Global,
    /// Settings of the open workspace only
    Workspace,
}

impl ConfigurationTarget {
    pub fn from_is_global(is_global: bool) -> Self {
        if is_global {
            ConfigurationTarget::Global
        } else {
            ConfigurationTarget::Workspace
        }
    }
}

/// Key-value settings service injected into the command dispatcher
pub trait ConfigurationService: Send + Sync {
    /// Effective value of `key`, or `None` when no layer defines it
    fn get(&self, key: &str) -> Option<Value>;

    /// Set `key` in `target`; `None` removes the override from that layer
    fn update(
        &self,
        key: &str,
        value: Option<Value>,
        target: ConfigurationTarget,
    ) -> BoxFuture<'_, Result<(), StoreError>>;
}

/// The three layers of a settings store, lowest precedence first
#[derive(Debug, Clone, Default)]
pub(crate) struct Layers {
    pub defaults: Map<String, Value>,
    pub user: Map<String, Value>,
    pub workspace: Map<String, Value>,
}

impl Layers {
    pub fn lookup(&self, key: &str) -> Option<Value> {
        self.workspace
            .get(key)
            .or_else(|| self.user.get(key))
            .or_else(|| self.defaults.get(key))
            .cloned()
    }

    pub fn layer(&self, target: ConfigurationTarget) -> &Map<String, Value> {
        match target {
            ConfigurationTarget::Global => &self.user,
            ConfigurationTarget::Workspace => &self.workspace,
        }
    }

    pub fn layer_mut(&mut self, target: ConfigurationTarget) -> &mut Map<String, Value> {
        match target {
            ConfigurationTarget::Global => &mut self.user,
            ConfigurationTarget::Workspace => &mut self.workspace,
        }
    }
}

/// Apply a set-or-remove to one layer
pub(crate) fn apply(layer: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    match value {
        Some(value) => {
            layer.insert(key.to_string(), value);
        }
        None => {
            layer.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_layer_precedence() {
        let mut layers = Layers::default();
        layers.defaults.insert("k".into(), json!(1));
        assert_eq!(layers.lookup("k"), Some(json!(1)));

        layers.user.insert("k".into(), json!(2));
        assert_eq!(layers.lookup("k"), Some(json!(2)));

        layers.workspace.insert("k".into(), json!(3));
        assert_eq!(layers.lookup("k"), Some(json!(3)));

        assert_eq!(layers.lookup("missing"), None);
    }

    #[test]
    fn test_apply_remove_falls_back() {
        let mut layers = Layers::default();
        layers.defaults.insert("k".into(), json!(1));
        apply(layers.layer_mut(ConfigurationTarget::Global), "k", Some(json!(5)));
        assert_eq!(layers.lookup("k"), Some(json!(5)));
        apply(layers.layer_mut(ConfigurationTarget::Global), "k", None);
        assert_eq!(layers.lookup("k"), Some(json!(1)));
    }

    #[test]
    fn test_target_from_flag() {
        assert_eq!(ConfigurationTarget::from_is_global(true), ConfigurationTarget::Global);
        assert_eq!(
            ConfigurationTarget::from_is_global(false),
            ConfigurationTarget::Workspace
        );
    }
}
