use std::collections::HashSet;

use futures::future::{BoxFuture, FutureExt};
use parking_lot::RwLock;
use serde_json::{Map, Value};

use super::{apply, ConfigurationService, ConfigurationTarget, Layers};
use crate::constants::builtin_defaults;
use crate::error::StoreError;

/// In-memory layered store seeded with the built-in defaults
#[derive(Debug)]
pub struct MemoryStore {
    layers: RwLock<Layers>,
    locked: RwLock<HashSet<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_defaults(builtin_defaults())
    }

    pub fn with_defaults(defaults: Map<String, Value>) -> Self {
        Self {
            layers: RwLock::new(Layers {
                defaults,
                ..Layers::default()
            }),
            locked: RwLock::new(HashSet::new()),
        }
    }

    /// Set a user-layer value directly, without going through `update`
    pub fn set_user(&self, key: &str, value: Value) {
        self.layers.write().user.insert(key.to_string(), value);
    }

    /// Set a workspace-layer value directly
    pub fn set_workspace(&self, key: &str, value: Value) {
        self.layers.write().workspace.insert(key.to_string(), value);
    }

    /// Value stored in one layer, ignoring the others
    pub fn layer_value(&self, target: ConfigurationTarget, key: &str) -> Option<Value> {
        self.layers.read().layer(target).get(key).cloned()
    }

    /// Reject every later update of `key`, like a policy-managed setting
    pub fn lock_key(&self, key: &str) {
        self.locked.write().insert(key.to_string());
    }

    pub fn unlock_key(&self, key: &str) {
        self.locked.write().remove(key);
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationService for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.layers.read().lookup(key)
    }

    fn update(
        &self,
        key: &str,
        value: Option<Value>,
        target: ConfigurationTarget,
    ) -> BoxFuture<'_, Result<(), StoreError>> {
        let key = key.to_string();
        async move {
            if self.locked.read().contains(&key) {
                return Err(StoreError::Rejected {
                    key,
                    reason: "setting is locked".to_string(),
                });
            }
            apply(self.layers.write().layer_mut(target), &key, value);
            Ok(())
        }
        .boxed()
    }
}
