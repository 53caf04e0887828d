use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use futures::future::{BoxFuture, FutureExt};
use log::{debug, info};
use parking_lot::RwLock;
use serde_json::{Map, Value};
use tokio::sync::Mutex;

use super::{apply, ConfigurationService, ConfigurationTarget, Layers};
use crate::constants::builtin_defaults;
use crate::error::StoreError;

/// Layered store backed by a user `settings.json` and an optional workspace one.
///
/// Both files hold a flat JSON object keyed by dotted setting names. Each
/// update rewrites its file while holding that file's write lock; the
/// in-memory layer is replaced only after the write succeeds.
pub struct JsonSettingsStore {
    layers: RwLock<Layers>,
    user_path: PathBuf,
    workspace_path: Option<PathBuf>,
    user_lock: Mutex<()>,
    workspace_lock: Mutex<()>,
}

impl JsonSettingsStore {
    /// Load both settings files. Missing files read as empty layers.
    pub async fn open(
        user_path: impl Into<PathBuf>,
        workspace_path: Option<PathBuf>,
    ) -> Result<Self, StoreError> {
        let store = Self {
            layers: RwLock::new(Layers {
                defaults: builtin_defaults(),
                ..Layers::default()
            }),
            user_path: user_path.into(),
            workspace_path,
            user_lock: Mutex::new(()),
            workspace_lock: Mutex::new(()),
        };
        store.reload().await?;
        Ok(store)
    }

    /// Re-read both files, discarding the in-memory user and workspace layers
    pub async fn reload(&self) -> Result<(), StoreError> {
        // same order everywhere; `update` only ever holds one of these
        let _user_guard = self.user_lock.lock().await;
        let _workspace_guard = self.workspace_lock.lock().await;

        let user = read_layer(&self.user_path).await?;
        let workspace = match &self.workspace_path {
            Some(path) => read_layer(path).await?,
            None => Map::new(),
        };

        info!(
            "Loaded settings: {} user keys from {}, {} workspace keys",
            user.len(),
            self.user_path.display(),
            workspace.len()
        );

        let mut layers = self.layers.write();
        layers.user = user;
        layers.workspace = workspace;
        Ok(())
    }

    pub fn user_path(&self) -> &Path {
        &self.user_path
    }

    pub fn workspace_path(&self) -> Option<&Path> {
        self.workspace_path.as_deref()
    }

    fn target_file(&self, target: ConfigurationTarget) -> Result<(&Path, &Mutex<()>), StoreError> {
        match target {
            ConfigurationTarget::Global => Ok((&self.user_path, &self.user_lock)),
            ConfigurationTarget::Workspace => self
                .workspace_path
                .as_deref()
                .map(|path| (path, &self.workspace_lock))
                .ok_or(StoreError::NoWorkspace),
        }
    }
}

impl ConfigurationService for JsonSettingsStore {
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
            let (path, lock) = self.target_file(target)?;
            let _guard = lock.lock().await;

            let mut next = self.layers.read().layer(target).clone();
            apply(&mut next, &key, value);
            write_layer(path, &next).await?;
            *self.layers.write().layer_mut(target) = next;

            debug!("Updated \"{}\" in {}", key, path.display());
            Ok(())
        }
        .boxed()
    }
}

async fn read_layer(path: &Path) -> Result<Map<String, Value>, StoreError> {
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Settings file {} does not exist yet", path.display());
            return Ok(Map::new());
        }
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if contents.trim().is_empty() {
        return Ok(Map::new());
    }

    let value: Value = serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(StoreError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

async fn write_layer(path: &Path, layer: &Map<String, Value>) -> Result<(), StoreError> {
    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
    }

    let mut contents = serde_json::to_string_pretty(layer)?;
    contents.push('\n');
    tokio::fs::write(path, contents).await.map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_missing_files_read_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSettingsStore::open(dir.path().join("settings.json"), None)
            .await
            .unwrap();
        assert_eq!(store.get("editor.fontSize"), Some(json!(14)));
        assert_eq!(store.get("fontshortcuts.lineHeight"), Some(json!(1.4)));
    }

    #[tokio::test]
    async fn test_layers_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let user = dir.path().join("user.json");
        let workspace = dir.path().join("workspace.json");
        std::fs::write(&user, r#"{"editor.fontSize": 16, "fontshortcuts.step": 2}"#).unwrap();
        std::fs::write(&workspace, r#"{"editor.fontSize": 12}"#).unwrap();

        let store = JsonSettingsStore::open(&user, Some(workspace)).await.unwrap();
        assert_eq!(store.get("editor.fontSize"), Some(json!(12)));
        assert_eq!(store.get("fontshortcuts.step"), Some(json!(2)));
    }

    #[tokio::test]
    async fn test_update_creates_file_and_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let user = dir.path().join("nested").join("settings.json");
        let store = JsonSettingsStore::open(&user, None).await.unwrap();

        store
            .update("workbench.colorTheme", Some(json!("Dark")), ConfigurationTarget::Global)
            .await
            .unwrap();
        store
            .update("editor.fontSize", Some(json!(18)), ConfigurationTarget::Global)
            .await
            .unwrap();

        let on_disk: Value =
            serde_json::from_str(&std::fs::read_to_string(&user).unwrap()).unwrap();
        assert_eq!(on_disk["editor.fontSize"], json!(18));
        assert_eq!(on_disk["workbench.colorTheme"], json!("Dark"));
    }

    #[tokio::test]
    async fn test_removal_deletes_key_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let user = dir.path().join("settings.json");
        std::fs::write(&user, r#"{"editor.fontSize": 30}"#).unwrap();
        let store = JsonSettingsStore::open(&user, None).await.unwrap();

        store
            .update("editor.fontSize", None, ConfigurationTarget::Global)
            .await
            .unwrap();

        let on_disk: Value =
            serde_json::from_str(&std::fs::read_to_string(&user).unwrap()).unwrap();
        assert!(on_disk.get("editor.fontSize").is_none());
        assert_eq!(store.get("editor.fontSize"), Some(json!(14)));
    }

    #[tokio::test]
    async fn test_concurrent_updates_keep_both_keys() {
        let dir = tempfile::tempdir().unwrap();
        let user = dir.path().join("settings.json");
        let store = JsonSettingsStore::open(&user, None).await.unwrap();

        let (a, b) = futures::join!(
            store.update("editor.fontSize", Some(json!(14)), ConfigurationTarget::Global),
            store.update("editor.lineHeight", Some(json!(19.6)), ConfigurationTarget::Global),
        );
        a.unwrap();
        b.unwrap();

        store.reload().await.unwrap();
        assert_eq!(store.get("editor.fontSize"), Some(json!(14)));
        assert_eq!(store.get("editor.lineHeight"), Some(json!(19.6)));
    }

    #[tokio::test]
    async fn test_reload_during_update_keeps_the_write() {
        let dir = tempfile::tempdir().unwrap();
        let user = dir.path().join("settings.json");
        std::fs::write(&user, r#"{"editor.fontSize": 12}"#).unwrap();
        let store = JsonSettingsStore::open(&user, None).await.unwrap();

        for size in 13..20 {
            let (updated, reloaded) = futures::join!(
                store.update("editor.fontSize", Some(json!(size)), ConfigurationTarget::Global),
                store.reload(),
            );
            updated.unwrap();
            reloaded.unwrap();
            assert_eq!(store.get("editor.fontSize"), Some(json!(size)));
        }
    }

    #[tokio::test]
    async fn test_workspace_update_without_workspace_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSettingsStore::open(dir.path().join("settings.json"), None)
            .await
            .unwrap();
        let err = store
            .update("editor.fontSize", Some(json!(10)), ConfigurationTarget::Workspace)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NoWorkspace));
    }

    #[tokio::test]
    async fn test_invalid_files_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(
            JsonSettingsStore::open(&broken, None).await,
            Err(StoreError::Parse { .. })
        ));

        let array = dir.path().join("array.json");
        std::fs::write(&array, "[1, 2]").unwrap();
        assert!(matches!(
            JsonSettingsStore::open(&array, None).await,
            Err(StoreError::NotAnObject { .. })
        ));
    }
}
