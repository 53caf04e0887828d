/// Typed reads of the fontshortcuts settings. Nothing here is cached: every
/// command re-reads the store.
use serde_json::Value;

use crate::constants::{
    DEFAULT_EDITOR_FONT_SIZE, DEFAULT_TERMINAL_FONT_SIZE, LINE_HEIGHT_RATIO, STEP,
};
use crate::error::{Error, Result};
use crate::store::ConfigurationService;

/// Snapshot of the extension's own settings at one point in time
#[derive(Debug, Clone, PartialEq)]
pub struct ShortcutsSettings {
    pub step: f64,
    pub line_height_ratio: f64,
    pub default_font_size: Option<Value>,
    pub default_terminal_font_size: Option<Value>,
}

impl ShortcutsSettings {
    pub fn read<S: ConfigurationService + ?Sized>(store: &S) -> Result<Self> {
        Ok(Self {
            step: read_number(store, STEP)?,
            line_height_ratio: read_number(store, LINE_HEIGHT_RATIO)?,
            default_font_size: read_optional(store, DEFAULT_EDITOR_FONT_SIZE),
            default_terminal_font_size: read_optional(store, DEFAULT_TERMINAL_FONT_SIZE),
        })
    }
}

/// Read a numeric setting, failing when it is unset, null, or not a number
pub fn read_number<S: ConfigurationService + ?Sized>(store: &S, key: &str) -> Result<f64> {
    match store.get(key) {
        None | Some(Value::Null) => Err(Error::MissingSetting {
            key: key.to_string(),
        }),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| Error::InvalidSetting {
            key: key.to_string(),
            value: Value::Number(n),
        }),
        Some(other) => Err(Error::InvalidSetting {
            key: key.to_string(),
            value: other,
        }),
    }
}

/// Read a setting that may legitimately be absent; null is treated as absent
pub fn read_optional<S: ConfigurationService + ?Sized>(store: &S, key: &str) -> Option<Value> {
    store.get(key).filter(|value| !value.is_null())
}
