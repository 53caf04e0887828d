/// Reset policy: decide what a reset command does with the configured default
use serde_json::Value;

use crate::constants::{MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::surface::Surface;

/// What a reset command should do for one surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetOutcome {
    /// No default configured: remove the font size override (best effort)
    ClearOverride,
    /// Write this value to the surface's font size key; line height is left alone
    ApplyDefault(i64),
    /// Default is configured but unusable; show this message to the user
    RejectInvalid(String),
}

/// Resolve a reset for `surface` given the value read from its default key.
///
/// Presence is checked before validity, so a missing or null default clears the
/// override while a present but invalid one is rejected.
pub fn resolve_reset(surface: Surface, default: Option<&Value>) -> ResetOutcome {
    let default = match default {
        None | Some(Value::Null) => return ResetOutcome::ClearOverride,
        Some(value) => value,
    };

    match as_safe_integer(default) {
        Some(size) if (MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size) => {
            ResetOutcome::ApplyDefault(size)
        }
        _ => ResetOutcome::RejectInvalid(invalid_default_message(
            default,
            surface.keys().default_font_size,
        )),
    }
}

/// User-facing text for an unusable default
pub fn invalid_default_message(value: &Value, key: &str) -> String {
    format!(
        "Cannot set font size to \"{}\". Please set \"{}\" to an integer between {} and {} in your user settings.",
        display_value(value),
        key,
        MIN_FONT_SIZE,
        MAX_FONT_SIZE
    )
}

/// An integral JSON number whose magnitude fits in 53 bits
fn as_safe_integer(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(v) = number.as_i64() {
        return (v.abs() <= MAX_FONT_SIZE).then_some(v);
    }
    if number.is_u64() {
        // above i64::MAX, so never safe
        return None;
    }
    let v = number.as_f64()?;
    if v.is_finite() && v.fract() == 0.0 && v.abs() <= MAX_FONT_SIZE as f64 {
        Some(v as i64)
    } else {
        None
    }
}

/// Render a value the way a script host prints it in a template string
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(v) if n.is_f64() && v.fract() == 0.0 && v.abs() < 1e21 => {
                format!("{}", v as i128)
            }
            _ => n.to_string(),
        },
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
        other => other.to_string(),
    }
}
