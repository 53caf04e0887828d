/// Font size bounds and configuration key names shared by the step and reset paths
///
/// Key names must match the host's settings schema exactly. The surface table in
/// `surface.rs` is the only place that pairs them up per surface.

/// Smallest font size a configured default may name
pub const MIN_FONT_SIZE: i64 = 1;

/// Largest integer an IEEE double represents without precision loss (2^53 - 1)
pub const MAX_FONT_SIZE: i64 = 9_007_199_254_740_991;

/// Editor font size key
pub const EDITOR_FONT_SIZE: &str = "editor.fontSize";

/// Editor line height key
pub const EDITOR_LINE_HEIGHT: &str = "editor.lineHeight";

/// Integrated terminal font size key
pub const TERMINAL_FONT_SIZE: &str = "terminal.integrated.fontSize";

/// Integrated terminal line height key
pub const TERMINAL_LINE_HEIGHT: &str = "terminal.integrated.lineHeight";

/// Amount added or removed per step command
pub const STEP: &str = "fontshortcuts.step";

/// Ratio used to derive the persisted line height from the new font size
pub const LINE_HEIGHT_RATIO: &str = "fontshortcuts.lineHeight";

/// Font size the editor reset applies (null means "clear the override")
pub const DEFAULT_EDITOR_FONT_SIZE: &str = "fontshortcuts.defaultFontSize";

/// Font size the terminal reset applies (null means "clear the override")
pub const DEFAULT_TERMINAL_FONT_SIZE: &str = "fontshortcuts.defaultTerminalFontSize";

/// Built-in values for the lowest configuration layer
pub const BUILTIN_DEFAULTS: &[(&str, BuiltinValue)] = &[
    (EDITOR_FONT_SIZE, BuiltinValue::Int(14)),
    (EDITOR_LINE_HEIGHT, BuiltinValue::Int(0)),
    (TERMINAL_FONT_SIZE, BuiltinValue::Int(14)),
    (TERMINAL_LINE_HEIGHT, BuiltinValue::Int(1)),
    (STEP, BuiltinValue::Int(1)),
    (LINE_HEIGHT_RATIO, BuiltinValue::Float(1.4)),
    (DEFAULT_EDITOR_FONT_SIZE, BuiltinValue::Null),
    (DEFAULT_TERMINAL_FONT_SIZE, BuiltinValue::Null),
];

/// A const-friendly stand-in for a JSON value in `BUILTIN_DEFAULTS`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BuiltinValue {
    Null,
    Int(i64),
    Float(f64),
}

impl BuiltinValue {
    pub fn to_json(self) -> serde_json::Value {
        match self {
            BuiltinValue::Null => serde_json::Value::Null,
            BuiltinValue::Int(v) => serde_json::Value::from(v),
            BuiltinValue::Float(v) => serde_json::Value::from(v),
        }
    }
}

/// Built-in defaults as JSON values
pub fn builtin_defaults() -> serde_json::Map<String, serde_json::Value> {
    BUILTIN_DEFAULTS
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_json()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_font_size_is_exact_in_f64() {
        assert_eq!(MAX_FONT_SIZE as f64 as i64, MAX_FONT_SIZE);
        assert_eq!(MAX_FONT_SIZE, (1i64 << 53) - 1);
    }

    #[test]
    fn test_builtin_defaults_cover_every_key() {
        let defaults = builtin_defaults();
        for key in [
            EDITOR_FONT_SIZE,
            EDITOR_LINE_HEIGHT,
            TERMINAL_FONT_SIZE,
            TERMINAL_LINE_HEIGHT,
            STEP,
            LINE_HEIGHT_RATIO,
            DEFAULT_EDITOR_FONT_SIZE,
            DEFAULT_TERMINAL_FONT_SIZE,
        ] {
            assert!(defaults.contains_key(key), "missing default for {}", key);
        }
        assert!(defaults[DEFAULT_EDITOR_FONT_SIZE].is_null());
        assert_eq!(defaults[LINE_HEIGHT_RATIO].as_f64(), Some(1.4));
    }
}
