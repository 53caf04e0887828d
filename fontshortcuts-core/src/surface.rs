use std::fmt;
use std::str::FromStr;

use crate::constants::{
    DEFAULT_EDITOR_FONT_SIZE, DEFAULT_TERMINAL_FONT_SIZE, EDITOR_FONT_SIZE, EDITOR_LINE_HEIGHT,
    TERMINAL_FONT_SIZE, TERMINAL_LINE_HEIGHT,
};
use crate::error::Error;

/// A display surface whose font size can be adjusted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    Editor = 0,
    Terminal = 1,
}

/// Configuration keys owned by one surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceKeys {
    pub font_size: &'static str,
    pub line_height: &'static str,
    pub default_font_size: &'static str,
}

/// Indexed by the `Surface` discriminant
static SURFACE_KEYS: [SurfaceKeys; 2] = [
    SurfaceKeys {
        font_size: EDITOR_FONT_SIZE,
        line_height: EDITOR_LINE_HEIGHT,
        default_font_size: DEFAULT_EDITOR_FONT_SIZE,
    },
    SurfaceKeys {
        font_size: TERMINAL_FONT_SIZE,
        line_height: TERMINAL_LINE_HEIGHT,
        default_font_size: DEFAULT_TERMINAL_FONT_SIZE,
    },
];

impl Surface {
    pub const ALL: [Surface; 2] = [Surface::Editor, Surface::Terminal];

    /// Look up the configuration keys for this surface
    pub fn keys(self) -> &'static SurfaceKeys {
        &SURFACE_KEYS[self as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            Surface::Editor => "editor",
            Surface::Terminal => "terminal",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Surface {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Surface::ALL
            .into_iter()
            .find(|surface| surface.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownSurface(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_keys() {
        let keys = Surface::Editor.keys();
        assert_eq!(keys.font_size, "editor.fontSize");
        assert_eq!(keys.line_height, "editor.lineHeight");
        assert_eq!(keys.default_font_size, "fontshortcuts.defaultFontSize");
    }

    #[test]
    fn test_terminal_keys() {
        let keys = Surface::Terminal.keys();
        assert_eq!(keys.font_size, "terminal.integrated.fontSize");
        assert_eq!(keys.line_height, "terminal.integrated.lineHeight");
        assert_eq!(
            keys.default_font_size,
            "fontshortcuts.defaultTerminalFontSize"
        );
    }

    #[test]
    fn test_surfaces_share_no_keys() {
        let editor = Surface::Editor.keys();
        let terminal = Surface::Terminal.keys();
        for a in [editor.font_size, editor.line_height, editor.default_font_size] {
            for b in [
                terminal.font_size,
                terminal.line_height,
                terminal.default_font_size,
            ] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_parse_surface() {
        assert_eq!("editor".parse::<Surface>().unwrap(), Surface::Editor);
        assert_eq!(" Terminal ".parse::<Surface>().unwrap(), Surface::Terminal);
        assert!("panel".parse::<Surface>().is_err());
    }
}
