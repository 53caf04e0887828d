/// Default key chords for the font size commands
use crate::commands::Command;

/// A chord in normalized form and the command it triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keybinding {
    pub chord: &'static str,
    pub command: Command,
}

pub static DEFAULT_KEYBINDINGS: &[Keybinding] = &[
    Keybinding {
        chord: "ctrl+=",
        command: Command::IncreaseFontSize,
    },
    Keybinding {
        chord: "ctrl+-",
        command: Command::DecreaseFontSize,
    },
    Keybinding {
        chord: "ctrl+0",
        command: Command::ResetFontSize,
    },
    Keybinding {
        chord: "ctrl+alt+=",
        command: Command::IncreaseEditorFontSize,
    },
    Keybinding {
        chord: "ctrl+alt+-",
        command: Command::DecreaseEditorFontSize,
    },
    Keybinding {
        chord: "ctrl+alt+0",
        command: Command::ResetEditorFontSize,
    },
    Keybinding {
        chord: "ctrl+shift+=",
        command: Command::IncreaseTerminalFontSize,
    },
    Keybinding {
        chord: "ctrl+shift+-",
        command: Command::DecreaseTerminalFontSize,
    },
    Keybinding {
        chord: "ctrl+shift+0",
        command: Command::ResetTerminalFontSize,
    },
];

/// Resolve a chord such as `Cmd+Shift++` to its command
pub fn lookup(chord: &str) -> Option<Command> {
    let chord = normalize(chord)?;
    DEFAULT_KEYBINDINGS
        .iter()
        .find(|binding| binding.chord == chord)
        .map(|binding| binding.command)
}

/// Chords bound to `command`
pub fn chords_for(command: Command) -> impl Iterator<Item = &'static str> {
    DEFAULT_KEYBINDINGS
        .iter()
        .filter(move |binding| binding.command == command)
        .map(|binding| binding.chord)
}

/// Canonical spelling: lowercase, modifiers ordered ctrl, alt, shift, `+` folded into `=`
pub fn normalize(chord: &str) -> Option<String> {
    let chord = chord.trim().to_ascii_lowercase();

    // the `+` key collides with the separator
    let (modifiers, key) = if chord == "+" {
        ("", "+")
    } else if let Some(prefix) = chord.strip_suffix("++") {
        (prefix, "+")
    } else {
        match chord.rsplit_once('+') {
            Some((modifiers, key)) => (modifiers, key),
            None => ("", chord.as_str()),
        }
    };

    let key = match key.trim() {
        "" => return None,
        "+" | "plus" | "equal" => "=",
        "minus" => "-",
        other => other,
    };

    let (mut ctrl, mut alt, mut shift) = (false, false, false);
    for modifier in modifiers.split('+').map(str::trim).filter(|m| !m.is_empty()) {
        match modifier {
            "ctrl" | "control" | "cmd" | "command" | "super" | "meta" => ctrl = true,
            "alt" | "option" | "opt" => alt = true,
            "shift" => shift = true,
            _ => return None,
        }
    }

    let mut normalized = String::new();
    for (enabled, name) in [(ctrl, "ctrl+"), (alt, "alt+"), (shift, "shift+")] {
        if enabled {
            normalized.push_str(name);
        }
    }
    normalized.push_str(key);
    Some(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chords_are_normalized() {
        for binding in DEFAULT_KEYBINDINGS {
            assert_eq!(normalize(binding.chord).as_deref(), Some(binding.chord));
        }
    }

    #[test]
    fn test_every_command_has_a_chord() {
        for command in Command::ALL {
            assert_eq!(chords_for(command).count(), 1, "{}", command);
        }
    }

    #[test]
    fn test_lookup_aliases() {
        assert_eq!(lookup("Ctrl+="), Some(Command::IncreaseFontSize));
        assert_eq!(lookup("cmd++"), Some(Command::IncreaseFontSize));
        assert_eq!(lookup("ctrl+plus"), Some(Command::IncreaseFontSize));
        assert_eq!(lookup("ctrl+minus"), Some(Command::DecreaseFontSize));
        assert_eq!(lookup("Shift+Ctrl+0"), Some(Command::ResetTerminalFontSize));
        assert_eq!(lookup("option+cmd+-"), Some(Command::DecreaseEditorFontSize));
    }

    #[test]
    fn test_unbound_or_malformed_chords() {
        assert_eq!(lookup("="), None);
        assert_eq!(lookup("ctrl+9"), None);
        assert_eq!(lookup("hyper+="), None);
        assert_eq!(lookup("ctrl+"), None);
        assert_eq!(normalize(""), None);
    }
}
