use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::step::Direction;
use crate::surface::Surface;

/// Commands the host can trigger. Each takes no arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    IncreaseEditorFontSize,
    DecreaseEditorFontSize,
    IncreaseTerminalFontSize,
    DecreaseTerminalFontSize,
    IncreaseFontSize,
    DecreaseFontSize,
    ResetEditorFontSize,
    ResetTerminalFontSize,
    ResetFontSize,
}

/// What a command does to each of its surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Step(Direction),
    Reset,
}

/// Identifier, action and target surfaces for one command
#[derive(Debug, Clone, Copy)]
pub struct CommandPlan {
    pub command: Command,
    pub id: &'static str,
    pub action: Action,
    pub surfaces: &'static [Surface],
}

const EDITOR: &[Surface] = &[Surface::Editor];
const TERMINAL: &[Surface] = &[Surface::Terminal];
const BOTH: &[Surface] = &Surface::ALL;

static PLANS: [CommandPlan; 9] = [
    CommandPlan {
        command: Command::IncreaseEditorFontSize,
        id: "fontshortcuts.increaseEditorFontSize",
        action: Action::Step(Direction::Increase),
        surfaces: EDITOR,
    },
    CommandPlan {
        command: Command::DecreaseEditorFontSize,
        id: "fontshortcuts.decreaseEditorFontSize",
        action: Action::Step(Direction::Decrease),
        surfaces: EDITOR,
    },
    CommandPlan {
        command: Command::IncreaseTerminalFontSize,
        id: "fontshortcuts.increaseTerminalFontSize",
        action: Action::Step(Direction::Increase),
        surfaces: TERMINAL,
    },
    CommandPlan {
        command: Command::DecreaseTerminalFontSize,
        id: "fontshortcuts.decreaseTerminalFontSize",
        action: Action::Step(Direction::Decrease),
        surfaces: TERMINAL,
    },
    CommandPlan {
        command: Command::IncreaseFontSize,
        id: "fontshortcuts.increaseFontSize",
        action: Action::Step(Direction::Increase),
        surfaces: BOTH,
    },
    CommandPlan {
        command: Command::DecreaseFontSize,
        id: "fontshortcuts.decreaseFontSize",
        action: Action::Step(Direction::Decrease),
        surfaces: BOTH,
    },
    CommandPlan {
        command: Command::ResetEditorFontSize,
        id: "fontshortcuts.resetEditorFontSize",
        action: Action::Reset,
        surfaces: EDITOR,
    },
    CommandPlan {
        command: Command::ResetTerminalFontSize,
        id: "fontshortcuts.resetTerminalFontSize",
        action: Action::Reset,
        surfaces: TERMINAL,
    },
    CommandPlan {
        command: Command::ResetFontSize,
        id: "fontshortcuts.resetFontSize",
        action: Action::Reset,
        surfaces: BOTH,
    },
];

impl Command {
    pub const ALL: [Command; 9] = [
        Command::IncreaseEditorFontSize,
        Command::DecreaseEditorFontSize,
        Command::IncreaseTerminalFontSize,
        Command::DecreaseTerminalFontSize,
        Command::IncreaseFontSize,
        Command::DecreaseFontSize,
        Command::ResetEditorFontSize,
        Command::ResetTerminalFontSize,
        Command::ResetFontSize,
    ];

    /// `PLANS` is ordered like the enum, so the discriminant indexes it
    pub fn plan(self) -> &'static CommandPlan {
        &PLANS[self as usize]
    }

    pub fn id(self) -> &'static str {
        self.plan().id
    }

    pub fn action(self) -> Action {
        self.plan().action
    }

    pub fn surfaces(self) -> &'static [Surface] {
        self.plan().surfaces
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        PLANS
            .iter()
            .find(|plan| plan.id == s)
            .map(|plan| plan.command)
            .ok_or_else(|| Error::UnknownCommand(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_table_matches_enum_order() {
        for command in Command::ALL {
            assert_eq!(command.plan().command, command);
        }
    }

    #[test]
    fn test_ids_round_trip() {
        for command in Command::ALL {
            assert_eq!(command.id().parse::<Command>().unwrap(), command);
        }
        assert!("fontshortcuts.zoom".parse::<Command>().is_err());
    }

    #[test]
    fn test_single_surface_commands_target_their_surface() {
        use Action::*;
        use Direction::*;

        let expected = [
            (Command::IncreaseEditorFontSize, Step(Increase), Surface::Editor),
            (Command::DecreaseEditorFontSize, Step(Decrease), Surface::Editor),
            (Command::IncreaseTerminalFontSize, Step(Increase), Surface::Terminal),
            (Command::DecreaseTerminalFontSize, Step(Decrease), Surface::Terminal),
            (Command::ResetEditorFontSize, Reset, Surface::Editor),
            (Command::ResetTerminalFontSize, Reset, Surface::Terminal),
        ];
        for (command, action, surface) in expected {
            assert_eq!(command.action(), action, "{}", command);
            assert_eq!(command.surfaces(), &[surface], "{}", command);
        }
    }

    #[test]
    fn test_combined_commands_target_both_surfaces() {
        assert_eq!(
            Command::IncreaseFontSize.action(),
            Action::Step(Direction::Increase)
        );
        assert_eq!(
            Command::DecreaseFontSize.action(),
            Action::Step(Direction::Decrease)
        );
        assert_eq!(Command::ResetFontSize.action(), Action::Reset);
        for command in [
            Command::IncreaseFontSize,
            Command::DecreaseFontSize,
            Command::ResetFontSize,
        ] {
            assert_eq!(command.surfaces(), &[Surface::Editor, Surface::Terminal]);
        }
    }
}
