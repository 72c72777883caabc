//! Operating modes and mode sets

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use enum_map::Enum;
use thiserror::Error;

/// Exclusive operating context deciding which handler may react to input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Enum)]
pub enum Mode {
    /// Regular play; the startup mode
    #[default]
    Gameplay,
    /// Menus and other interface panels
    Ui,
    /// Non-interactive scripted sequences
    Cutscene,
    /// Conversation with choices
    Dialog,
}

bitflags! {
    /// Set of modes a handler claims
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ModeSet: u8 {
        const GAMEPLAY = 1 << 0;
        const UI = 1 << 1;
        const CUTSCENE = 1 << 2;
        const DIALOG = 1 << 3;
    }
}

impl Mode {
    /// Every mode, in registry order
    pub const ALL: [Mode; 4] = [Mode::Gameplay, Mode::Ui, Mode::Cutscene, Mode::Dialog];

    /// Single-member set for this mode
    pub const fn as_set(self) -> ModeSet {
        match self {
            Mode::Gameplay => ModeSet::GAMEPLAY,
            Mode::Ui => ModeSet::UI,
            Mode::Cutscene => ModeSet::CUTSCENE,
            Mode::Dialog => ModeSet::DIALOG,
        }
    }

    /// Lowercase name used in scripts and logs
    pub fn name(self) -> &'static str {
        match self {
            Mode::Gameplay => "gameplay",
            Mode::Ui => "ui",
            Mode::Cutscene => "cutscene",
            Mode::Dialog => "dialog",
        }
    }
}

impl ModeSet {
    /// Returns true if the set claims `mode`
    pub fn contains_mode(self, mode: Mode) -> bool {
        self.contains(mode.as_set())
    }

    /// Iterates the modes in this set, in registry order
    pub fn modes(self) -> impl Iterator<Item = Mode> {
        Mode::ALL
            .into_iter()
            .filter(move |mode| self.contains_mode(*mode))
    }
}

impl From<Mode> for ModeSet {
    fn from(mode: Mode) -> Self {
        mode.as_set()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a mode name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode '{0}' (expected gameplay, ui, cutscene or dialog)")]
pub struct ParseModeError(pub String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gameplay" => Ok(Mode::Gameplay),
            "ui" => Ok(Mode::Ui),
            "cutscene" => Ok(Mode::Cutscene),
            "dialog" => Ok(Mode::Dialog),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_gameplay() {
        assert_eq!(Mode::default(), Mode::Gameplay);
    }

    #[test]
    fn test_mode_sets_are_disjoint_singletons() {
        for a in Mode::ALL {
            for b in Mode::ALL {
                assert_eq!(a.as_set().contains_mode(b), a == b);
            }
        }
    }

    #[test]
    fn test_mode_set_iteration() {
        let set = ModeSet::UI | ModeSet::DIALOG;
        assert_eq!(set.modes().collect::<Vec<_>>(), vec![Mode::Ui, Mode::Dialog]);
        assert_eq!(ModeSet::empty().modes().count(), 0);
        assert_eq!(ModeSet::all().modes().count(), 4);
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("UI".parse::<Mode>(), Ok(Mode::Ui));
        assert_eq!(" cutscene ".parse::<Mode>(), Ok(Mode::Cutscene));
        assert!("menu".parse::<Mode>().is_err());
    }
}
