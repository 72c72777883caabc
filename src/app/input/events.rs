//! Key codes and handler reactions

use std::fmt;
use std::str::FromStr;

use enum_map::Enum;
use glam::Vec2;
use thiserror::Error;

/// Keys and buttons the collector tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum KeyCode {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    Space,
    E,
    I,
    MouseLeft,
    MouseRight,
}

/// Error returned when a key name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown key '{0}'")]
pub struct ParseKeyError(pub String);

impl FromStr for KeyCode {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.to_ascii_lowercase().as_str() {
            "w" => Self::W,
            "a" => Self::A,
            "s" => Self::S,
            "d" => Self::D,
            "up" => Self::Up,
            "down" => Self::Down,
            "left" => Self::Left,
            "right" => Self::Right,
            "space" => Self::Space,
            "e" => Self::E,
            "i" => Self::I,
            "lmb" | "mouse_left" => Self::MouseLeft,
            "rmb" | "mouse_right" => Self::MouseRight,
            _ => return Err(ParseKeyError(s.to_string())),
        };
        Ok(key)
    }
}

/// Side effect a handler emits when it reacts to a snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reaction {
    /// Apply movement to the player
    Move(Vec2),
    Jump,
    Interact,
    /// Move the interface focus
    UiNavigate(Vec2),
    UiSelect,
    SkipCutscene,
    /// Move the highlighted dialog choice
    DialogChoice(Vec2),
    AdvanceDialog,
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reaction::Move(v) => write!(f, "Movement: {v}"),
            Reaction::Jump => f.write_str("Jump"),
            Reaction::Interact => f.write_str("Interact"),
            Reaction::UiNavigate(v) => write!(f, "UI Navigation: {v}"),
            Reaction::UiSelect => f.write_str("UI Selection"),
            Reaction::SkipCutscene => f.write_str("Skip Cutscene"),
            Reaction::DialogChoice(v) => write!(f, "Dialog Choice: {v}"),
            Reaction::AdvanceDialog => f.write_str("Advance Dialog"),
        }
    }
}
