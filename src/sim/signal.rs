//! Tutorial signals produced by the input layer each tick

use std::fmt;
use std::str::FromStr;

use enum_map::Enum;
use thiserror::Error;

/// Movement direction the player is asked to try
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a direction name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown direction '{0}' (expected up, down, left or right)")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}

/// A discrete tutorial-relevant action observed this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TutorialSignal {
    Move(Direction),
    Attack,
    Block,
    OpenInventory,
    SelectItem,
}

/// Tutorial signals for one tick, in arrival order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TutorialInput {
    signals: Vec<TutorialSignal>,
}

impl TutorialInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, signal: TutorialSignal) {
        self.signals.push(signal);
    }

    pub fn signals(&self) -> &[TutorialSignal] {
        &self.signals
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    pub fn contains(&self, signal: TutorialSignal) -> bool {
        self.signals.contains(&signal)
    }

    /// Directions signalled this tick, duplicates included
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.signals.iter().filter_map(|s| match s {
            TutorialSignal::Move(direction) => Some(*direction),
            _ => None,
        })
    }
}

impl FromIterator<TutorialSignal> for TutorialInput {
    fn from_iter<I: IntoIterator<Item = TutorialSignal>>(iter: I) -> Self {
        Self {
            signals: iter.into_iter().collect(),
        }
    }
}

impl From<TutorialSignal> for TutorialInput {
    fn from(signal: TutorialSignal) -> Self {
        Self {
            signals: vec![signal],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_direction() {
        assert_eq!("Left".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!(
            "north".parse::<Direction>(),
            Err(ParseDirectionError("north".to_string()))
        );
    }

    #[test]
    fn test_directions_keep_duplicates() {
        let input: TutorialInput = [
            TutorialSignal::Move(Direction::Up),
            TutorialSignal::Attack,
            TutorialSignal::Move(Direction::Up),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            input.directions().collect::<Vec<_>>(),
            vec![Direction::Up, Direction::Up]
        );
    }
}
