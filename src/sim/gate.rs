//! Progress gates: per-phase completion predicates
//!
//! Gates only ever move towards satisfaction. Once `is_satisfied` returns
//! true no further `record` call can make it false.

use enum_map::EnumMap;

use super::signal::{Direction, ParseDirectionError};

/// Completion state for one tutorial phase
pub trait ProgressGate {
    /// The signal this gate understands
    type Signal;

    /// Records a signal. Returns true if the gate's state changed.
    fn record(&mut self, signal: Self::Signal) -> bool;

    /// Returns true once every requirement has been met
    fn is_satisfied(&self) -> bool;
}

/// Satisfied once all four directions have been tried, in any order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovementGate {
    tried: EnumMap<Direction, bool>,
}

impl MovementGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a direction by name ("up", "down", "left", "right")
    pub fn record_named(&mut self, name: &str) -> Result<bool, ParseDirectionError> {
        Ok(self.record(name.parse()?))
    }

    pub fn has_tried(&self, direction: Direction) -> bool {
        self.tried[direction]
    }

    /// Directions not yet tried
    pub fn remaining(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|d| !self.tried[*d])
    }
}

impl ProgressGate for MovementGate {
    type Signal = Direction;

    fn record(&mut self, direction: Direction) -> bool {
        !std::mem::replace(&mut self.tried[direction], true)
    }

    fn is_satisfied(&self) -> bool {
        self.tried.values().all(|tried| *tried)
    }
}

/// Combat actions the player must perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatAction {
    Attack,
    Block,
}

/// Two independent flags; order of arrival is irrelevant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombatGate {
    attack_performed: bool,
    block_performed: bool,
}

impl CombatGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attack_performed(&self) -> bool {
        self.attack_performed
    }

    pub fn block_performed(&self) -> bool {
        self.block_performed
    }
}

impl ProgressGate for CombatGate {
    type Signal = CombatAction;

    fn record(&mut self, action: CombatAction) -> bool {
        let flag = match action {
            CombatAction::Attack => &mut self.attack_performed,
            CombatAction::Block => &mut self.block_performed,
        };
        !std::mem::replace(flag, true)
    }

    fn is_satisfied(&self) -> bool {
        self.attack_performed && self.block_performed
    }
}

/// Inventory steps, in the order they must happen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryStep {
    Opened,
    ItemSelected,
}

/// Sequential flags: an item can only be selected once the inventory is open
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryGate {
    opened: bool,
    item_selected: bool,
}

impl InventoryGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_opened(&self) -> bool {
        self.opened
    }

    pub fn is_item_selected(&self) -> bool {
        self.item_selected
    }
}

impl ProgressGate for InventoryGate {
    type Signal = InventoryStep;

    fn record(&mut self, step: InventoryStep) -> bool {
        match step {
            InventoryStep::Opened => !std::mem::replace(&mut self.opened, true),
            // Selecting before opening is ignored
            InventoryStep::ItemSelected if self.opened => {
                !std::mem::replace(&mut self.item_selected, true)
            }
            InventoryStep::ItemSelected => false,
        }
    }

    fn is_satisfied(&self) -> bool {
        self.opened && self.item_selected
    }
}
