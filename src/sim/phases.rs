//! The four tutorial phases

use tracing::trace;

use super::gate::{
    CombatAction, CombatGate, InventoryGate, InventoryStep, MovementGate, ProgressGate,
};
use super::phase::{PhaseContext, PhaseKind, TutorialPhase};
use super::signal::{TutorialInput, TutorialSignal};

/// Creates a fresh phase of the given kind
pub fn create_phase(kind: PhaseKind) -> Box<dyn TutorialPhase> {
    match kind {
        PhaseKind::Movement => Box::new(MovementPhase::new()),
        PhaseKind::Combat => Box::new(CombatPhase::new()),
        PhaseKind::Inventory => Box::new(InventoryPhase::new()),
        PhaseKind::Complete => Box::new(CompletePhase),
    }
}

/// Asks the player to try every direction
#[derive(Debug, Default)]
pub struct MovementPhase {
    gate: MovementGate,
    advance_requested: bool,
}

impl MovementPhase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gate(&self) -> &MovementGate {
        &self.gate
    }
}

impl TutorialPhase for MovementPhase {
    fn kind(&self) -> PhaseKind {
        PhaseKind::Movement
    }

    fn enter(&mut self, ctx: &mut PhaseContext<'_>) {
        ctx.prompt("Welcome to the movement tutorial! Use WASD or arrow keys to move.");
    }

    fn update(&mut self, input: &TutorialInput, ctx: &mut PhaseContext<'_>) {
        for direction in input.directions() {
            self.gate.record(direction);
            ctx.prompt(format!("Moved {direction}!"));
        }

        if self.gate.is_satisfied() && !self.advance_requested {
            self.advance_requested = true;
            ctx.prompt("Great job! You've mastered movement.");
            ctx.request_advance();
        }
    }

    fn exit(&mut self, ctx: &mut PhaseContext<'_>) {
        ctx.prompt("Movement tutorial completed!");
    }

    fn is_gate_satisfied(&self) -> bool {
        self.gate.is_satisfied()
    }

    fn transition_cancelled(&mut self) {
        self.advance_requested = false;
    }
}

/// Asks the player to attack and block once each
#[derive(Debug, Default)]
pub struct CombatPhase {
    gate: CombatGate,
    advance_requested: bool,
}

impl CombatPhase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gate(&self) -> &CombatGate {
        &self.gate
    }
}

impl TutorialPhase for CombatPhase {
    fn kind(&self) -> PhaseKind {
        PhaseKind::Combat
    }

    fn enter(&mut self, ctx: &mut PhaseContext<'_>) {
        ctx.prompt(
            "Welcome to combat training! Press Left Mouse Button to attack, \
             Right Mouse Button to block.",
        );
    }

    fn update(&mut self, input: &TutorialInput, ctx: &mut PhaseContext<'_>) {
        for signal in input.signals() {
            match signal {
                TutorialSignal::Attack => {
                    if self.gate.record(CombatAction::Attack) {
                        ctx.prompt("Excellent attack!");
                    }
                }
                TutorialSignal::Block => {
                    if self.gate.record(CombatAction::Block) {
                        ctx.prompt("Perfect block!");
                    }
                }
                _ => {}
            }
        }

        if self.gate.is_satisfied() && !self.advance_requested {
            self.advance_requested = true;
            ctx.request_advance();
        }
    }

    fn exit(&mut self, ctx: &mut PhaseContext<'_>) {
        ctx.prompt("Combat tutorial completed!");
    }

    fn is_gate_satisfied(&self) -> bool {
        self.gate.is_satisfied()
    }

    fn transition_cancelled(&mut self) {
        self.advance_requested = false;
    }
}

/// Asks the player to open the inventory, then select an item
#[derive(Debug, Default)]
pub struct InventoryPhase {
    gate: InventoryGate,
    advance_requested: bool,
}

impl InventoryPhase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gate(&self) -> &InventoryGate {
        &self.gate
    }
}

impl TutorialPhase for InventoryPhase {
    fn kind(&self) -> PhaseKind {
        PhaseKind::Inventory
    }

    fn enter(&mut self, ctx: &mut PhaseContext<'_>) {
        ctx.prompt("Let's learn about inventory management! Press 'I' to open inventory.");
    }

    fn update(&mut self, input: &TutorialInput, ctx: &mut PhaseContext<'_>) {
        for signal in input.signals() {
            match signal {
                TutorialSignal::OpenInventory => {
                    self.gate.record(InventoryStep::Opened);
                    ctx.prompt("Inventory opened! Try selecting the Health Potion.");
                }
                TutorialSignal::SelectItem if self.gate.is_opened() => {
                    if self.gate.record(InventoryStep::ItemSelected) {
                        ctx.prompt("Perfect! You've completed the basic tutorials!");
                    }
                }
                TutorialSignal::SelectItem => trace!("item selected before inventory opened"),
                _ => {}
            }
        }

        if self.gate.is_satisfied() && !self.advance_requested {
            self.advance_requested = true;
            ctx.request_advance();
        }
    }

    fn exit(&mut self, ctx: &mut PhaseContext<'_>) {
        ctx.prompt("Inventory tutorial completed!");
    }

    fn is_gate_satisfied(&self) -> bool {
        self.gate.is_satisfied()
    }

    fn transition_cancelled(&mut self) {
        self.advance_requested = false;
    }
}

/// Terminal phase; entering it ends the sequence
#[derive(Debug, Default)]
pub struct CompletePhase;

impl TutorialPhase for CompletePhase {
    fn kind(&self) -> PhaseKind {
        PhaseKind::Complete
    }

    fn enter(&mut self, ctx: &mut PhaseContext<'_>) {
        ctx.prompt("Onboarding completed! The player is ready to start the game.");
    }

    fn update(&mut self, _input: &TutorialInput, _ctx: &mut PhaseContext<'_>) {}

    fn exit(&mut self, _ctx: &mut PhaseContext<'_>) {}

    fn is_gate_satisfied(&self) -> bool {
        true
    }
}
