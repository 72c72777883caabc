//! Tutorial simulation module
//!
//! Holds the onboarding state machine, its progress gates, and the tick
//! driven scheduler that delays transitions between phases.

pub mod gate;
pub mod phase;
pub mod phases;
pub mod scheduler;
pub mod sequencer;
pub mod signal;
pub mod strategy;

pub use gate::{
    CombatAction, CombatGate, InventoryGate, InventoryStep, MovementGate, ProgressGate,
};
pub use phase::{PhaseContext, PhaseKind, TutorialEvent, TutorialPhase};
pub use phases::create_phase;
pub use scheduler::{Scheduler, TimerToken};
pub use sequencer::{Sequencer, TransitionDelays};
pub use signal::{Direction, ParseDirectionError, TutorialInput, TutorialSignal};
