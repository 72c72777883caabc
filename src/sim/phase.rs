//! Tutorial phase trait and the notifications phases emit

use std::fmt;

use enum_map::Enum;
use tracing::info;

use super::signal::TutorialInput;

/// The ordered steps of the onboarding sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Enum)]
pub enum PhaseKind {
    Movement,
    Combat,
    Inventory,
    Complete,
}

impl PhaseKind {
    /// Phases in the only order they are visited
    pub const ORDER: [PhaseKind; 4] = [
        PhaseKind::Movement,
        PhaseKind::Combat,
        PhaseKind::Inventory,
        PhaseKind::Complete,
    ];

    /// The phase that follows this one, `None` for Complete
    pub fn next(self) -> Option<PhaseKind> {
        match self {
            PhaseKind::Movement => Some(PhaseKind::Combat),
            PhaseKind::Combat => Some(PhaseKind::Inventory),
            PhaseKind::Inventory => Some(PhaseKind::Complete),
            PhaseKind::Complete => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    pub fn name(self) -> &'static str {
        match self {
            PhaseKind::Movement => "movement",
            PhaseKind::Combat => "combat",
            PhaseKind::Inventory => "inventory",
            PhaseKind::Complete => "complete",
        }
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// User-facing notifications from the tutorial
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TutorialEvent {
    Entered(PhaseKind),
    /// Prompt or feedback text for the player
    Prompt(PhaseKind, String),
    /// The phase's gate was satisfied and an advance was requested
    GateSatisfied(PhaseKind),
    Exited(PhaseKind),
    /// The sequence reached its terminal phase
    Completed,
}

impl fmt::Display for TutorialEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TutorialEvent::Entered(kind) => write!(f, "entered {kind}"),
            TutorialEvent::Prompt(_, message) => f.write_str(message),
            TutorialEvent::GateSatisfied(kind) => write!(f, "{kind} gate satisfied"),
            TutorialEvent::Exited(kind) => write!(f, "exited {kind}"),
            TutorialEvent::Completed => f.write_str("tutorial complete"),
        }
    }
}

/// What a phase may do while the sequencer runs it
pub struct PhaseContext<'a> {
    kind: PhaseKind,
    events: &'a mut Vec<TutorialEvent>,
    transition_pending: bool,
    advance_requested: bool,
}

impl<'a> PhaseContext<'a> {
    pub(crate) fn new(
        kind: PhaseKind,
        events: &'a mut Vec<TutorialEvent>,
        transition_pending: bool,
    ) -> Self {
        Self {
            kind,
            events,
            transition_pending,
            advance_requested: false,
        }
    }

    /// Emits a prompt for the player
    pub fn prompt(&mut self, message: impl Into<String>) {
        let message = message.into();
        info!(phase = %self.kind, "{message}");
        self.events.push(TutorialEvent::Prompt(self.kind, message));
    }

    /// Asks the sequencer to advance to the next phase after its delay
    ///
    /// Returns false, leaving the request unrecorded, when a transition is
    /// already pending or was already requested during this update.
    pub fn request_advance(&mut self) -> bool {
        if self.transition_pending || self.advance_requested {
            return false;
        }
        self.advance_requested = true;
        self.events.push(TutorialEvent::GateSatisfied(self.kind));
        true
    }

    /// Returns true if a deferred transition is already outstanding
    pub fn transition_pending(&self) -> bool {
        self.transition_pending
    }

    pub(crate) fn advance_requested(&self) -> bool {
        self.advance_requested
    }
}

/// One step of the onboarding sequence
///
/// The sequencer owns the current phase exclusively; a phase is created on
/// entry and dropped on exit.
pub trait TutorialPhase {
    fn kind(&self) -> PhaseKind;

    /// Called once when the phase becomes current
    fn enter(&mut self, ctx: &mut PhaseContext<'_>);

    /// Called every tick while the phase is current
    fn update(&mut self, input: &TutorialInput, ctx: &mut PhaseContext<'_>);

    /// Called once before the phase is replaced
    fn exit(&mut self, ctx: &mut PhaseContext<'_>);

    /// Returns true once the phase's gate is satisfied
    fn is_gate_satisfied(&self) -> bool;

    /// The pending transition this phase requested was cancelled
    ///
    /// Phases re-arm so a still-satisfied gate requests again on the next
    /// update.
    fn transition_cancelled(&mut self) {
        // Default: no-op
    }
}
