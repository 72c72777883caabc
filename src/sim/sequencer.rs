//! Tutorial state machine with deferred, cancellable transitions

use std::time::Duration;

use enum_map::{EnumMap, enum_map};
use tracing::{debug, info};

use super::phase::{PhaseContext, PhaseKind, TutorialEvent, TutorialPhase};
use super::phases::create_phase;
use super::scheduler::{Scheduler, TimerToken};
use super::signal::TutorialInput;

/// Pause between a phase's gate being satisfied and the move to the next phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDelays {
    after: EnumMap<PhaseKind, Duration>,
}

impl TransitionDelays {
    pub fn new(movement: Duration, combat: Duration, inventory: Duration) -> Self {
        Self {
            after: enum_map! {
                PhaseKind::Movement => movement,
                PhaseKind::Combat => combat,
                PhaseKind::Inventory => inventory,
                PhaseKind::Complete => Duration::ZERO,
            },
        }
    }

    /// Delay applied when leaving `kind`
    pub fn after(&self, kind: PhaseKind) -> Duration {
        self.after[kind]
    }
}

impl Default for TransitionDelays {
    fn default() -> Self {
        Self::new(
            Duration::from_secs(2),
            Duration::from_secs(2),
            Duration::from_secs(3),
        )
    }
}

/// Drives the onboarding sequence Movement → Combat → Inventory → Complete
///
/// Holds exactly one current phase and at most one pending transition. A
/// request to advance while a transition is pending is rejected, not queued.
pub struct Sequencer {
    current: Box<dyn TutorialPhase>,
    scheduler: Scheduler<PhaseKind>,
    pending: Option<TimerToken>,
    delays: TransitionDelays,
    events: Vec<TutorialEvent>,
    history: Vec<PhaseKind>,
    paused: bool,
}

impl Sequencer {
    /// Creates a sequencer and enters the Movement phase
    pub fn new(delays: TransitionDelays) -> Self {
        let mut sequencer = Self {
            current: create_phase(PhaseKind::Movement),
            scheduler: Scheduler::new(),
            pending: None,
            delays,
            events: Vec::new(),
            history: Vec::new(),
            paused: false,
        };
        sequencer.enter_current();
        sequencer
    }

    /// Runs one tick
    ///
    /// A transition that came due is applied first, on the tick boundary,
    /// then the current phase's update runs. No-op once complete or while
    /// paused.
    pub fn update(&mut self, dt: Duration, input: &TutorialInput) {
        if self.paused || self.is_complete() {
            return;
        }

        for (token, to) in self.scheduler.advance(dt) {
            if self.pending == Some(token) {
                self.pending = None;
                self.transition_to(to);
            }
        }

        if self.is_complete() {
            return;
        }

        let kind = self.current.kind();
        let mut ctx = PhaseContext::new(kind, &mut self.events, self.pending.is_some());
        self.current.update(input, &mut ctx);
        if ctx.advance_requested() {
            self.schedule_advance();
        }
    }

    /// Schedules the move to the next phase after the current phase's delay
    ///
    /// Returns false if a transition is already pending or the sequence is
    /// complete.
    fn schedule_advance(&mut self) -> bool {
        let from = self.current.kind();
        if let Some(token) = self.pending {
            debug!(phase = %from, ?token, "Transition already pending, request rejected");
            return false;
        }
        let Some(to) = from.next() else {
            return false;
        };

        let delay = self.delays.after(from);
        let token = self.scheduler.schedule_after(delay, to);
        self.pending = Some(token);
        info!(%from, %to, delay = ?delay, "Transition scheduled");
        true
    }

    fn transition_to(&mut self, to: PhaseKind) {
        let from = self.current.kind();
        debug_assert_eq!(from.next(), Some(to), "transitions are strictly linear");

        let mut ctx = PhaseContext::new(from, &mut self.events, false);
        self.current.exit(&mut ctx);
        self.events.push(TutorialEvent::Exited(from));
        info!(phase = %from, "Exited phase");

        self.current = create_phase(to);
        self.enter_current();
    }

    fn enter_current(&mut self) {
        let kind = self.current.kind();
        self.history.push(kind);
        self.events.push(TutorialEvent::Entered(kind));
        info!(phase = %kind, "Entered phase");

        let mut ctx = PhaseContext::new(kind, &mut self.events, false);
        self.current.enter(&mut ctx);

        if kind.is_terminal() {
            self.events.push(TutorialEvent::Completed);
        }
    }

    /// Cancels the pending transition, if any
    ///
    /// The current phase stays active and re-requests on its next update if
    /// its gate is still satisfied. Returns false when nothing was pending.
    pub fn cancel_pending(&mut self) -> bool {
        let Some(token) = self.pending.take() else {
            return false;
        };
        let cancelled = self.scheduler.cancel(token);
        self.current.transition_cancelled();
        info!(phase = %self.current.kind(), cancelled, "Pending transition cancelled");
        cancelled
    }

    /// Abandons the current run and starts again from Movement
    pub fn restart(&mut self) {
        self.scheduler.clear();
        self.pending = None;

        let from = self.current.kind();
        let mut ctx = PhaseContext::new(from, &mut self.events, false);
        self.current.exit(&mut ctx);
        self.events.push(TutorialEvent::Exited(from));

        self.history.clear();
        self.current = create_phase(PhaseKind::Movement);
        self.enter_current();
        info!("Tutorial restarted");
    }

    /// Pauses the sequence; pending transitions do not advance while paused
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn current(&self) -> PhaseKind {
        self.current.kind()
    }

    /// Returns true if the current phase's gate is satisfied
    pub fn is_gate_satisfied(&self) -> bool {
        self.current.is_gate_satisfied()
    }

    pub fn is_complete(&self) -> bool {
        self.current.kind().is_terminal()
    }

    pub fn has_pending_transition(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left before the pending transition fires
    pub fn pending_remaining(&self) -> Option<Duration> {
        self.pending.and_then(|token| self.scheduler.remaining(token))
    }

    /// Phases entered since start or the last restart, in order
    pub fn history(&self) -> &[PhaseKind] {
        &self.history
    }

    pub fn delays(&self) -> &TransitionDelays {
        &self.delays
    }

    /// Drains notifications emitted since the last call
    pub fn drain_events(&mut self) -> Vec<TutorialEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new(TransitionDelays::default())
    }
}
