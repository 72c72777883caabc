//! One-shot timers driven by simulation ticks
//!
//! Time only moves when [`Scheduler::advance`] is called, so timers fire on
//! tick boundaries and never in the middle of other per-tick work.

use std::time::Duration;

/// Handle to a scheduled timer, used to cancel it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

#[derive(Debug)]
struct Timer<T> {
    token: TimerToken,
    deadline: Duration,
    payload: T,
}

/// Single-threaded one-shot timer queue carrying a payload per timer
#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    timers: Vec<Timer<T>>,
}

impl<T> Scheduler<T> {
    /// Creates a scheduler at time zero
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            timers: Vec::new(),
        }
    }

    /// Schedules `payload` to fire once `delay` has elapsed
    pub fn schedule_after(&mut self, delay: Duration, payload: T) -> TimerToken {
        let token = TimerToken(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            token,
            deadline: self.now.saturating_add(delay),
            payload,
        });
        token
    }

    /// Cancels a pending timer
    ///
    /// Returns false if the timer already fired or was cancelled.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        match self.timers.iter().position(|t| t.token == token) {
            Some(index) => {
                self.timers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Moves time forward by `dt` and returns every timer now due
    ///
    /// Fired timers come back in deadline order, ties broken by scheduling
    /// order.
    pub fn advance(&mut self, dt: Duration) -> Vec<(TimerToken, T)> {
        self.now = self.now.saturating_add(dt);

        let now = self.now;
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.timers)
            .into_iter()
            .partition(|t| t.deadline <= now);
        self.timers = pending;

        due.sort_by_key(|t| (t.deadline, t.token));
        due.into_iter().map(|t| (t.token, t.payload)).collect()
    }

    /// Returns true if the timer is still waiting to fire
    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.timers.iter().any(|t| t.token == token)
    }

    /// Time left before a pending timer fires
    pub fn remaining(&self, token: TimerToken) -> Option<Duration> {
        self.timers
            .iter()
            .find(|t| t.token == token)
            .map(|t| t.deadline.saturating_sub(self.now))
    }

    pub fn pending_count(&self) -> usize {
        self.timers.len()
    }

    /// Total time advanced so far
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Drops every pending timer
    pub fn clear(&mut self) {
        self.timers.clear();
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
