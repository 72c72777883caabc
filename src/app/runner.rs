//! Headless application driver: one dispatch and one tutorial update per tick

use std::time::Duration;

use tracing::{debug, info, warn};

use super::config::AppConfig;
use super::input::{DispatchChain, InputCollector, KeyCode, Mode, Reaction};
use super::script::{Command, Script};
use crate::sim::{PhaseKind, Sequencer, TutorialEvent};

/// Everything observable that happened during one tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    /// 1-based tick number
    pub tick: u64,
    /// Mode the snapshot was dispatched in
    pub mode: Mode,
    /// Whether a handler claimed the snapshot
    pub handled: bool,
    pub reactions: Vec<Reaction>,
    pub events: Vec<TutorialEvent>,
    /// Tutorial phase after the tick
    pub phase: PhaseKind,
}

impl TickReport {
    /// Returns true if the tick produced any reaction or tutorial event
    pub fn is_eventful(&self) -> bool {
        !self.reactions.is_empty() || !self.events.is_empty()
    }
}

/// Main application
pub struct App {
    config: AppConfig,
    chain: DispatchChain,
    sequencer: Sequencer,
    collector: InputCollector,
    tick_interval: Duration,
    tick_count: u64,
    elapsed: Duration,
    /// Startup notifications not yet attached to a tick
    startup_events: Vec<TutorialEvent>,
}

impl App {
    /// Creates a new application with the stock dispatch chain
    pub fn new(config: AppConfig) -> Self {
        Self::with_chain(config, DispatchChain::standard())
    }

    /// Creates a new application with a custom dispatch chain
    pub fn with_chain(config: AppConfig, chain: DispatchChain) -> Self {
        info!(profile = %config.profile, "Starting onboarding");
        info!(?config.tutorial, ?config.runner, "Configuration");

        let mut sequencer = Sequencer::new(config.tutorial.delays());
        let startup_events = sequencer.drain_events();
        let tick_interval = config.runner.tick_interval();

        Self {
            config,
            chain,
            sequencer,
            collector: InputCollector::new(),
            tick_interval,
            tick_count: 0,
            elapsed: Duration::ZERO,
            startup_events,
        }
    }

    /// Creates a new application with configuration loaded from environment
    pub fn from_env() -> Self {
        let config = AppConfig::load_from_env().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load config, using default configuration");
            AppConfig::builtin("release")
        });
        Self::new(config)
    }

    /// Runs one tick of the configured length
    pub fn tick(&mut self) -> TickReport {
        self.tick_with(self.tick_interval)
    }

    /// Runs one tick of length `dt`
    ///
    /// Dispatch completes before the tutorial update runs, and key edges
    /// are advanced only after both have seen this tick's input.
    pub fn tick_with(&mut self, dt: Duration) -> TickReport {
        self.tick_count += 1;
        self.elapsed += dt;

        let mode = self.chain.active_mode();
        let mut snapshot = self.collector.snapshot();
        let handled = self.chain.dispatch(&mut snapshot);
        let reactions = self.chain.take_reactions();

        let input = self.collector.tutorial_input();
        self.sequencer.update(dt, &input);

        let mut events = std::mem::take(&mut self.startup_events);
        events.extend(self.sequencer.drain_events());

        self.collector.advance_frame();

        TickReport {
            tick: self.tick_count,
            mode,
            handled,
            reactions,
            events,
            phase: self.sequencer.current(),
        }
    }

    /// Executes every command in a script and returns the tick reports
    pub fn run_script(&mut self, script: &Script) -> Vec<TickReport> {
        let mut reports = Vec::new();

        for command in script.commands() {
            match command {
                Command::Press(keys) => keys.iter().for_each(|k| self.collector.press(*k)),
                Command::Release(keys) => keys.iter().for_each(|k| self.collector.release(*k)),
                Command::Tap(keys) => {
                    keys.iter().for_each(|k| self.collector.press(*k));
                    reports.push(self.tick());
                    keys.iter().for_each(|k| self.collector.release(*k));
                }
                Command::Mode(mode) => self.set_mode(*mode),
                Command::Tick(count) => {
                    for _ in 0..*count {
                        reports.push(self.tick());
                    }
                }
                Command::Wait(duration) => {
                    let ticks = self.ticks_for(*duration);
                    debug!(?duration, ticks, "Waiting");
                    for _ in 0..ticks {
                        reports.push(self.tick());
                    }
                }
            }
        }

        reports
    }

    /// Number of ticks needed to cover `duration`
    fn ticks_for(&self, duration: Duration) -> u64 {
        let interval = self.tick_interval.as_nanos().max(1);
        u64::try_from(duration.as_nanos().div_ceil(interval)).unwrap_or(u64::MAX)
    }

    /// Switches the active input mode
    pub fn set_mode(&mut self, mode: Mode) {
        self.chain.set_mode(mode);
    }

    pub fn press(&mut self, key: KeyCode) {
        self.collector.press(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.collector.release(key);
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn chain(&self) -> &DispatchChain {
        &self.chain
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    pub fn sequencer_mut(&mut self) -> &mut Sequencer {
        &mut self.sequencer
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Total simulated time
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }
}

impl Default for App {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(AppConfig::builtin("test"))
    }

    #[test]
    fn test_startup_events_attach_to_first_tick() {
        let mut app = app();
        let report = app.tick();
        assert_eq!(report.tick, 1);
        assert_eq!(report.events[0], TutorialEvent::Entered(PhaseKind::Movement));
        assert!(app.tick().events.is_empty());
    }

    #[test]
    fn test_idle_tick_is_claimed_but_quiet() {
        let mut app = app();
        app.tick();
        let report = app.tick();
        assert!(report.handled);
        assert!(report.reactions.is_empty());
        assert!(!report.is_eventful());
    }

    #[test]
    fn test_wait_rounds_up_to_whole_ticks() {
        let mut config = AppConfig::builtin("test");
        config.runner.tick_rate_hz = 4.0;
        let app = App::new(config);
        assert_eq!(app.ticks_for(Duration::from_millis(500)), 2);
        assert_eq!(app.ticks_for(Duration::from_millis(600)), 3);
        assert_eq!(app.ticks_for(Duration::ZERO), 0);
    }

    #[test]
    fn test_extreme_tick_rate_still_advances_time() {
        let mut config = AppConfig::builtin("test");
        config.runner.tick_rate_hz = 1e10;
        let mut app = App::new(config);
        assert_eq!(app.tick_interval(), Duration::from_secs_f64(1.0 / 60.0));

        app.run_script(&"wait 0.5".parse().unwrap());
        assert!((30..=31).contains(&app.tick_count()));
        assert!(app.elapsed() >= Duration::from_millis(500));
    }

    #[test]
    fn test_tap_produces_one_press_edge() {
        let mut app = app();
        let script = Script::new(vec![Command::Tap(vec![KeyCode::Space]), Command::Tick(1)]);
        let reports = app.run_script(&script);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].reactions, vec![Reaction::Jump]);
        assert!(reports[1].reactions.is_empty());
    }
}
