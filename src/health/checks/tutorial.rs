//! End-to-end tutorial health check

use crate::app::{App, AppConfig, Script};
use crate::health::check::{CheckResult, SystemCheck};
use crate::sim::PhaseKind;

/// Runs the demo script headlessly and expects the tutorial to complete
pub struct TutorialCheck {
    script: Script,
}

impl TutorialCheck {
    pub fn new() -> Self {
        Self {
            script: Script::demo(),
        }
    }

    pub fn with_script(script: Script) -> Self {
        Self { script }
    }
}

impl Default for TutorialCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for TutorialCheck {
    fn name(&self) -> &'static str {
        "Tutorial"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Plays a scripted session through every tutorial phase")
    }

    fn check(&self) -> CheckResult {
        // Built-in settings keep the result independent of local overrides
        let mut app = App::new(AppConfig::builtin("health"));
        let reports = app.run_script(&self.script);

        let history = app.sequencer().history().to_vec();
        let notes = vec![
            format!("Ticks: {} ({:.2?} simulated)", reports.len(), app.elapsed()),
            format!(
                "History: {}",
                history
                    .iter()
                    .map(|kind| kind.name())
                    .collect::<Vec<_>>()
                    .join(" → ")
            ),
            format!(
                "Reactions: {}",
                reports.iter().map(|r| r.reactions.len()).sum::<usize>()
            ),
        ];

        if !app.sequencer().is_complete() {
            return CheckResult::fail(format!(
                "Tutorial stalled in {}",
                app.sequencer().current()
            ))
            .with_notes(notes);
        }

        if history != PhaseKind::ORDER {
            return CheckResult::fail("Tutorial visited phases out of order").with_notes(notes);
        }

        CheckResult::pass("Tutorial completes in order").with_notes(notes)
    }
}
