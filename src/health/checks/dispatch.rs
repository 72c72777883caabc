//! Dispatch chain health check

use glam::Vec2;

use crate::app::input::{DispatchChain, InputSnapshot, Mode};
use crate::health::check::{CheckResult, SystemCheck};

/// Checks that the stock chain routes every mode to exactly one handler
pub struct DispatchCheck;

impl DispatchCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DispatchCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for DispatchCheck {
    fn name(&self) -> &'static str {
        "Dispatch Chain"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates mode ownership and single-consumer dispatch")
    }

    fn check(&self) -> CheckResult {
        let mut chain = DispatchChain::standard();
        let mut notes = Vec::new();
        let mut failed = false;

        for mode in Mode::ALL {
            let owners: Vec<String> = chain
                .debug_handlers()
                .into_iter()
                .filter(|(_, claims)| claims.contains_mode(mode))
                .map(|(name, _)| name)
                .collect();

            if owners.len() != 1 {
                notes.push(format!("✗ {mode}: claimed by {owners:?}"));
                failed = true;
                continue;
            }

            chain.set_mode(mode);
            let mut snapshot = InputSnapshot::new(Vec2::Y, false, true);
            let handled = chain.dispatch(&mut snapshot);
            let reactions = chain.take_reactions();

            if !handled || !snapshot.is_consumed() {
                notes.push(format!("✗ {mode}: snapshot not consumed by '{}'", owners[0]));
                failed = true;
                continue;
            }

            let replayed = chain.dispatch(&mut snapshot);
            if !replayed || !chain.take_reactions().is_empty() {
                notes.push(format!("✗ {mode}: consumed snapshot produced reactions"));
                failed = true;
                continue;
            }

            let shown: Vec<String> = reactions.iter().map(ToString::to_string).collect();
            notes.push(format!("✓ {mode} → '{}': {}", owners[0], shown.join(", ")));
        }

        let result = if failed {
            CheckResult::fail("Dispatch chain misroutes input")
        } else {
            CheckResult::pass(format!(
                "{} handlers cover {} modes",
                chain.handler_count(),
                Mode::ALL.len()
            ))
        };
        result.with_notes(notes)
    }
}
