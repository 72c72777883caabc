//! Configuration system health check

use crate::app::AppConfig;
use crate::health::check::{CheckResult, SystemCheck};
use crate::sim::PhaseKind;

/// Checks that configuration can be loaded for all profiles
pub struct ConfigCheck {
    profiles: Vec<&'static str>,
}

impl ConfigCheck {
    /// Creates a new config check with default profiles
    pub fn new() -> Self {
        Self {
            profiles: vec!["debug", "release"],
        }
    }

    pub fn with_profiles(profiles: Vec<&'static str>) -> Self {
        Self { profiles }
    }
}

impl Default for ConfigCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for ConfigCheck {
    fn name(&self) -> &'static str {
        "Configuration"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates configuration loading from files and environment")
    }

    fn check(&self) -> CheckResult {
        let mut notes = Vec::new();
        let mut failed = false;
        let mut warned = false;

        for profile in &self.profiles {
            match AppConfig::load(profile) {
                Ok(config) => {
                    let delays = config.tutorial.delays();
                    notes.push(format!(
                        "✓ Profile '{}': {} Hz, delays {:?}/{:?}/{:?}",
                        profile,
                        config.runner.tick_rate_hz,
                        delays.after(PhaseKind::Movement),
                        delays.after(PhaseKind::Combat),
                        delays.after(PhaseKind::Inventory),
                    ));
                    if config.runner.tick_rate_hz <= 0.0 {
                        notes.push(format!("⚠ Profile '{profile}': non-positive tick rate, using default"));
                        warned = true;
                    }
                }
                Err(e) => {
                    notes.push(format!("✗ Profile '{profile}': failed to load - {e}"));
                    failed = true;
                }
            }
        }

        match AppConfig::load_from_env() {
            Ok(config) => notes.push(format!(
                "✓ Environment config: profile '{}' loaded",
                config.profile
            )),
            Err(e) => {
                notes.push(format!("⚠ Environment config: {e}"));
                warned = true;
            }
        }

        let result = if failed {
            CheckResult::fail("Failed to load one or more config profiles")
        } else if warned {
            CheckResult::warn("Profiles loaded with warnings")
        } else {
            CheckResult::pass(format!("{} profiles loaded", self.profiles.len()))
        };
        result.with_notes(notes)
    }
}
