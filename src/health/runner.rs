//! Runs health checks and tallies the results

use std::time::Instant;

use tracing::debug;

use super::check::{CheckResult, CheckStatus, SystemCheck};
use super::checks::{BuildInfoCheck, ConfigCheck, DispatchCheck, TutorialCheck};

/// Results from running a health check suite
#[derive(Debug, Default)]
pub struct HealthCheckReport {
    /// Individual check results with their system names
    pub results: Vec<(String, CheckResult)>,
    pub total: usize,
    pub passed: usize,
    pub warned: usize,
    pub failed: usize,
}

impl HealthCheckReport {
    fn record(&mut self, name: &str, result: CheckResult) {
        match result.status {
            CheckStatus::Pass => self.passed += 1,
            CheckStatus::Warn => self.warned += 1,
            CheckStatus::Fail => self.failed += 1,
        }
        self.total += 1;
        self.results.push((name.to_string(), result));
    }

    /// Returns true if no check failed
    pub fn is_healthy(&self) -> bool {
        self.failed == 0
    }

    pub fn has_warnings(&self) -> bool {
        self.warned > 0
    }

    /// Process exit code: 0 = all pass, 1 = any fail, 2 = warnings only
    pub fn exit_code(&self) -> i32 {
        match (self.failed, self.warned) {
            (0, 0) => 0,
            (0, _) => 2,
            _ => 1,
        }
    }
}

/// Collects checks and runs them in insertion order
#[derive(Default)]
pub struct HealthCheckRunner {
    checks: Vec<Box<dyn SystemCheck>>,
}

impl HealthCheckRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner preloaded with every built-in check
    pub fn with_defaults() -> Self {
        Self::new()
            .add_check(ConfigCheck::new())
            .add_check(BuildInfoCheck::new())
            .add_check(DispatchCheck::new())
            .add_check(TutorialCheck::new())
    }

    pub fn add_check<C: SystemCheck + 'static>(mut self, check: C) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    pub fn run(self) -> HealthCheckReport {
        let mut report = HealthCheckReport::default();

        for check in self.checks {
            let start = Instant::now();
            let result = check.check().with_duration(start.elapsed());
            debug!(check = check.name(), status = ?result.status, "Health check finished");
            report.record(check.name(), result);
        }

        report
    }
}
