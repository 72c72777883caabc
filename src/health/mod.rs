//! Health check system for validating configuration and core behaviour
//!
//! Used by the `health` CLI command and by integration tests to confirm
//! that configuration loads, the dispatch chain routes every mode, and the
//! tutorial runs start to finish.
//!
//! # Example
//!
//! ```no_run
//! use onboarding::health::{HealthCheckRunner, checks::*};
//!
//! let report = HealthCheckRunner::new()
//!     .add_check(DispatchCheck::new())
//!     .add_check(TutorialCheck::new())
//!     .run();
//!
//! if report.is_healthy() {
//!     println!("All systems operational!");
//! }
//! ```

pub mod check;
pub mod checks;
pub mod reporter;
pub mod runner;

pub use check::{CheckResult, CheckStatus, SystemCheck};
pub use reporter::{format_report, print_report};
pub use runner::{HealthCheckReport, HealthCheckRunner};

/// Runs all default health checks and returns a report
pub fn run_all_checks() -> HealthCheckReport {
    HealthCheckRunner::with_defaults().run()
}
