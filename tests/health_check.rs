//! Integration tests for the health check system

use onboarding::app::Script;
use onboarding::health::{self, CheckStatus, HealthCheckRunner, SystemCheck, checks::*};

#[test]
fn test_all_health_checks() {
    let report = health::run_all_checks();

    // Print report for debugging if tests fail
    if !report.is_healthy() {
        eprintln!("\n{}", health::format_report(&report));
    }

    assert!(
        report.is_healthy(),
        "Health checks failed: {} failures, {} warnings",
        report.failed,
        report.warned
    );
    assert_eq!(report.total, 4);
}

#[test]
fn test_config_check() {
    let result = ConfigCheck::new().check();

    assert!(
        result.status.is_ok(),
        "Config check failed: {}",
        result.message
    );
}

#[test]
fn test_build_info_check() {
    let result = BuildInfoCheck::new().check();

    assert!(
        result.status.is_ok(),
        "Build info check failed: {}",
        result.message
    );
}

#[test]
fn test_dispatch_check() {
    let result = DispatchCheck::new().check();

    assert_eq!(result.status, CheckStatus::Pass, "{:?}", result.notes);
}

#[test]
fn test_tutorial_check() {
    let result = TutorialCheck::new().check();

    assert_eq!(result.status, CheckStatus::Pass, "{:?}", result.notes);
}

#[test]
fn test_stalled_tutorial_fails_report() {
    let script: Script = "tap w\ntap s\nwait 5".parse().unwrap();
    let report = HealthCheckRunner::new()
        .add_check(DispatchCheck::new())
        .add_check(TutorialCheck::with_script(script))
        .run();

    assert!(!report.is_healthy());
    assert_eq!(report.failed, 1);
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn test_custom_runner() {
    let report = HealthCheckRunner::new()
        .add_check(DispatchCheck::new())
        .add_check(BuildInfoCheck::new())
        .run();

    assert_eq!(report.total, 2);
    assert!(report.is_healthy());
}

#[test]
fn test_health_check_report_formatting() {
    let report = HealthCheckRunner::new()
        .add_check(DispatchCheck::new())
        .run();

    let formatted = health::format_report(&report);

    assert!(formatted.contains("Dispatch Chain"));
    assert!(formatted.contains("Summary"));
    assert!(formatted.contains("Total checks: 1"));
}
