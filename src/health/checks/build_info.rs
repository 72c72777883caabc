//! Build information health check

use crate::build_info;
use crate::health::check::{CheckResult, SystemCheck};

/// Checks that build metadata was captured by the build script
pub struct BuildInfoCheck;

impl BuildInfoCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BuildInfoCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for BuildInfoCheck {
    fn name(&self) -> &'static str {
        "Build Info"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates build metadata (git, rustc, timestamps)")
    }

    fn check(&self) -> CheckResult {
        let notes = vec![
            format!("Version: {}", build_info::version_string()),
            format!(
                "Git: {}@{} (dirty: {})",
                build_info::GIT_BRANCH.unwrap_or("unknown"),
                build_info::git_sha_short(),
                build_info::is_git_dirty()
            ),
            format!("Build time: {}", build_info::BUILD_TIMESTAMP),
            format!(
                "Rustc: {} ({})",
                build_info::RUSTC_SEMVER,
                build_info::RUSTC_CHANNEL
            ),
            format!("Target: {}", build_info::CARGO_TARGET_TRIPLE),
            format!("Opt level: {}", build_info::CARGO_OPT_LEVEL),
        ];

        // Builds from a source tarball have no git metadata
        if build_info::GIT_SHA.is_none() {
            return CheckResult::warn("Build metadata accessible, git info missing")
                .with_notes(notes);
        }

        CheckResult::pass("Build metadata accessible").with_notes(notes)
    }
}
