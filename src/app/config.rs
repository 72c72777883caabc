//! Application configuration
//!
//! Supports multiple profiles (debug, release) with different settings.

use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::sim::{PhaseKind, TransitionDelays};

/// Delays between a satisfied gate and the next phase, in seconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorialConfig {
    pub movement_delay_secs: f64,
    pub combat_delay_secs: f64,
    pub inventory_delay_secs: f64,
}

/// Tick pacing for the headless runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Simulation ticks per second
    pub tick_rate_hz: f64,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when RUST_LOG is unset
    pub filter: String,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// The active profile (debug, release, etc.)
    pub profile: String,
    #[serde(default)]
    pub tutorial: TutorialConfig,
    #[serde(default)]
    pub runner: RunnerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for TutorialConfig {
    fn default() -> Self {
        Self {
            movement_delay_secs: 2.0,
            combat_delay_secs: 2.0,
            inventory_delay_secs: 3.0,
        }
    }
}

impl TutorialConfig {
    /// Converts the configured seconds into transition delays
    ///
    /// Values that are negative, NaN or too large fall back to the defaults.
    pub fn delays(&self) -> TransitionDelays {
        let defaults = TransitionDelays::default();
        let secs = |value: f64, fallback: Duration, field: &str| {
            Duration::try_from_secs_f64(value).unwrap_or_else(|e| {
                warn!(field, value, error = %e, "Invalid delay, using default");
                fallback
            })
        };

        TransitionDelays::new(
            secs(
                self.movement_delay_secs,
                defaults.after(PhaseKind::Movement),
                "movement_delay_secs",
            ),
            secs(
                self.combat_delay_secs,
                defaults.after(PhaseKind::Combat),
                "combat_delay_secs",
            ),
            secs(
                self.inventory_delay_secs,
                defaults.after(PhaseKind::Inventory),
                "inventory_delay_secs",
            ),
        )
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self { tick_rate_hz: 60.0 }
    }
}

impl RunnerConfig {
    /// Length of one tick
    ///
    /// Rates whose interval is not a positive, representable duration fall
    /// back to 60 Hz.
    pub fn tick_interval(&self) -> Duration {
        match Duration::try_from_secs_f64(1.0 / self.tick_rate_hz) {
            Ok(interval) if !interval.is_zero() => interval,
            _ => {
                warn!(rate = self.tick_rate_hz, "Invalid tick rate, using 60 Hz");
                Duration::from_secs_f64(1.0 / 60.0)
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "onboarding=info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration based on the specified profile
    ///
    /// Profiles are loaded from config files in the following order:
    /// 1. config/{profile}.toml (profile-specific configuration)
    /// 2. Environment variables with prefix APP_ (e.g., APP_RUNNER__TICK_RATE_HZ=30)
    ///
    /// Config files are searched for in:
    /// 1. Next to the executable (target/debug/config or target/release/config)
    /// 2. In the current directory (./config)
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        let config_dir = Self::find_config_dir();

        let mut builder = Config::builder();

        if let Some(ref dir) = config_dir {
            let profile_path = dir.join(profile);
            builder = builder.add_source(File::from(profile_path.as_path()).required(false));
        } else {
            builder =
                builder.add_source(File::with_name(&format!("config/{}", profile)).required(false));
        }

        // Use __ as separator for nested fields (e.g., APP_TUTORIAL__COMBAT_DELAY_SECS)
        builder = builder.add_source(
            Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.set_override("profile", profile)?.build()?;

        config.try_deserialize()
    }

    /// Finds the config directory by searching in multiple locations
    fn find_config_dir() -> Option<std::path::PathBuf> {
        if let Ok(exe_path) = std::env::current_exe()
            && let Some(exe_dir) = exe_path.parent()
        {
            let config_dir = exe_dir.join("config");
            if config_dir.exists() {
                return Some(config_dir);
            }
        }

        let cwd_config = std::path::PathBuf::from("config");
        if cwd_config.exists() {
            return Some(cwd_config);
        }

        None
    }

    /// Loads configuration using the APP_PROFILE environment variable,
    /// defaulting to "release"
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let profile = std::env::var("APP_PROFILE").unwrap_or_else(|_| "release".to_string());
        Self::load(&profile)
    }

    /// Built-in settings that never touch the filesystem or environment
    pub fn builtin(profile: &str) -> Self {
        Self {
            profile: profile.to_string(),
            tutorial: TutorialConfig::default(),
            runner: RunnerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::load("release").unwrap_or_else(|_| Self::builtin("release"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_delays_match_defaults() {
        let config = AppConfig::builtin("debug");
        assert_eq!(config.tutorial.delays(), TransitionDelays::default());
        assert_eq!(config.profile, "debug");
    }

    #[test]
    fn test_invalid_delay_falls_back() {
        let tutorial = TutorialConfig {
            movement_delay_secs: -1.0,
            combat_delay_secs: 0.5,
            inventory_delay_secs: f64::NAN,
        };
        let delays = tutorial.delays();
        let defaults = TransitionDelays::default();
        assert_eq!(
            delays,
            TransitionDelays::new(
                defaults.after(PhaseKind::Movement),
                Duration::from_millis(500),
                defaults.after(PhaseKind::Inventory),
            )
        );
    }

    #[test]
    fn test_tick_interval() {
        let runner = RunnerConfig { tick_rate_hz: 4.0 };
        assert_eq!(runner.tick_interval(), Duration::from_millis(250));

        let runner = RunnerConfig { tick_rate_hz: 0.0 };
        assert_eq!(runner.tick_interval(), Duration::from_secs_f64(1.0 / 60.0));
    }

    #[test]
    fn test_extreme_tick_rates_fall_back() {
        let fallback = Duration::from_secs_f64(1.0 / 60.0);
        for rate in [1e-20, 1e10, -30.0, f64::NAN, f64::INFINITY] {
            let runner = RunnerConfig { tick_rate_hz: rate };
            assert_eq!(runner.tick_interval(), fallback, "rate {rate}");
        }
    }
}
