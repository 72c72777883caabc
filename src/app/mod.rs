//! Application module
//!
//! Configuration, input dispatch, scripted sessions, and the tick runner.

pub mod config;
pub mod input;
mod runner;
pub mod script;

pub use config::{AppConfig, LoggingConfig, RunnerConfig, TutorialConfig};
pub use runner::{App, TickReport};
pub use script::{Command, DEMO_SCRIPT, MAX_WAIT, Script, ScriptError};
