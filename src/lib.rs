//! Onboarding
//!
//! Mode-filtered input dispatch and a gated, timed tutorial sequence,
//! both driven one tick at a time.

/// Application layer - configuration, input dispatch, and the tick runner
pub mod app;

/// Build-time information (git SHA, branch, timestamp, etc.)
pub mod build_info;

/// Self-checks for configuration, dispatch, and the tutorial flow
pub mod health;

/// Tutorial simulation - phases, progress gates, and the sequencer
pub mod sim;
