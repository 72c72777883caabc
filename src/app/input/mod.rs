//! Input handling system
//!
//! Routes one input snapshot per tick to exactly one handler:
//! - Collects key events into per-tick snapshots
//! - Tracks the single active mode and broadcasts changes to handlers
//! - Dispatches each snapshot to the handler claiming the active mode
//! - Consumes the snapshot so it is never processed twice
//!
//! # Architecture
//!
//! ```text
//! Key events → InputCollector → InputSnapshot
//!                                    ↓
//!                              DispatchChain
//!                           (active mode filter)
//!                                    ↓
//!                     ModeHandler claiming the mode
//!                                    ↓
//!                               Reactions
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let mut chain = DispatchChain::standard();
//! chain.set_mode(Mode::Ui);
//!
//! let mut snapshot = collector.snapshot();
//! chain.dispatch(&mut snapshot);
//! for reaction in chain.take_reactions() {
//!     // apply to the presentation layer
//! }
//! ```

mod chain;
mod collector;
mod events;
mod handler;
mod handlers;
mod mode;
mod state;

// Re-export public API
pub use chain::{ChainError, DispatchChain, DispatchChainBuilder};
pub use collector::InputCollector;
pub use events::{KeyCode, ParseKeyError, Reaction};
pub use handler::ModeHandler;
pub use handlers::{CutsceneHandler, DialogHandler, GameplayHandler, UiHandler};
pub use mode::{Mode, ModeSet, ParseModeError};
pub use state::{ButtonState, InputSnapshot};
