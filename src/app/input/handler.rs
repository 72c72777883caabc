//! Mode handler trait

use std::any::Any;

use super::events::Reaction;
use super::mode::{Mode, ModeSet};
use super::state::InputSnapshot;

/// A unit that reacts to input while the system is in one of its claimed modes
///
/// Handlers live in a [`DispatchChain`](super::DispatchChain), which picks the
/// single handler claiming the active mode. Claimed sets must be non-empty and
/// disjoint from every other handler in the chain.
pub trait ModeHandler {
    /// Name of this handler for debugging
    fn name(&self) -> &str;

    /// Modes this handler is responsible for
    fn claimed_modes(&self) -> ModeSet;

    /// Returns true if this handler reacts to input in `mode`
    fn claims(&self, mode: Mode) -> bool {
        self.claimed_modes().contains_mode(mode)
    }

    /// React to a snapshot
    ///
    /// Only called for unconsumed snapshots while a claimed mode is active.
    /// The chain marks the snapshot consumed afterwards, whether or not any
    /// reaction was emitted.
    fn react(&mut self, snapshot: &InputSnapshot, reactions: &mut Vec<Reaction>);

    /// Called on every handler whenever the active mode changes
    fn mode_changed(&mut self, _mode: Mode) {
        // Default: no-op
    }

    /// Downcast to concrete type for accessing handler-specific methods
    fn as_any(&self) -> &dyn Any;
}
