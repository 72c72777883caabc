//! Mode-filtered dispatch of input snapshots

use enum_map::EnumMap;
use thiserror::Error;
use tracing::{debug, info, trace};

use super::events::Reaction;
use super::handler::ModeHandler;
use super::handlers::{CutsceneHandler, DialogHandler, GameplayHandler, UiHandler};
use super::mode::{Mode, ModeSet};
use super::state::InputSnapshot;

/// Configuration defects caught when a chain is built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("handler '{handler}' claims no modes")]
    EmptyClaims { handler: String },

    #[error("mode {mode} is claimed by both '{first}' and '{second}'")]
    OverlappingClaims {
        mode: Mode,
        first: String,
        second: String,
    },

    #[error("no handler claims mode {mode}")]
    UncoveredMode { mode: Mode },
}

/// Ordered handler sequence with at-most-once input consumption
///
/// Exactly one handler reacts per snapshot: the one claiming the active
/// mode. Claimed sets are validated to be disjoint at build time, so chain
/// order only affects traversal cost.
pub struct DispatchChain {
    handlers: Vec<Box<dyn ModeHandler>>,
    mode: Mode,
    /// Reactions emitted since the last `take_reactions`
    reactions: Vec<Reaction>,
}

/// Builder that validates claims before producing a [`DispatchChain`]
#[derive(Default)]
pub struct DispatchChainBuilder {
    handlers: Vec<Box<dyn ModeHandler>>,
}

impl DispatchChainBuilder {
    /// Appends a handler to the end of the chain
    pub fn handler<H: ModeHandler + 'static>(mut self, handler: H) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Appends an already boxed handler
    pub fn boxed(mut self, handler: Box<dyn ModeHandler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Builds a chain whose handlers cover every mode exactly once
    pub fn build(self) -> Result<DispatchChain, ChainError> {
        let owners = check_disjoint(&self.handlers)?;
        if let Some((mode, _)) = owners.iter().find(|(_, owner)| owner.is_none()) {
            return Err(ChainError::UncoveredMode { mode });
        }
        Ok(DispatchChain::assemble(self.handlers))
    }

    /// Builds a chain that may leave modes unclaimed
    ///
    /// Snapshots arriving in an unclaimed mode are dropped.
    pub fn build_partial(self) -> Result<DispatchChain, ChainError> {
        check_disjoint(&self.handlers)?;
        Ok(DispatchChain::assemble(self.handlers))
    }
}

/// Maps each mode to the index of the handler claiming it
fn check_disjoint(
    handlers: &[Box<dyn ModeHandler>],
) -> Result<EnumMap<Mode, Option<usize>>, ChainError> {
    let mut owners: EnumMap<Mode, Option<usize>> = EnumMap::default();

    for (index, handler) in handlers.iter().enumerate() {
        let claimed = handler.claimed_modes();
        if claimed.is_empty() {
            return Err(ChainError::EmptyClaims {
                handler: handler.name().to_string(),
            });
        }

        for mode in claimed.modes() {
            if let Some(first) = owners[mode] {
                return Err(ChainError::OverlappingClaims {
                    mode,
                    first: handlers[first].name().to_string(),
                    second: handler.name().to_string(),
                });
            }
            owners[mode] = Some(index);
        }
    }

    Ok(owners)
}

impl DispatchChain {
    /// Starts building a chain
    pub fn builder() -> DispatchChainBuilder {
        DispatchChainBuilder::default()
    }

    /// The four stock handlers in gameplay, ui, cutscene, dialog order
    pub fn standard() -> Self {
        let handlers: Vec<Box<dyn ModeHandler>> = vec![
            Box::new(GameplayHandler::new()),
            Box::new(UiHandler::new()),
            Box::new(CutsceneHandler::new()),
            Box::new(DialogHandler::new()),
        ];
        debug_assert!(check_disjoint(&handlers).is_ok());
        Self::assemble(handlers)
    }

    fn assemble(mut handlers: Vec<Box<dyn ModeHandler>>) -> Self {
        let mode = Mode::default();
        for handler in &mut handlers {
            handler.mode_changed(mode);
        }

        debug!(
            handlers = ?handlers.iter().map(|h| h.name()).collect::<Vec<_>>(),
            "Dispatch chain assembled"
        );

        Self {
            handlers,
            mode,
            reactions: Vec::new(),
        }
    }

    /// Switches the active mode and broadcasts it to every handler
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }

        info!(from = %self.mode, to = %mode, "Mode changed");
        self.mode = mode;
        for handler in &mut self.handlers {
            handler.mode_changed(mode);
        }
    }

    pub fn active_mode(&self) -> Mode {
        self.mode
    }

    /// Routes a snapshot to the handler claiming the active mode
    ///
    /// Returns true if some handler claims the mode. An already consumed
    /// snapshot is claimed but not reacted to again. When no handler claims
    /// the mode the snapshot is dropped untouched.
    pub fn dispatch(&mut self, snapshot: &mut InputSnapshot) -> bool {
        let mode = self.mode;
        let Some(handler) = self.handlers.iter_mut().find(|h| h.claims(mode)) else {
            trace!(%mode, "No handler claims mode, input dropped");
            return false;
        };

        if snapshot.is_consumed() {
            trace!(handler = handler.name(), "Snapshot already consumed");
            return true;
        }

        let before = self.reactions.len();
        handler.react(snapshot, &mut self.reactions);
        snapshot.mark_consumed();

        for reaction in &self.reactions[before..] {
            debug!(handler = handler.name(), %mode, %reaction, "Reaction");
        }

        true
    }

    /// Drains reactions emitted since the last call
    pub fn take_reactions(&mut self) -> Vec<Reaction> {
        std::mem::take(&mut self.reactions)
    }

    /// Handler responsible for `mode`, if any
    pub fn handler_for(&self, mode: Mode) -> Option<&dyn ModeHandler> {
        self.handlers
            .iter()
            .find(|h| h.claims(mode))
            .map(|h| h.as_ref())
    }

    /// Get a reference to a handler by name
    pub fn get_handler(&self, name: &str) -> Option<&dyn ModeHandler> {
        self.handlers
            .iter()
            .find(|h| h.name() == name)
            .map(|h| h.as_ref())
    }

    /// Gets a typed reference to a handler by name
    ///
    /// # Example
    /// ```ignore
    /// let ui = chain.get_handler_typed::<UiHandler>("ui");
    /// ```
    pub fn get_handler_typed<T: 'static>(&self, name: &str) -> Option<&T> {
        self.get_handler(name)
            .and_then(|h| h.as_any().downcast_ref::<T>())
    }

    /// Get number of handlers in the chain
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Handler names in traversal order
    pub fn handler_names(&self) -> Vec<&str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// Get debug information about all handlers
    pub fn debug_handlers(&self) -> Vec<(String, ModeSet)> {
        self.handlers
            .iter()
            .map(|h| (h.name().to_string(), h.claimed_modes()))
            .collect()
    }
}

impl Default for DispatchChain {
    fn default() -> Self {
        Self::standard()
    }
}
