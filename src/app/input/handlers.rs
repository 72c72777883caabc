//! Stock handlers, one per mode

use std::any::Any;

use tracing::trace;

use super::events::Reaction;
use super::handler::ModeHandler;
use super::mode::{Mode, ModeSet};
use super::state::InputSnapshot;

/// Player control: movement, jumping, interaction
#[derive(Debug, Default)]
pub struct GameplayHandler {
    mode: Mode,
    reacted: u64,
}

/// Menu navigation and selection
#[derive(Debug, Default)]
pub struct UiHandler {
    mode: Mode,
    reacted: u64,
}

/// Cutscene skipping; everything else is swallowed
#[derive(Debug, Default)]
pub struct CutsceneHandler {
    mode: Mode,
    reacted: u64,
}

/// Dialog choice and advance
#[derive(Debug, Default)]
pub struct DialogHandler {
    mode: Mode,
    reacted: u64,
}

impl ModeHandler for GameplayHandler {
    fn name(&self) -> &str {
        "gameplay"
    }

    fn claimed_modes(&self) -> ModeSet {
        ModeSet::GAMEPLAY
    }

    fn react(&mut self, snapshot: &InputSnapshot, reactions: &mut Vec<Reaction>) {
        self.reacted += 1;

        if snapshot.has_movement() {
            reactions.push(Reaction::Move(snapshot.movement()));
        }
        if snapshot.jump_pressed() {
            reactions.push(Reaction::Jump);
        }
        if snapshot.interact_pressed() {
            reactions.push(Reaction::Interact);
        }
    }

    fn mode_changed(&mut self, mode: Mode) {
        self.mode = mode;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ModeHandler for UiHandler {
    fn name(&self) -> &str {
        "ui"
    }

    fn claimed_modes(&self) -> ModeSet {
        ModeSet::UI
    }

    fn react(&mut self, snapshot: &InputSnapshot, reactions: &mut Vec<Reaction>) {
        self.reacted += 1;

        if snapshot.has_movement() {
            reactions.push(Reaction::UiNavigate(snapshot.movement()));
        }
        if snapshot.interact_pressed() {
            reactions.push(Reaction::UiSelect);
        }
    }

    fn mode_changed(&mut self, mode: Mode) {
        self.mode = mode;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ModeHandler for CutsceneHandler {
    fn name(&self) -> &str {
        "cutscene"
    }

    fn claimed_modes(&self) -> ModeSet {
        ModeSet::CUTSCENE
    }

    fn react(&mut self, snapshot: &InputSnapshot, reactions: &mut Vec<Reaction>) {
        self.reacted += 1;

        // Only interact skips; movement and jump are swallowed
        if snapshot.interact_pressed() {
            reactions.push(Reaction::SkipCutscene);
        } else if snapshot.has_movement() || snapshot.jump_pressed() {
            trace!("cutscene swallowed input");
        }
    }

    fn mode_changed(&mut self, mode: Mode) {
        self.mode = mode;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ModeHandler for DialogHandler {
    fn name(&self) -> &str {
        "dialog"
    }

    fn claimed_modes(&self) -> ModeSet {
        ModeSet::DIALOG
    }

    fn react(&mut self, snapshot: &InputSnapshot, reactions: &mut Vec<Reaction>) {
        self.reacted += 1;

        if snapshot.has_movement() {
            reactions.push(Reaction::DialogChoice(snapshot.movement()));
        }
        if snapshot.interact_pressed() {
            reactions.push(Reaction::AdvanceDialog);
        }
    }

    fn mode_changed(&mut self, mode: Mode) {
        self.mode = mode;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

macro_rules! handler_accessors {
    ($($handler:ty),*) => {
        $(
            impl $handler {
                pub fn new() -> Self {
                    Self::default()
                }

                /// Mode most recently broadcast by the chain
                pub fn observed_mode(&self) -> Mode {
                    self.mode
                }

                /// Number of snapshots this handler has reacted to
                pub fn reacted_count(&self) -> u64 {
                    self.reacted
                }
            }
        )*
    };
}

handler_accessors!(GameplayHandler, UiHandler, CutsceneHandler, DialogHandler);

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    fn react_to(handler: &mut dyn ModeHandler, snapshot: InputSnapshot) -> Vec<Reaction> {
        let mut reactions = Vec::new();
        handler.react(&snapshot, &mut reactions);
        reactions
    }

    #[test]
    fn test_gameplay_reactions() {
        let mut handler = GameplayHandler::new();
        let reactions = react_to(
            &mut handler,
            InputSnapshot::new(Vec2::new(-1.0, 0.0), true, true),
        );
        assert_eq!(
            reactions,
            vec![
                Reaction::Move(Vec2::new(-1.0, 0.0)),
                Reaction::Jump,
                Reaction::Interact
            ]
        );
        assert_eq!(handler.reacted_count(), 1);
    }

    #[test]
    fn test_ui_ignores_jump() {
        let mut handler = UiHandler::new();
        let reactions = react_to(&mut handler, InputSnapshot::new(Vec2::Y, true, false));
        assert_eq!(reactions, vec![Reaction::UiNavigate(Vec2::Y)]);
    }

    #[test]
    fn test_cutscene_only_skips_on_interact() {
        let mut handler = CutsceneHandler::new();
        assert!(react_to(&mut handler, InputSnapshot::new(Vec2::X, true, false)).is_empty());
        assert_eq!(
            react_to(&mut handler, InputSnapshot::new(Vec2::ZERO, false, true)),
            vec![Reaction::SkipCutscene]
        );
        assert_eq!(handler.reacted_count(), 2);
    }

    #[test]
    fn test_dialog_reactions() {
        let mut handler = DialogHandler::new();
        let reactions = react_to(&mut handler, InputSnapshot::new(Vec2::NEG_Y, false, true));
        assert_eq!(
            reactions,
            vec![Reaction::DialogChoice(Vec2::NEG_Y), Reaction::AdvanceDialog]
        );
    }

    #[test]
    fn test_stock_handlers_claim_one_mode_each() {
        let handlers: [Box<dyn ModeHandler>; 4] = [
            Box::new(GameplayHandler::new()),
            Box::new(UiHandler::new()),
            Box::new(CutsceneHandler::new()),
            Box::new(DialogHandler::new()),
        ];
        for (handler, mode) in handlers.iter().zip(Mode::ALL) {
            assert_eq!(handler.claimed_modes(), mode.as_set());
            assert_eq!(handler.name(), mode.name());
        }
    }
}
