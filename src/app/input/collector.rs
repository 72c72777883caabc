//! Raw key collection into per-tick input

use enum_map::EnumMap;
use glam::Vec2;

use super::events::KeyCode;
use super::state::{ButtonState, InputSnapshot};
use crate::sim::{Direction, TutorialInput, TutorialSignal};

/// Collects key events and produces snapshots and tutorial input each tick
#[derive(Debug, Default)]
pub struct InputCollector {
    keys: EnumMap<KeyCode, ButtonState>,
}

impl InputCollector {
    /// Creates a new input collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key or button press
    pub fn press(&mut self, key: KeyCode) {
        self.keys[key] = self.keys[key].press();
    }

    /// Handle a key or button release
    pub fn release(&mut self, key: KeyCode) {
        self.keys[key] = self.keys[key].release();
    }

    /// Current state of a key
    pub fn key(&self, key: KeyCode) -> ButtonState {
        self.keys[key]
    }

    fn held(&self, keys: [KeyCode; 2]) -> bool {
        keys.iter().any(|k| self.keys[*k].is_down())
    }

    fn just_pressed(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|k| self.keys[*k].is_just_pressed())
    }

    /// Builds this tick's dispatch snapshot
    ///
    /// Movement comes from held WASD or arrow keys, each axis in [-1, 1]
    /// with up as positive y.
    pub fn snapshot(&self) -> InputSnapshot {
        let axis = |neg: bool, pos: bool| pos as i8 as f32 - neg as i8 as f32;
        let movement = Vec2::new(
            axis(
                self.held([KeyCode::A, KeyCode::Left]),
                self.held([KeyCode::D, KeyCode::Right]),
            ),
            axis(
                self.held([KeyCode::S, KeyCode::Down]),
                self.held([KeyCode::W, KeyCode::Up]),
            ),
        );

        InputSnapshot::new(
            movement,
            self.just_pressed(&[KeyCode::Space]),
            self.just_pressed(&[KeyCode::E]),
        )
    }

    /// Builds this tick's tutorial signals from keys pressed this frame
    pub fn tutorial_input(&self) -> TutorialInput {
        let mut input = TutorialInput::new();

        for direction in Direction::ALL {
            let keys = match direction {
                Direction::Up => [KeyCode::W, KeyCode::Up],
                Direction::Down => [KeyCode::S, KeyCode::Down],
                Direction::Left => [KeyCode::A, KeyCode::Left],
                Direction::Right => [KeyCode::D, KeyCode::Right],
            };
            if self.just_pressed(&keys) {
                input.push(TutorialSignal::Move(direction));
            }
        }

        if self.just_pressed(&[KeyCode::MouseLeft]) {
            input.push(TutorialSignal::Attack);
        }
        if self.just_pressed(&[KeyCode::MouseRight]) {
            input.push(TutorialSignal::Block);
        }
        // Opening comes before selecting so both can land in one tick
        if self.just_pressed(&[KeyCode::I]) {
            input.push(TutorialSignal::OpenInventory);
        }
        if self.just_pressed(&[KeyCode::Space]) {
            input.push(TutorialSignal::SelectItem);
        }

        input
    }

    /// Advance to next frame (transitions edge states to steady states)
    pub fn advance_frame(&mut self) {
        for state in self.keys.values_mut() {
            *state = state.advance();
        }
    }
}
