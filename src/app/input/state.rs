//! Per-tick input snapshot and button edge tracking

use glam::Vec2;

/// Input captured for a single tick
///
/// Everything except the consumed flag is fixed at construction. Once a
/// handler has reacted, the snapshot is marked consumed and no handler
/// will act on it again.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputSnapshot {
    movement: Vec2,
    jump_pressed: bool,
    interact_pressed: bool,
    consumed: bool,
}

impl InputSnapshot {
    /// Creates an unconsumed snapshot
    pub fn new(movement: Vec2, jump_pressed: bool, interact_pressed: bool) -> Self {
        Self {
            movement,
            jump_pressed,
            interact_pressed,
            consumed: false,
        }
    }

    /// Snapshot with no movement and no presses
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn movement(&self) -> Vec2 {
        self.movement
    }

    /// Returns true if the movement vector is non-zero
    pub fn has_movement(&self) -> bool {
        self.movement != Vec2::ZERO
    }

    pub fn jump_pressed(&self) -> bool {
        self.jump_pressed
    }

    pub fn interact_pressed(&self) -> bool {
        self.interact_pressed
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    /// Marks the snapshot consumed (idempotent)
    pub fn mark_consumed(&mut self) {
        self.consumed = true;
    }
}

/// Button press state with edge detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Released,
    /// Pressed this frame (edge)
    JustPressed,
    /// Held down (multiple frames)
    Pressed,
    /// Released this frame (edge)
    JustReleased,
}

impl ButtonState {
    /// Advance state for next frame (transitions edges to steady states)
    pub fn advance(self) -> Self {
        match self {
            Self::JustPressed => Self::Pressed,
            Self::JustReleased => Self::Released,
            state => state,
        }
    }

    /// State after a press event
    pub fn press(self) -> Self {
        if self.is_down() {
            self
        } else {
            Self::JustPressed
        }
    }

    /// State after a release event
    pub fn release(self) -> Self {
        if self.is_down() {
            Self::JustReleased
        } else {
            self
        }
    }

    /// Returns true if button is currently down (just pressed or held)
    pub fn is_down(self) -> bool {
        matches!(self, Self::JustPressed | Self::Pressed)
    }

    /// Returns true if button was just pressed this frame
    pub fn is_just_pressed(self) -> bool {
        matches!(self, Self::JustPressed)
    }

    /// Returns true if button was just released this frame
    pub fn is_just_released(self) -> bool {
        matches!(self, Self::JustReleased)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_consumption_is_idempotent() {
        let mut snapshot = InputSnapshot::new(Vec2::new(1.0, 0.0), false, true);
        assert!(!snapshot.is_consumed());
        snapshot.mark_consumed();
        snapshot.mark_consumed();
        assert!(snapshot.is_consumed());
        assert_eq!(snapshot.movement(), Vec2::new(1.0, 0.0));
        assert!(snapshot.interact_pressed());
    }

    #[test]
    fn test_idle_snapshot_has_no_movement() {
        let snapshot = InputSnapshot::idle();
        assert!(!snapshot.has_movement());
        assert!(!snapshot.jump_pressed());
        assert!(!snapshot.interact_pressed());
    }

    #[test]
    fn test_button_edges() {
        let state = ButtonState::Released.press();
        assert!(state.is_just_pressed());
        assert_eq!(state.press(), ButtonState::JustPressed);

        let held = state.advance();
        assert_eq!(held, ButtonState::Pressed);
        assert!(held.is_down());
        assert_eq!(held.press(), ButtonState::Pressed);

        let released = held.release();
        assert!(released.is_just_released());
        assert_eq!(released.advance(), ButtonState::Released);
        assert_eq!(ButtonState::Released.release(), ButtonState::Released);
    }
}
