//! Human paddle controller
//!
//! Held keys move the left paddle directly (no momentum). The quit key only
//! raises a flag; the host decides when to stop.

use serde::{Deserialize, Serialize};

use super::state::GameState;
use crate::consts::PADDLE_SPEED;

/// Logical keys the core understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Move left paddle toward +Y (W)
    Up,
    /// Move left paddle toward -Y (S)
    Down,
    /// Request session end (Escape)
    Quit,
}

/// Keys currently held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
    pub quit: bool,
}

impl KeyState {
    pub fn press(&mut self, key: Key) {
        self.set(key, true);
    }

    pub fn release(&mut self, key: Key) {
        self.set(key, false);
    }

    pub fn is_held(&self, key: Key) -> bool {
        match key {
            Key::Up => self.up,
            Key::Down => self.down,
            Key::Quit => self.quit,
        }
    }

    /// Builder form of [`KeyState::press`]
    pub fn with(mut self, key: Key) -> Self {
        self.press(key);
        self
    }

    fn set(&mut self, key: Key, held: bool) {
        match key {
            Key::Up => self.up = held,
            Key::Down => self.down = held,
            Key::Quit => self.quit = held,
        }
    }
}

/// Apply one frame of held keys.
///
/// Uses the raw frame delta; both paddles are clamped afterwards regardless
/// of which one moved.
pub fn process_input(state: &mut GameState, keys: &KeyState, dt: f32) {
    // NaN and negative deltas move nothing; huge ones end up at the clamp
    let dt = if dt > 0.0 { dt } else { 0.0 };

    let dir = match (keys.is_held(Key::Up), keys.is_held(Key::Down)) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    };
    if dir != 0.0 && dt > 0.0 {
        state.left.y += dir * PADDLE_SPEED * dt;
    }

    if keys.quit && !state.should_close {
        log::info!("Quit requested");
        state.should_close = true;
    }

    let table = state.table;
    state.left.clamp_to(&table);
    state.right.clamp_to(&table);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_up_and_down_move_left_paddle() {
        let mut state = GameState::new(1);
        process_input(&mut state, &KeyState::default().with(Key::Up), 0.1);
        assert!((state.left.y - 1.4).abs() < 1e-5);

        process_input(&mut state, &KeyState::default().with(Key::Down), 0.05);
        assert!((state.left.y - 0.7).abs() < 1e-5);
        assert_eq!(state.right.y, 0.0);
    }

    #[test]
    fn test_both_keys_cancel() {
        let mut state = GameState::new(1);
        let keys = KeyState::default().with(Key::Up).with(Key::Down);
        process_input(&mut state, &keys, 0.1);
        assert!(state.left.y.abs() < 1e-6);
    }

    #[test]
    fn test_large_delta_is_clamped_to_table() {
        let mut state = GameState::new(1);
        process_input(&mut state, &KeyState::default().with(Key::Up), 10.0);
        assert_eq!(state.left.y, state.table.paddle_limit(state.left.height));
    }

    #[test]
    fn test_right_paddle_clamped_too() {
        let mut state = GameState::new(1);
        state.right.y = -50.0;
        process_input(&mut state, &KeyState::default(), 0.016);
        assert_eq!(state.right.y, -state.table.paddle_limit(state.right.height));
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut state = GameState::new(1);
        process_input(&mut state, &KeyState::default(), 0.016);
        assert!(!state.should_close);
        process_input(&mut state, &KeyState::default().with(Key::Quit), 0.016);
        assert!(state.should_close);
    }

    #[test]
    fn test_press_release() {
        let mut keys = KeyState::default();
        keys.press(Key::Down);
        assert!(keys.is_held(Key::Down));
        keys.release(Key::Down);
        assert!(!keys.is_held(Key::Down));
    }

    #[test]
    fn test_infinite_delta_clamps_to_limit() {
        let mut state = GameState::new(1);
        let limit = state.table.paddle_limit(state.left.height);

        process_input(&mut state, &KeyState::default().with(Key::Up), f32::INFINITY);
        assert_eq!(state.left.y, limit);

        process_input(&mut state, &KeyState::default().with(Key::Down), f32::INFINITY);
        assert_eq!(state.left.y, -limit);

        let both = KeyState::default().with(Key::Up).with(Key::Down);
        process_input(&mut state, &both, f32::INFINITY);
        assert_eq!(state.left.y, -limit);
    }

    #[test]
    fn test_nan_delta_ignored() {
        let mut state = GameState::new(1);
        process_input(&mut state, &KeyState::default().with(Key::Up), f32::NAN);
        assert_eq!(state.left.y, 0.0);
    }
}
