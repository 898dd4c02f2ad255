//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed sub-steps only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use ai::{AiMode, update_ai};
pub use collision::{Aabb, paddle_collider};
pub use input::{Key, KeyState, process_input};
pub use state::{
    AiState, Ball, GameEvent, GameState, Paddle, Score, Side, Snapshot, Table, Wall,
};
pub use tick::{advance_ball, check_scoring, clamp_frame_dt, update};
