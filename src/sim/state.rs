//! Game state and core simulation types
//!
//! Everything the physics step reads or writes lives in `GameState`, which is
//! owned by one caller and passed by `&mut` into the update functions.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which end of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Human-controlled paddle at -X
    Left,
    /// AI-controlled paddle at +X
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Sign of X on this side of the table
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Side walls along the long edges of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Top,
    Bottom,
}

/// The play field, centered at the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Long axis (X)
    pub length: f32,
    /// Short axis (Y)
    pub width: f32,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            length: TABLE_LENGTH,
            width: TABLE_WIDTH,
        }
    }
}

impl Table {
    #[inline]
    pub fn half_length(&self) -> f32 {
        self.length / 2.0
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    /// Largest |Y| a paddle of `paddle_height` may sit at and stay on the table
    #[inline]
    pub fn paddle_limit(&self, paddle_height: f32) -> f32 {
        (self.width - paddle_height) / 2.0
    }
}

/// A paddle; only its Y offset moves
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Offset from the table center along Y
    pub y: f32,
    pub height: f32,
    pub depth: f32,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            y: 0.0,
            height: PADDLE_HEIGHT,
            depth: PADDLE_DEPTH,
        }
    }

    /// X of the face the ball bounces off
    pub fn face_x(&self, table: &Table) -> f32 {
        self.side.sign() * (table.half_length() - self.depth)
    }

    /// Keep the paddle fully on the table
    pub fn clamp_to(&mut self, table: &Table) {
        let limit = table.paddle_limit(self.height);
        self.y = self.y.clamp(-limit, limit);
    }
}

/// The ball, in table-plane coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
        }
    }
}

impl Ball {
    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Recenter and serve toward a random side.
    ///
    /// The horizontal component is always `±BALL_START_SPEED`; the vertical
    /// component is drawn independently from `[-BALL_START_VY_RANGE, BALL_START_VY_RANGE)`.
    pub fn reset(&mut self, rng: &mut Pcg32) {
        let dir = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let vy = rng.random_range(-1.0f32..1.0) * BALL_START_VY_RANGE;
        self.pos = Vec2::ZERO;
        self.vel = Vec2::new(dir * BALL_START_SPEED, vy);
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Deliberate tracking error for the AI paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AiState {
    /// Added to the ball's Y to form the AI's target
    pub target_offset: f32,
    /// Seconds since the offset was last redrawn
    pub mistake_timer: f32,
}

/// Something that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce { wall: Wall },
    /// Ball came off `side`'s paddle at `speed`
    PaddleHit { side: Side, speed: f32 },
    /// Ball left the table; `scorer` got the point
    Scored { scorer: Side },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was built from
    pub seed: u64,
    pub table: Table,
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    pub score: Score,
    pub ai: AiState,
    /// Set by the quit key, polled by the host between frames
    pub should_close: bool,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game with the ball already served
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            table: Table::default(),
            ball: Ball::default(),
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            score: Score::default(),
            ai: AiState::default(),
            should_close: false,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reset_ball();
        state
    }

    pub fn reset_ball(&mut self) {
        self.ball.reset(&mut self.rng);
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Read-only copy for renderers and hosts
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            table: self.table,
            ball_pos: self.ball.pos,
            ball_radius: self.ball.radius,
            left: self.left,
            right: self.right,
            score: self.score,
        }
    }
}

/// Per-frame view of the world handed to collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub table: Table,
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    pub left: Paddle,
    pub right: Paddle,
    pub score: Score,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_serves_from_center() {
        let state = GameState::new(12345);
        assert_eq!(state.ball.pos, Vec2::ZERO);
        assert_eq!(state.ball.vel.x.abs(), BALL_START_SPEED);
        assert!(state.ball.vel.y.abs() <= BALL_START_VY_RANGE);
        assert_eq!(state.score, Score::default());
        assert!(!state.should_close);
    }

    #[test]
    fn test_same_seed_same_serve() {
        let a = GameState::new(42);
        let b = GameState::new(42);
        assert_eq!(a.ball, b.ball);
    }

    #[test]
    fn test_serve_direction_varies() {
        let mut state = GameState::new(7);
        let mut lefts = 0;
        let mut rights = 0;
        for _ in 0..200 {
            state.reset_ball();
            if state.ball.vel.x > 0.0 {
                rights += 1;
            } else {
                lefts += 1;
            }
        }
        assert!(lefts > 0 && rights > 0);
    }

    #[test]
    fn test_paddle_clamp() {
        let table = Table::default();
        let mut paddle = Paddle::new(Side::Left);
        let limit = table.paddle_limit(paddle.height);
        assert!((limit - 4.75).abs() < 1e-6);

        paddle.y = 100.0;
        paddle.clamp_to(&table);
        assert_eq!(paddle.y, limit);

        paddle.y = -100.0;
        paddle.clamp_to(&table);
        assert_eq!(paddle.y, -limit);
    }

    #[test]
    fn test_paddle_faces() {
        let table = Table::default();
        assert_eq!(Paddle::new(Side::Left).face_x(&table), -9.5);
        assert_eq!(Paddle::new(Side::Right).face_x(&table), 9.5);
    }

    #[test]
    fn test_score_award() {
        let mut score = Score::default();
        score.award(Side::Left);
        score.award(Side::Left);
        score.award(Side::Right);
        assert_eq!(score.get(Side::Left), 2);
        assert_eq!(score.get(Side::Right), 1);
        assert_eq!(Side::Left.opponent(), Side::Right);
    }
}
