//! AI controller for the right paddle
//!
//! The AI follows the ball with a deliberate error that is redrawn every
//! `AI_REAIM_INTERVAL` seconds, so it reacts with bounded latency and misses
//! now and then instead of tracking perfectly.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{AiState, GameState};
use crate::consts::*;

/// What the AI is doing this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiMode {
    /// Ball is coming toward the AI side
    Tracking,
    /// Ball is heading away; state is left untouched
    Idle,
}

impl AiMode {
    /// Purely the sign of `vx`, re-evaluated every frame
    pub fn for_ball_vx(vx: f32) -> Self {
        if vx > 0.0 {
            AiMode::Tracking
        } else {
            AiMode::Idle
        }
    }
}

impl AiState {
    /// Advance the re-aim timer, redrawing the offset when it runs out
    pub fn advance_timer(&mut self, dt: f32, rng: &mut Pcg32) {
        self.mistake_timer += dt;
        if self.mistake_timer >= AI_REAIM_INTERVAL {
            self.mistake_timer = 0.0;
            self.target_offset = rng.random_range(-AI_MISTAKE_RANGE..=AI_MISTAKE_RANGE);
        }
    }

    /// Noisy target before clamping
    #[inline]
    pub fn raw_target(&self, ball_y: f32) -> f32 {
        ball_y + self.target_offset
    }
}

/// Move `paddle_y` toward `target` by at most `max_step`, ignoring
/// differences inside the dead zone. Never overshoots.
pub fn step_toward(paddle_y: f32, target: f32, max_step: f32) -> f32 {
    let diff = target - paddle_y;
    if diff.abs() <= AI_DEAD_ZONE {
        return paddle_y;
    }
    paddle_y + max_step.min(diff.abs()).copysign(diff)
}

/// Run one frame of the AI. `dt` is the already-clamped frame delta.
pub fn update_ai(state: &mut GameState, dt: f32) -> AiMode {
    let mode = AiMode::for_ball_vx(state.ball.vel.x);
    if mode == AiMode::Idle {
        return mode;
    }

    let GameState {
        table,
        ball,
        right,
        ai,
        rng,
        ..
    } = state;

    ai.advance_timer(dt, rng);

    let limit = table.paddle_limit(right.height);
    let target = ai
        .raw_target(ball.pos.y)
        .clamp(-limit - AI_TARGET_SLACK, limit + AI_TARGET_SLACK);
    right.y = step_toward(right.y, target, AI_SPEED * dt).clamp(-limit, limit);

    mode
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn tracking_state(seed: u64, ball_y: f32) -> GameState {
        let mut state = GameState::new(seed);
        state.ball.pos = Vec2::new(0.0, ball_y);
        state.ball.vel = Vec2::new(10.0, 0.0);
        state
    }

    #[test]
    fn test_mode_follows_vx_sign() {
        assert_eq!(AiMode::for_ball_vx(1.0), AiMode::Tracking);
        assert_eq!(AiMode::for_ball_vx(-1.0), AiMode::Idle);
        assert_eq!(AiMode::for_ball_vx(0.0), AiMode::Idle);
    }

    #[test]
    fn test_idle_leaves_state_untouched() {
        let mut state = tracking_state(1, 3.0);
        state.ball.vel.x = -10.0;
        state.ai.mistake_timer = 0.2;
        let before = (state.right, state.ai);

        assert_eq!(update_ai(&mut state, 0.05), AiMode::Idle);
        assert_eq!((state.right, state.ai), before);
    }

    #[test]
    fn test_moves_toward_ball_at_capped_speed() {
        let mut state = tracking_state(1, 4.0);
        state.ai.target_offset = 0.0;

        assert_eq!(update_ai(&mut state, 0.05), AiMode::Tracking);
        assert!((state.right.y - AI_SPEED * 0.05).abs() < 1e-5);
    }

    #[test]
    fn test_dead_zone() {
        let mut state = tracking_state(1, 0.1);
        state.ai.target_offset = 0.0;
        update_ai(&mut state, 0.05);
        assert_eq!(state.right.y, 0.0);
    }

    #[test]
    fn test_step_toward_never_overshoots() {
        assert_eq!(step_toward(0.0, 0.3, 10.0), 0.3);
        assert_eq!(step_toward(0.0, -0.3, 10.0), -0.3);
        assert_eq!(step_toward(0.0, 5.0, 0.5), 0.5);
        assert_eq!(step_toward(1.0, 1.1, 0.5), 1.0);
    }

    #[test]
    fn test_reaim_redraws_offset_within_range() {
        let mut state = tracking_state(99, 0.0);
        for _ in 0..200 {
            update_ai(&mut state, 0.05);
            assert!(state.ai.target_offset.abs() <= AI_MISTAKE_RANGE);
            assert!(state.ai.mistake_timer < AI_REAIM_INTERVAL);
        }
    }

    #[test]
    fn test_timer_resets_on_reaim() {
        let mut state = tracking_state(5, 0.0);
        state.ai.mistake_timer = AI_REAIM_INTERVAL - 0.01;
        update_ai(&mut state, 0.05);
        assert_eq!(state.ai.mistake_timer, 0.0);
    }

    #[test]
    fn test_paddle_stays_legal_when_target_is_off_table() {
        let mut state = tracking_state(3, 5.6);
        state.ai.target_offset = AI_MISTAKE_RANGE;
        let limit = state.table.paddle_limit(state.right.height);
        for _ in 0..100 {
            state.ai.mistake_timer = 0.0;
            update_ai(&mut state, 0.05);
            assert!(state.right.y.abs() <= limit);
        }
        assert!((state.right.y - limit).abs() < 1e-5);
    }
}
