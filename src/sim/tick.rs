//! Fixed timestep simulation tick
//!
//! A frame is split into `SIM_DT` sub-steps (at most `MAX_SUBSTEPS`). Any
//! time left over below one sub-step is dropped rather than carried into the
//! next frame. Scoring is checked once after the sub-steps, then the AI runs.

use super::ai::update_ai;
use super::collision::{Aabb, approaching, paddle_collider, reflect_off_walls, resolve_paddle_hit};
use super::state::{GameEvent, GameState, Side};
use crate::consts::*;

/// Clamp a host-supplied frame delta into `[0, MAX_FRAME_DT]`
#[inline]
pub fn clamp_frame_dt(dt: f32) -> f32 {
    if dt.is_nan() {
        0.0
    } else {
        dt.clamp(0.0, MAX_FRAME_DT)
    }
}

/// Advance the whole simulation by one frame
pub fn update(state: &mut GameState, dt: f32) -> Vec<GameEvent> {
    let dt = clamp_frame_dt(dt);

    let mut events = advance_ball(state, dt);
    if let Some(event) = check_scoring(state) {
        events.push(event);
    }
    update_ai(state, dt);

    events
}

/// Run the fixed sub-steps for `dt` seconds. Returns the number of sub-steps
/// alongside any events so callers can tell how much time was simulated.
pub fn advance_ball_counted(state: &mut GameState, dt: f32) -> (u32, Vec<GameEvent>) {
    let mut events = Vec::new();
    let mut remaining = dt;
    let mut steps = 0;

    while remaining >= SIM_DT && steps < MAX_SUBSTEPS {
        steps += 1;
        remaining -= SIM_DT;
        substep(state, SIM_DT, &mut events);
    }

    (steps, events)
}

/// Run the fixed sub-steps for `dt` seconds (physics only, no scoring or AI)
pub fn advance_ball(state: &mut GameState, dt: f32) -> Vec<GameEvent> {
    advance_ball_counted(state, dt).1
}

/// One fixed sub-step: integrate, then walls, then paddles (left before right).
pub fn substep(state: &mut GameState, sub_dt: f32, events: &mut Vec<GameEvent>) {
    let GameState {
        table,
        ball,
        left,
        right,
        ..
    } = state;

    let prev = ball.pos;
    ball.pos += ball.vel * sub_dt;

    if let Some(wall) = reflect_off_walls(ball, table.half_width()) {
        log::trace!("Wall bounce: {:?}", wall);
        events.push(GameEvent::WallBounce { wall });
    }

    let swept = Aabb::swept(prev, ball.pos, ball.radius);
    for paddle in [&*left, &*right] {
        if approaching(ball, paddle.side) && swept.overlaps(&paddle_collider(table, paddle, ball.radius)) {
            resolve_paddle_hit(ball, paddle, table);
            let speed = ball.speed();
            log::debug!("{:?} paddle hit, speed now {:.2}", paddle.side, speed);
            events.push(GameEvent::PaddleHit {
                side: paddle.side,
                speed,
            });
        }
    }
}

/// Award a point and re-serve if the ball has left the table in X
pub fn check_scoring(state: &mut GameState) -> Option<GameEvent> {
    let half_len = state.table.half_length();
    let exited = if state.ball.pos.x < -half_len {
        Side::Left
    } else if state.ball.pos.x > half_len {
        Side::Right
    } else {
        return None;
    };
    let scorer = exited.opponent();

    state.score.award(scorer);
    log::info!(
        "{:?} scores ({} : {})",
        scorer,
        state.score.left,
        state.score.right
    );
    state.reset_ball();

    Some(GameEvent::Scored { scorer })
}
