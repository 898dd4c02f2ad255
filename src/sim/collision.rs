//! Collision detection and response on the table
//!
//! Walls are resolved against the ball's end-of-step position. Paddles are
//! tested with a swept box covering the whole sub-step so a fast ball cannot
//! skip over a thin paddle between two positions.

use glam::Vec2;

use super::state::{Ball, Paddle, Side, Table, Wall};
use crate::consts::*;

/// Axis-aligned box in table-plane coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box covering a circle of `radius` moving from `from` to `to`
    pub fn swept(from: Vec2, to: Vec2, radius: f32) -> Self {
        let r = Vec2::splat(radius);
        Self {
            min: from.min(to) - r,
            max: from.max(to) + r,
        }
    }

    /// Strict overlap: boxes that only touch do not collide
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Collision box for a paddle.
///
/// Spans from the table end to the paddle face, then another
/// `PADDLE_COLLIDER_PAD` ball radii toward the center.
pub fn paddle_collider(table: &Table, paddle: &Paddle, ball_radius: f32) -> Aabb {
    let half_len = table.half_length();
    let reach = paddle.depth + ball_radius * PADDLE_COLLIDER_PAD;
    let (min_x, max_x) = match paddle.side {
        Side::Left => (-half_len, -half_len + reach),
        Side::Right => (half_len - reach, half_len),
    };
    let half_h = paddle.height / 2.0;
    Aabb::new(
        Vec2::new(min_x, paddle.y - half_h),
        Vec2::new(max_x, paddle.y + half_h),
    )
}

/// Bounce the ball off the side walls. Never touches `vel.x`.
pub fn reflect_off_walls(ball: &mut Ball, half_width: f32) -> Option<Wall> {
    let mut hit = None;
    if ball.pos.y + ball.radius > half_width {
        ball.pos.y = half_width - ball.radius;
        ball.vel.y = -ball.vel.y.abs();
        hit = Some(Wall::Top);
    }
    if ball.pos.y - ball.radius < -half_width {
        ball.pos.y = -half_width + ball.radius;
        ball.vel.y = ball.vel.y.abs();
        hit = Some(Wall::Bottom);
    }
    hit
}

/// Only a ball travelling toward a paddle can hit it
#[inline]
pub fn approaching(ball: &Ball, side: Side) -> bool {
    match side {
        Side::Left => ball.vel.x < 0.0,
        Side::Right => ball.vel.x > 0.0,
    }
}

/// Speed after a paddle hit, from the pre-hit speed
#[inline]
pub fn boosted_speed(speed: f32) -> f32 {
    (speed * PADDLE_BOOST).min(BALL_MAX_SPEED)
}

/// Send the ball back off `paddle`: snap it just clear of the face, point
/// `vx` away and rescale the whole velocity to the boosted speed.
///
/// Callers check [`approaching`] first, so the speed is never zero here.
pub fn resolve_paddle_hit(ball: &mut Ball, paddle: &Paddle, table: &Table) {
    let away = -paddle.side.sign();
    ball.pos.x = paddle.face_x(table) + away * (ball.radius + PADDLE_SEPARATION);

    let speed = ball.speed();
    let scale = boosted_speed(speed) / speed;
    ball.vel.x = away * ball.vel.x.abs() * scale;
    ball.vel.y *= scale;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(pos: Vec2, vel: Vec2) -> Ball {
        Ball {
            pos,
            vel,
            radius: BALL_RADIUS,
        }
    }

    #[test]
    fn test_swept_box_covers_path() {
        let b = Aabb::swept(Vec2::new(1.0, 2.0), Vec2::new(-1.0, 3.0), 0.5);
        assert_eq!(b.min, Vec2::new(-1.5, 1.5));
        assert_eq!(b.max, Vec2::new(1.5, 3.5));
    }

    #[test]
    fn test_touching_boxes_do_not_overlap() {
        let a = Aabb::new(Vec2::ZERO, Vec2::ONE);
        let b = Aabb::new(Vec2::new(1.0, 0.0), Vec2::new(2.0, 1.0));
        let c = Aabb::new(Vec2::new(0.5, 0.5), Vec2::new(2.0, 2.0));
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&a));
    }

    #[test]
    fn test_paddle_collider_extends_toward_center() {
        let table = Table::default();
        let right = paddle_collider(&table, &Paddle::new(Side::Right), BALL_RADIUS);
        assert!((right.min.x - (10.0 - 0.5 - 0.48)).abs() < 1e-5);
        assert_eq!(right.max.x, 10.0);
        assert_eq!(right.min.y, -1.25);
        assert_eq!(right.max.y, 1.25);

        let mut left_paddle = Paddle::new(Side::Left);
        left_paddle.y = 2.0;
        let left = paddle_collider(&table, &left_paddle, BALL_RADIUS);
        assert_eq!(left.min.x, -10.0);
        assert!((left.max.x - (-10.0 + 0.98)).abs() < 1e-5);
        assert_eq!(left.min.y, 0.75);
        assert_eq!(left.max.y, 3.25);
    }

    #[test]
    fn test_top_wall_reflection() {
        let mut ball = ball_at(Vec2::new(0.0, 5.7), Vec2::new(3.0, 4.0));
        assert_eq!(reflect_off_walls(&mut ball, 6.0), Some(Wall::Top));
        assert_eq!(ball.pos.y, 6.0 - BALL_RADIUS);
        assert_eq!(ball.vel, Vec2::new(3.0, -4.0));
    }

    #[test]
    fn test_bottom_wall_reflection() {
        let mut ball = ball_at(Vec2::new(0.0, -5.9), Vec2::new(-3.0, -4.0));
        assert_eq!(reflect_off_walls(&mut ball, 6.0), Some(Wall::Bottom));
        assert_eq!(ball.pos.y, -6.0 + BALL_RADIUS);
        assert_eq!(ball.vel, Vec2::new(-3.0, 4.0));
    }

    #[test]
    fn test_wall_pushes_inward_even_if_already_moving_inward() {
        // Overlapping the wall while already heading back keeps vy inward
        let mut ball = ball_at(Vec2::new(0.0, 5.8), Vec2::new(1.0, -2.0));
        reflect_off_walls(&mut ball, 6.0);
        assert_eq!(ball.vel.y, -2.0);
    }

    #[test]
    fn test_no_wall_contact() {
        let mut ball = ball_at(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        assert_eq!(reflect_off_walls(&mut ball, 6.0), None);
        assert_eq!(ball.pos, Vec2::ZERO);
    }

    #[test]
    fn test_approaching() {
        let ball = ball_at(Vec2::ZERO, Vec2::new(-1.0, 0.0));
        assert!(approaching(&ball, Side::Left));
        assert!(!approaching(&ball, Side::Right));
    }

    #[test]
    fn test_boost_is_capped() {
        assert!((boosted_speed(10.0) - 10.8).abs() < 1e-5);
        assert_eq!(boosted_speed(27.0), BALL_MAX_SPEED);
        assert_eq!(boosted_speed(BALL_MAX_SPEED), BALL_MAX_SPEED);
    }

    #[test]
    fn test_right_paddle_hit_response() {
        let table = Table::default();
        let paddle = Paddle::new(Side::Right);
        let mut ball = ball_at(Vec2::new(9.3, 0.2), Vec2::new(6.0, 8.0));

        resolve_paddle_hit(&mut ball, &paddle, &table);

        assert!((ball.pos.x - (9.5 - BALL_RADIUS - PADDLE_SEPARATION)).abs() < 1e-5);
        assert!(ball.vel.x < 0.0);
        assert!((ball.speed() - 10.8).abs() < 1e-4);
        // Angle preserved: vy/vx ratio unchanged in magnitude
        assert!((ball.vel.y / ball.vel.x.abs() - 8.0 / 6.0).abs() < 1e-5);
    }

    #[test]
    fn test_left_paddle_hit_response_caps_speed() {
        let table = Table::default();
        let paddle = Paddle::new(Side::Left);
        let mut ball = ball_at(Vec2::new(-9.3, 0.0), Vec2::new(-27.0, 0.0));

        resolve_paddle_hit(&mut ball, &paddle, &table);

        assert!((ball.pos.x - (-9.5 + BALL_RADIUS + PADDLE_SEPARATION)).abs() < 1e-5);
        assert!((ball.vel.x - BALL_MAX_SPEED).abs() < 1e-4);
        assert_eq!(ball.vel.y, 0.0);
    }
}
