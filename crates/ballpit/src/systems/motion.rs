//! Position integration and wall handling.
//!
//! One step is one time unit: `position += velocity`, no delta time. Walls are
//! tested against half the radius, so a ball resting on a wall overlaps it by
//! half its radius.
//!
//! Wall policy, per axis and only while the ball moves into the wall:
//! - bottom: reflect vertical velocity, scaled by K
//! - top: absorb vertical velocity entirely
//! - left / right: reflect horizontal velocity, scaled by K²

use glam::UVec2;

use crate::api::config::WallDamping;
use crate::components::ball::Ball;

/// Explicit Euler step with unit timestep.
pub fn integrate(ball: &mut Ball) {
    ball.position += ball.velocity;
}

/// Clamp and reflect the ball against the four walls of `bounds`.
/// Returns true if any wall was hit.
pub fn constrain_to_bounds(ball: &mut Ball, bounds: UVec2, damping: &WallDamping) -> bool {
    let size = bounds.as_vec2();
    let half = ball.radius() * 0.5;
    let mut hit = false;

    // Bottom
    if ball.position.y >= size.y - half && ball.velocity.y > 0.0 {
        ball.velocity.y *= -damping.floor();
        ball.position.y = size.y - half;
        hit = true;
    }
    // Top
    if ball.position.y <= half && ball.velocity.y < 0.0 {
        ball.velocity.y = 0.0;
        ball.position.y = half;
        hit = true;
    }
    // Left
    if ball.position.x <= half && ball.velocity.x < 0.0 {
        ball.velocity.x *= -damping.side();
        ball.position.x = half;
        hit = true;
    }
    // Right
    if ball.position.x >= size.x - half && ball.velocity.x > 0.0 {
        ball.velocity.x *= -damping.side();
        ball.position.x = size.x - half;
        hit = true;
    }

    hit
}

/// Integrate then constrain; the second half of a simulation step for one ball.
pub fn advance(ball: &mut Ball, bounds: UVec2, damping: &WallDamping) -> bool {
    integrate(ball);
    constrain_to_bounds(ball, bounds, damping)
}
