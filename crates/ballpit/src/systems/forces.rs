use crate::components::ball::Ball;
use crate::components::force::Force;

/// Accumulate every force into the ball's velocity, in force order.
///
/// For each force: a Gravity force is skipped when the ball has gravity
/// disabled; otherwise the force vector is added and then
/// `velocity * force.friction` is subtracted. Damping runs for every force
/// kind, so a non-zero coefficient on any force takes effect.
pub fn apply_forces(ball: &mut Ball, forces: &[Force]) {
    for force in forces {
        if force.is_gravity() && !ball.gravity_enabled {
            continue;
        }
        ball.velocity += force.vector;
        ball.velocity -= ball.velocity * force.friction;
    }
}
