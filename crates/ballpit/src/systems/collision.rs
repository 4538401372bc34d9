//! Pairwise ball-ball collision resolution.
//!
//! Brute-force over every unordered pair, which is fine for the tens of balls
//! a sandbox holds. Balls have unit mass, so the elastic impulse reduces to
//! the relative velocity projected onto the contact normal. Overlap is not
//! corrected: balls may stay interpenetrating after the impulse.

use crate::api::types::CollisionPair;
use crate::components::ball::Ball;

/// Mass assumed for every ball.
pub const BALL_MASS: f32 = 1.0;

/// Resolve every overlapping pair `(i, j), i < j` in index order, appending
/// the resolved pairs to `collisions`. Later pairs see the velocities written
/// by earlier ones.
///
/// Pairs whose centers coincide have no contact normal and are skipped.
pub fn resolve_collisions(balls: &mut [Ball], collisions: &mut Vec<CollisionPair>) {
    let count = balls.len();
    for i in 0..count {
        for j in (i + 1)..count {
            // `left` ends at j, so `left[i]` and `right[0]` are balls i and j.
            let (left, right) = balls.split_at_mut(j);
            if resolve_pair(&mut left[i], &mut right[0]) {
                collisions.push(CollisionPair {
                    a: left[i].id,
                    b: right[0].id,
                });
            }
        }
    }
}

/// Apply the elastic impulse to one pair. Returns true if the pair overlapped
/// and an impulse was applied.
pub fn resolve_pair(a: &mut Ball, b: &mut Ball) -> bool {
    let distance = a.position.distance(b.position);
    if distance >= a.radius() + b.radius() {
        return false;
    }

    let normal = match (b.position - a.position).try_normalize() {
        Some(n) => n,
        None => return false,
    };

    let relative_velocity = b.velocity - a.velocity;
    let impulse =
        2.0 * relative_velocity.dot(normal) / (1.0 / BALL_MASS + 1.0 / BALL_MASS);

    a.velocity += impulse * normal;
    b.velocity -= impulse * normal;
    true
}
