use glam::Vec2;

use crate::api::config::DEFAULT_BASE_SPEED;
use crate::api::types::BallId;

/// A simulated circular body.
///
/// Plain state: the simulation systems and the host mutate the public fields
/// directly. Only `radius` is fixed after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    /// Stable handle, assigned by the owning `Simulation`.
    pub id: BallId,
    /// Center in world space.
    pub position: Vec2,
    /// Displacement per step.
    pub velocity: Vec2,
    radius: f32,
    /// Speed given to the ball when it is released after a drag.
    pub base_speed: f32,
    /// When false the Gravity force skips this ball.
    pub gravity_enabled: bool,
}

impl Ball {
    /// Create a resting ball. `radius` must be positive.
    pub fn new(position: Vec2, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "ball radius must be positive, got {}", radius);
        Self {
            id: BallId(0),
            position,
            velocity: Vec2::ZERO,
            radius,
            base_speed: DEFAULT_BASE_SPEED,
            gravity_enabled: true,
        }
    }

    // -- Builder pattern --

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_base_speed(mut self, speed: f32) -> Self {
        self.base_speed = speed;
        self
    }

    pub fn with_gravity(mut self, enabled: bool) -> Self {
        self.gravity_enabled = enabled;
        self
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Whether `point` lies strictly inside the ball's circle.
    pub fn contains(&self, point: Vec2) -> bool {
        self.position.distance(point) < self.radius
    }
}
