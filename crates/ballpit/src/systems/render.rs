use glam::Vec2;

use crate::api::types::BallId;
use crate::components::color::BallColor;
use crate::core::simulation::Simulation;
use crate::renderer::instance::{BallBuffer, BallInstance};

/// What a host needs to draw one ball.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallView {
    pub id: BallId,
    pub position: Vec2,
    pub radius: f32,
    pub color: BallColor,
}

/// Rebuild `buffer` from the simulation's balls and their paired colors.
pub fn build_ball_buffer(sim: &Simulation, buffer: &mut BallBuffer) {
    buffer.clear();
    for (ball, color) in sim.balls().iter().zip(sim.colors()) {
        buffer.push(BallInstance {
            x: ball.position.x,
            y: ball.position.y,
            radius: ball.radius(),
            r: color.r,
            g: color.g,
            b: color.b,
            gravity: if ball.gravity_enabled { 1.0 } else { 0.0 },
            _pad: 0.0,
        });
    }
}
