//! Pointer and control handling for the sandbox.
//!
//! Pressing a ball holds it (gravity off, velocity zeroed), moving the held
//! pointer drags every ball under the cursor, and releasing launches the ball
//! toward the cursor at its base speed. Every ball whose circle contains the
//! cursor is affected, not just the topmost one.

use std::ops::RangeInclusive;

use glam::{UVec2, Vec2};

use crate::core::simulation::Simulation;
use crate::input::queue::InputEvent;

/// Range of the per-ball speed slider.
pub const SPEED_RANGE: RangeInclusive<f32> = 0.0..=10.0;
/// Range of each component of the force vector slider.
pub const FORCE_RANGE: RangeInclusive<f32> = 0.0..=1.0;
/// Range of each component of the friction coefficient slider.
pub const FRICTION_RANGE: RangeInclusive<f32> = 0.0..=1.0;

fn clamp_to(value: f32, range: &RangeInclusive<f32>) -> f32 {
    value.clamp(*range.start(), *range.end())
}

/// Counts of what a batch of events did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionReport {
    pub grabbed: usize,
    pub released: usize,
    pub dragged: usize,
    pub added: usize,
    pub resized: bool,
}

/// Hold every ball under `point`: gravity off, velocity zeroed.
pub fn press_at(sim: &mut Simulation, point: Vec2) -> usize {
    let mut count = 0;
    for ball in sim.balls_mut().iter_mut().filter(|b| b.contains(point)) {
        ball.gravity_enabled = false;
        ball.velocity = Vec2::ZERO;
        count += 1;
    }
    count
}

/// Let go of every ball under `point`: gravity back on, and launched toward
/// the cursor at its base speed. The launch is skipped when the cursor sits
/// exactly on the center, where no direction exists.
pub fn release_at(sim: &mut Simulation, point: Vec2) -> usize {
    let mut count = 0;
    for ball in sim.balls_mut().iter_mut().filter(|b| b.contains(point)) {
        ball.gravity_enabled = true;
        if let Some(direction) = (point - ball.position).try_normalize() {
            ball.velocity = direction * ball.base_speed;
        }
        count += 1;
    }
    count
}

/// Move every ball under `point` onto it, bypassing integration.
pub fn drag_to(sim: &mut Simulation, point: Vec2) -> usize {
    let mut count = 0;
    for ball in sim.balls_mut().iter_mut().filter(|b| b.contains(point)) {
        ball.position = point;
        count += 1;
    }
    count
}

/// Tracks pointer state between events and applies input to a simulation.
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    pointer_held: bool,
    cursor: Vec2,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_held(&self) -> bool {
        self.pointer_held
    }

    /// Last known cursor position.
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Apply a batch of events in order.
    pub fn apply_all(
        &mut self,
        sim: &mut Simulation,
        events: impl IntoIterator<Item = InputEvent>,
    ) -> InteractionReport {
        let mut report = InteractionReport::default();
        for event in events {
            self.apply(sim, event, &mut report);
        }
        report
    }

    /// Apply one event, accumulating its effect into `report`.
    pub fn apply(
        &mut self,
        sim: &mut Simulation,
        event: InputEvent,
        report: &mut InteractionReport,
    ) {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.pointer_held = true;
                self.cursor = Vec2::new(x, y);
                report.grabbed += press_at(sim, self.cursor);
            }
            InputEvent::PointerUp { x, y } => {
                self.pointer_held = false;
                self.cursor = Vec2::new(x, y);
                report.released += release_at(sim, self.cursor);
            }
            InputEvent::PointerMove { x, y } => {
                self.cursor = Vec2::new(x, y);
                if self.pointer_held {
                    report.dragged += drag_to(sim, self.cursor);
                }
            }
            InputEvent::Resize { width, height } => {
                if width == 0 || height == 0 {
                    log::warn!("Ignoring resize to {}x{}", width, height);
                } else {
                    sim.set_bounds(UVec2::new(width, height));
                    report.resized = true;
                }
            }
            InputEvent::AddBall => {
                let id = sim.add_random_ball();
                log::info!("Ball {:?} added ({} total)", id, sim.ball_count());
                report.added += 1;
            }
            InputEvent::SetBallSpeed { index, speed } => match sim.balls_mut().get_mut(index) {
                Some(ball) => ball.base_speed = clamp_to(speed, &SPEED_RANGE),
                None => log::warn!("No ball at index {}", index),
            },
            InputEvent::SetBallPosition { index, x, y } => match sim.balls_mut().get_mut(index) {
                Some(ball) => ball.position = Vec2::new(x, y),
                None => log::warn!("No ball at index {}", index),
            },
            InputEvent::SetBallVelocity { index, x, y } => match sim.balls_mut().get_mut(index) {
                Some(ball) => ball.velocity = Vec2::new(x, y),
                None => log::warn!("No ball at index {}", index),
            },
            InputEvent::SetForce { index, x, y } => match sim.force_mut(index) {
                Some(force) => {
                    force.vector =
                        Vec2::new(clamp_to(x, &FORCE_RANGE), clamp_to(y, &FORCE_RANGE));
                }
                None => log::warn!("No force at index {}", index),
            },
            InputEvent::SetFriction { index, x, y } => match sim.force_mut(index) {
                Some(force) => {
                    force.friction =
                        Vec2::new(clamp_to(x, &FRICTION_RANGE), clamp_to(y, &FRICTION_RANGE));
                }
                None => log::warn!("No force at index {}", index),
            },
        }
    }
}
