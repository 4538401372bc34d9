use ballpit::{
    build_ball_buffer, BallBuffer, InputEvent, InputQueue, Interaction, SandboxConfig, Simulation,
};
use glam::{UVec2, Vec2};

/// Wires the sandbox into a browser frame loop.
///
/// The exported free functions in `lib.rs` keep one runner in a
/// `thread_local!`, because wasm-bindgen cannot export the simulation
/// directly. Each `tick` drains queued input, applies it, advances the
/// simulation by exactly one step and rebuilds the ball buffer that the
/// TypeScript renderer reads from linear memory.
pub struct SandboxRunner {
    sim: Simulation,
    input: InputQueue,
    interaction: Interaction,
    buffer: BallBuffer,
    last_collisions: u32,
}

impl SandboxRunner {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_config(width, height, SandboxConfig::default())
    }

    pub fn with_config(width: u32, height: u32, config: SandboxConfig) -> Self {
        if width == 0 || height == 0 {
            log::warn!("Canvas is {}x{}; using 1px minimum", width, height);
        }
        let bounds = UVec2::new(width.max(1), height.max(1));
        let sim = Simulation::with_config(bounds, config);
        let mut buffer = BallBuffer::new();
        build_ball_buffer(&sim, &mut buffer);
        Self {
            sim,
            input: InputQueue::new(),
            interaction: Interaction::new(),
            buffer,
            last_collisions: 0,
        }
    }

    /// Queue an input event for the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: apply input, step once, rebuild the ball buffer.
    pub fn tick(&mut self) {
        if !self.input.is_empty() {
            let pending = self.input.len();
            let report = self.interaction.apply_all(&mut self.sim, self.input.drain());
            log::debug!("{} input events applied: {:?}", pending, report);
        }

        let report = self.sim.step();
        self.last_collisions = report.collisions.len() as u32;

        build_ball_buffer(&self.sim, &mut self.buffer);
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    // ---- Pointer accessors for linear-memory reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.buffer.instances_ptr()
    }

    pub fn ball_count(&self) -> u32 {
        self.buffer.instance_count() as u32
    }

    pub fn force_count(&self) -> u32 {
        self.sim.forces().len() as u32
    }

    pub fn collision_count(&self) -> u32 {
        self.last_collisions
    }

    pub fn world_width(&self) -> f32 {
        self.sim.bounds().x as f32
    }

    pub fn world_height(&self) -> f32 {
        self.sim.bounds().y as f32
    }

    // ---- Inspector read-back, `None` for an out-of-range index ----

    pub fn ball_position(&self, index: usize) -> Option<Vec2> {
        self.sim.balls().get(index).map(|b| b.position)
    }

    pub fn ball_velocity(&self, index: usize) -> Option<Vec2> {
        self.sim.balls().get(index).map(|b| b.velocity)
    }

    pub fn ball_speed(&self, index: usize) -> Option<f32> {
        self.sim.balls().get(index).map(|b| b.base_speed)
    }

    pub fn force_vector(&self, index: usize) -> Option<Vec2> {
        self.sim.forces().get(index).map(|f| f.vector)
    }

    pub fn force_friction(&self, index: usize) -> Option<Vec2> {
        self.sim.forces().get(index).map(|f| f.friction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_runner_exposes_seeded_balls() {
        let runner = SandboxRunner::new(800, 600);
        assert_eq!(runner.ball_count(), 2);
        assert_eq!(runner.force_count(), 3);
        assert_eq!(runner.world_width(), 800.0);
        assert_eq!(runner.world_height(), 600.0);
    }

    #[test]
    fn tick_applies_input_before_stepping() {
        let mut runner = SandboxRunner::new(800, 600);
        runner.push_input(InputEvent::AddBall);
        runner.push_input(InputEvent::Resize {
            width: 1000,
            height: 700,
        });
        runner.tick();
        assert_eq!(runner.ball_count(), 3);
        assert_eq!(runner.simulation().tick(), 1);
        assert_eq!(runner.world_width(), 1000.0);
    }

    #[test]
    fn held_ball_stays_put_across_ticks() {
        let mut runner = SandboxRunner::new(800, 600);
        let start = runner.simulation().balls()[0].position;
        runner.push_input(InputEvent::PointerDown {
            x: start.x,
            y: start.y,
        });
        for _ in 0..5 {
            runner.tick();
        }
        let ball = &runner.simulation().balls()[0];
        assert!(!ball.gravity_enabled);
        assert_eq!(ball.position, start);
    }

    #[test]
    fn zero_sized_canvas_is_clamped() {
        let runner = SandboxRunner::new(0, 600);
        assert_eq!(runner.world_width(), 1.0);
    }

    #[test]
    fn inspector_edits_read_back_after_tick() {
        let mut runner = SandboxRunner::new(800, 600);
        runner.push_input(InputEvent::SetBallPosition {
            index: 1,
            x: 500.0,
            y: 120.0,
        });
        runner.push_input(InputEvent::SetBallVelocity {
            index: 1,
            x: 2.0,
            y: 0.0,
        });
        runner.push_input(InputEvent::SetBallSpeed {
            index: 1,
            speed: 7.5,
        });
        runner.push_input(InputEvent::SetForce {
            index: 1,
            x: 0.25,
            y: 0.0,
        });
        runner.push_input(InputEvent::SetFriction {
            index: 2,
            x: 0.5,
            y: 0.0,
        });
        runner.tick();

        // Gravity 0.5, wind 0.25, then friction halves x: (2 + 0.25) * 0.5.
        assert_eq!(runner.ball_velocity(1), Some(Vec2::new(1.125, 0.5)));
        assert_eq!(runner.ball_position(1), Some(Vec2::new(501.125, 120.5)));
        assert_eq!(runner.ball_speed(1), Some(7.5));
        assert_eq!(runner.force_vector(1), Some(Vec2::new(0.25, 0.0)));
        assert_eq!(runner.force_friction(2), Some(Vec2::new(0.5, 0.0)));
        assert_eq!(runner.ball_velocity(9), None);
        assert_eq!(runner.force_vector(3), None);
    }
}
