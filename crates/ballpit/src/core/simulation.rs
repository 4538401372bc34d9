use glam::{UVec2, Vec2};

use crate::api::config::{ForceLayout, SandboxConfig};
use crate::api::types::{BallId, StepReport};
use crate::components::ball::Ball;
use crate::components::color::BallColor;
use crate::components::force::Force;
use crate::core::rng::Rng;
use crate::systems::collision::resolve_collisions;
use crate::systems::forces::apply_forces;
use crate::systems::motion::advance;
use crate::systems::render::BallView;

/// The ball sandbox: owns every ball, its paired color, the world forces and
/// the world bounds.
///
/// `colors[i]` always belongs to `balls[i]`. Balls are never removed, so
/// indices stay stable for the lifetime of the simulation; hosts should still
/// address balls by `BallId`.
pub struct Simulation {
    balls: Vec<Ball>,
    colors: Vec<BallColor>,
    forces: Vec<Force>,
    bounds: UVec2,
    config: SandboxConfig,
    rng: Rng,
    next_id: u32,
    tick: u64,
}

impl Simulation {
    /// Create a sandbox with the default config: two seeded balls and one
    /// canonical force triple.
    pub fn new(bounds: UVec2) -> Self {
        Self::with_config(bounds, SandboxConfig::default())
    }

    /// Create a sandbox and seed it according to `config`.
    ///
    /// One canonical force triple is created for the world. Seeded balls sit
    /// at 25% and 75% of the width, half-way down, and share that triple;
    /// only balls added later through `add_ball` bring their own under
    /// `ForceLayout::PerBall`.
    pub fn with_config(bounds: UVec2, config: SandboxConfig) -> Self {
        let mut sim = Self::empty(bounds, config);
        sim.push_canonical_forces();

        if sim.config.seed_balls {
            let size = bounds.as_vec2();
            sim.seed_ball(Vec2::new(size.x * 0.25, size.y * 0.5));
            sim.seed_ball(Vec2::new(size.x * 0.75, size.y * 0.5));
        }

        log::info!(
            "Simulation created: {}x{}, {} balls, {} forces ({:?})",
            bounds.x,
            bounds.y,
            sim.balls.len(),
            sim.forces.len(),
            sim.config.force_layout
        );
        sim
    }

    /// A sandbox with no balls and no forces, for scripted scenarios.
    pub fn empty(bounds: UVec2, config: SandboxConfig) -> Self {
        debug_assert!(
            bounds.x > 0 && bounds.y > 0,
            "bounds must be positive: {:?}",
            bounds
        );
        debug_assert!(
            config.validate().is_ok(),
            "invalid sandbox config: {:?}",
            config
        );
        let rng = Rng::new(config.seed);
        Self {
            balls: Vec::with_capacity(32),
            colors: Vec::with_capacity(32),
            forces: Vec::new(),
            bounds,
            config,
            rng,
            next_id: 1,
            tick: 0,
        }
    }

    fn next_id(&mut self) -> BallId {
        let id = BallId(self.next_id);
        self.next_id += 1;
        id
    }

    fn push_canonical_forces(&mut self) {
        self.forces.extend(Force::canonical_set(
            self.config.gravity,
            self.config.wind,
            self.config.friction,
        ));
    }

    // -- Mutation --

    /// Add a ball at `position` with the configured launch speed.
    pub fn add_ball(&mut self, position: Vec2) -> BallId {
        let speed = self.config.base_speed;
        self.add_ball_with_speed(position, speed)
    }

    /// Add a ball with a random radius and color. Under `ForceLayout::PerBall`
    /// this also appends a fresh Gravity/Wind/Friction triple.
    pub fn add_ball_with_speed(&mut self, position: Vec2, speed: f32) -> BallId {
        let (ball, color) = self.draw_ball(position, speed);

        if self.config.force_layout == ForceLayout::PerBall {
            self.push_canonical_forces();
        }

        let radius = ball.radius();
        let id = self.insert_ball(ball, color);
        log::debug!(
            "Ball {:?} added at ({:.1}, {:.1}), radius {}",
            id,
            position.x,
            position.y,
            radius
        );
        id
    }

    fn seed_ball(&mut self, position: Vec2) -> BallId {
        let (ball, color) = self.draw_ball(position, self.config.base_speed);
        self.insert_ball(ball, color)
    }

    /// Random integer radius from the configured range, then a random color.
    fn draw_ball(&mut self, position: Vec2, speed: f32) -> (Ball, BallColor) {
        let radius = self
            .rng
            .int_in(self.config.radius_min, self.config.radius_max) as f32;
        let color = BallColor::random(&mut self.rng);
        (Ball::new(position, radius).with_base_speed(speed), color)
    }

    /// Add a ball at a uniformly random point inside the bounds.
    pub fn add_random_ball(&mut self) -> BallId {
        let size = self.bounds.as_vec2();
        let position = Vec2::new(
            self.rng.float_in(0.0, size.x),
            self.rng.float_in(0.0, size.y),
        );
        self.add_ball(position)
    }

    /// Append a caller-built ball with its color. Forces are left untouched.
    /// The ball's `id` is overwritten with a fresh handle.
    pub fn insert_ball(&mut self, mut ball: Ball, color: BallColor) -> BallId {
        let id = self.next_id();
        ball.id = id;
        self.balls.push(ball);
        self.colors.push(color);
        id
    }

    /// Append a world force. Returns its index in `forces()`.
    pub fn add_force(&mut self, force: Force) -> usize {
        log::debug!("Force {} added: {:?}", force.name(), force.vector);
        self.forces.push(force);
        self.forces.len() - 1
    }

    /// Resize the world. Balls outside the new bounds are pulled back by the
    /// wall checks of the next step.
    pub fn set_bounds(&mut self, bounds: UVec2) {
        debug_assert!(
            bounds.x > 0 && bounds.y > 0,
            "bounds must be positive: {:?}",
            bounds
        );
        log::debug!("Bounds set to {}x{}", bounds.x, bounds.y);
        self.bounds = bounds;
    }

    // -- Per-frame --

    /// Advance the world by one tick: collisions, forces, integration, walls.
    pub fn step(&mut self) -> StepReport {
        let mut collisions = Vec::new();
        resolve_collisions(&mut self.balls, &mut collisions);

        let damping = self.config.wall_damping;
        for ball in &mut self.balls {
            apply_forces(ball, &self.forces);
            advance(ball, self.bounds, &damping);
        }

        self.tick += 1;
        if !collisions.is_empty() {
            log::trace!("Tick {}: {} collisions", self.tick, collisions.len());
        }
        StepReport {
            tick: self.tick,
            collisions,
        }
    }

    /// Read-only snapshot of every ball for drawing, in ball order.
    pub fn render(&self) -> Vec<BallView> {
        self.balls
            .iter()
            .zip(&self.colors)
            .map(|(ball, color)| BallView {
                id: ball.id,
                position: ball.position,
                radius: ball.radius(),
                color: *color,
            })
            .collect()
    }

    // -- Queries --

    pub fn ball(&self, id: BallId) -> Option<&Ball> {
        self.balls.iter().find(|b| b.id == id)
    }

    pub fn ball_mut(&mut self, id: BallId) -> Option<&mut Ball> {
        self.balls.iter_mut().find(|b| b.id == id)
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    /// Mutable access for hosts and input handling. The slice cannot grow
    /// or shrink, so color pairing is preserved.
    pub fn balls_mut(&mut self) -> &mut [Ball] {
        &mut self.balls
    }

    pub fn colors(&self) -> &[BallColor] {
        &self.colors
    }

    /// Color paired with the ball `id`.
    pub fn color_of(&self, id: BallId) -> Option<BallColor> {
        let idx = self.balls.iter().position(|b| b.id == id)?;
        self.colors.get(idx).copied()
    }

    pub fn forces(&self) -> &[Force] {
        &self.forces
    }

    pub fn forces_mut(&mut self) -> &mut [Force] {
        &mut self.forces
    }

    pub fn force_mut(&mut self, index: usize) -> Option<&mut Force> {
        self.forces.get_mut(index)
    }

    pub fn bounds(&self) -> UVec2 {
        self.bounds
    }

    pub fn config(&self) -> &SandboxConfig {
        &self.config
    }

    /// Number of completed steps.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn ball_count(&self) -> usize {
        self.balls.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::force::CANONICAL_FORCE_COUNT;

    const BOUNDS: UVec2 = UVec2::new(800, 600);

    #[test]
    fn new_seeds_two_balls_symmetrically() {
        let sim = Simulation::new(BOUNDS);
        assert_eq!(sim.ball_count(), 2);
        assert_eq!(sim.balls()[0].position, Vec2::new(200.0, 300.0));
        assert_eq!(sim.balls()[1].position, Vec2::new(600.0, 300.0));
        assert_eq!(sim.colors().len(), 2);
        assert_eq!(sim.forces().len(), CANONICAL_FORCE_COUNT);
        for ball in sim.balls() {
            assert!((ball.base_speed - 5.0).abs() < 1e-6);
            assert!(ball.gravity_enabled);
        }
    }

    #[test]
    fn radii_drawn_from_configured_range() {
        let mut sim = Simulation::new(BOUNDS);
        for _ in 0..50 {
            sim.add_random_ball();
        }
        for ball in sim.balls() {
            let r = ball.radius();
            assert!(r >= 16.0 && r < 64.0, "radius out of range: {}", r);
            assert_eq!(r, r.trunc(), "radius should be a whole number");
        }
    }

    #[test]
    fn add_ball_keeps_collections_paired() {
        let mut sim = Simulation::new(BOUNDS);
        for k in 1..=5 {
            sim.add_ball(Vec2::new(100.0, 100.0));
            assert_eq!(sim.ball_count(), 2 + k);
            assert_eq!(sim.colors().len(), sim.ball_count());
            assert_eq!(
                sim.forces().len() / CANONICAL_FORCE_COUNT,
                sim.ball_count() - 1
            );
        }
    }

    #[test]
    fn shared_layout_keeps_one_force_set() {
        let config = SandboxConfig::default().with_force_layout(ForceLayout::Shared);
        let mut sim = Simulation::with_config(BOUNDS, config);
        sim.add_ball(Vec2::new(100.0, 100.0));
        assert_eq!(sim.ball_count(), 3);
        assert_eq!(sim.forces().len(), CANONICAL_FORCE_COUNT);
    }

    #[test]
    fn per_ball_layout_multiplies_gravity() {
        let config = SandboxConfig::default().without_seed_balls();
        let mut sim = Simulation::with_config(BOUNDS, config);
        assert_eq!(sim.forces().len(), CANONICAL_FORCE_COUNT);
        let id = sim.add_ball(Vec2::new(400.0, 300.0));
        sim.add_ball(Vec2::new(100.0, 100.0));
        sim.step();
        // World triple plus one per added ball: gravity applied three times.
        assert_eq!(sim.ball(id).unwrap().velocity, Vec2::new(0.0, 1.5));
    }

    #[test]
    fn fresh_sandbox_pulls_with_single_gravity() {
        let mut sim = Simulation::new(BOUNDS);
        let before = sim.balls()[0].velocity;
        sim.step();
        let after = sim.balls()[0].velocity;
        assert_eq!(after.y - before.y, 0.5);
        assert_eq!(after.x, before.x);
    }

    #[test]
    fn ids_are_unique_and_stable() {
        let mut sim = Simulation::new(BOUNDS);
        let a = sim.add_ball(Vec2::new(10.0, 10.0));
        let b = sim.add_ball(Vec2::new(20.0, 20.0));
        assert_ne!(a, b);
        sim.step();
        assert!(sim.ball(a).is_some());
        assert_eq!(sim.color_of(b), sim.colors().last().copied());
    }

    #[test]
    fn seeded_simulations_match() {
        let mut a = Simulation::new(BOUNDS);
        let mut b = Simulation::new(BOUNDS);
        a.add_random_ball();
        b.add_random_ball();
        for _ in 0..30 {
            a.step();
            b.step();
        }
        assert_eq!(a.balls(), b.balls());
        assert_eq!(a.colors(), b.colors());
    }

    #[test]
    fn set_bounds_does_not_move_balls_until_step() {
        let config = SandboxConfig::default().without_seed_balls();
        let mut sim = Simulation::with_config(BOUNDS, config);
        let id = sim.insert_ball(
            Ball::new(Vec2::new(700.0, 300.0), 20.0).with_velocity(Vec2::new(1.0, 0.0)),
            BallColor::default(),
        );
        sim.set_bounds(UVec2::new(400, 600));
        assert_eq!(sim.ball(id).unwrap().position.x, 700.0);
        sim.step();
        assert_eq!(sim.ball(id).unwrap().position.x, 390.0);
    }

    #[test]
    fn render_pairs_colors_with_balls() {
        let mut sim = Simulation::empty(BOUNDS, SandboxConfig::default());
        let red = BallColor::new(1.0, 0.0, 0.0);
        let id = sim.insert_ball(Ball::new(Vec2::new(50.0, 60.0), 12.0), red);
        let views = sim.render();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].id, id);
        assert_eq!(views[0].position, Vec2::new(50.0, 60.0));
        assert_eq!(views[0].radius, 12.0);
        assert_eq!(views[0].color, red);
    }

    #[test]
    fn step_reports_tick_and_collisions() {
        let mut sim = Simulation::empty(BOUNDS, SandboxConfig::default());
        let a = sim.insert_ball(
            Ball::new(Vec2::new(100.0, 300.0), 20.0).with_velocity(Vec2::new(1.0, 0.0)),
            BallColor::default(),
        );
        let b = sim.insert_ball(
            Ball::new(Vec2::new(130.0, 300.0), 20.0),
            BallColor::default(),
        );
        let report = sim.step();
        assert_eq!(report.tick, 1);
        assert_eq!(report.collisions.len(), 1);
        assert_eq!(report.collisions[0].a, a);
        assert_eq!(report.collisions[0].b, b);
        assert_eq!(sim.tick(), 1);
    }
}
