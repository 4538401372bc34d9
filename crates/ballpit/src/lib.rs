pub mod api;
pub mod components;
pub mod core;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::{ForceLayout, SandboxConfig, WallDamping, DEFAULT_WALL_DAMPING};
pub use api::error::ConfigError;
pub use api::types::{BallId, CollisionPair, StepReport};
pub use components::ball::Ball;
pub use components::color::BallColor;
pub use components::force::{Force, ForceKind, CANONICAL_FORCE_COUNT};
pub use crate::core::rng::Rng;
pub use crate::core::simulation::Simulation;
pub use input::interaction::{Interaction, InteractionReport};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::instance::{BallBuffer, BallInstance};
pub use systems::render::{build_ball_buffer, BallView};
