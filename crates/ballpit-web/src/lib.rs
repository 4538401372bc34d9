//! WASM bridge for the ball sandbox.
//!
//! Exports free functions for the browser host: lifecycle, per-frame tick,
//! pointer/resize/control input, per-ball and per-force inspectors, and
//! pointer accessors into the ball instance buffer (`BallInstance`, 8 floats
//! per ball).

pub mod runner;

pub use runner::SandboxRunner;

use std::cell::RefCell;

use ballpit::{InputEvent, SandboxConfig};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<SandboxRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut SandboxRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Sandbox not initialized. Call sandbox_init() first.");
        f(runner)
    })
}

fn install(runner: SandboxRunner) {
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
}

fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

#[wasm_bindgen]
pub fn sandbox_init(width: u32, height: u32) {
    init_logging();
    install(SandboxRunner::new(width, height));
    log::info!("ballpit: initialized {}x{}", width, height);
}

/// Initialize with a JSON `SandboxConfig`. Fails without touching any
/// existing sandbox if the config is invalid.
#[wasm_bindgen]
pub fn sandbox_init_with_config(width: u32, height: u32, json: &str) -> Result<(), JsValue> {
    init_logging();
    let config = SandboxConfig::from_json(json).map_err(|e| {
        log::error!("{}", e);
        JsValue::from_str(&e.to_string())
    })?;
    install(SandboxRunner::with_config(width, height, config));
    log::info!("ballpit: initialized {}x{} from config", width, height);
    Ok(())
}

/// Drop the sandbox and everything it holds.
#[wasm_bindgen]
pub fn sandbox_destroy() {
    RUNNER.with(|cell| {
        cell.borrow_mut().take();
    });
    log::info!("ballpit: destroyed");
}

#[wasm_bindgen]
pub fn sandbox_tick() {
    with_runner(|r| r.tick());
}

// ---- Input ----

#[wasm_bindgen]
pub fn sandbox_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn sandbox_pointer_up(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
}

#[wasm_bindgen]
pub fn sandbox_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn sandbox_resize(width: u32, height: u32) {
    with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
}

#[wasm_bindgen]
pub fn sandbox_add_ball() {
    with_runner(|r| r.push_input(InputEvent::AddBall));
}

#[wasm_bindgen]
pub fn sandbox_set_ball_speed(index: u32, speed: f32) {
    with_runner(|r| {
        r.push_input(InputEvent::SetBallSpeed {
            index: index as usize,
            speed,
        })
    });
}

#[wasm_bindgen]
pub fn sandbox_set_ball_position(index: u32, x: f32, y: f32) {
    with_runner(|r| {
        r.push_input(InputEvent::SetBallPosition {
            index: index as usize,
            x,
            y,
        })
    });
}

#[wasm_bindgen]
pub fn sandbox_set_ball_velocity(index: u32, x: f32, y: f32) {
    with_runner(|r| {
        r.push_input(InputEvent::SetBallVelocity {
            index: index as usize,
            x,
            y,
        })
    });
}

#[wasm_bindgen]
pub fn sandbox_set_force(index: u32, x: f32, y: f32) {
    with_runner(|r| {
        r.push_input(InputEvent::SetForce {
            index: index as usize,
            x,
            y,
        })
    });
}

#[wasm_bindgen]
pub fn sandbox_set_friction(index: u32, x: f32, y: f32) {
    with_runner(|r| {
        r.push_input(InputEvent::SetFriction {
            index: index as usize,
            x,
            y,
        })
    });
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_ball_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr())
}

#[wasm_bindgen]
pub fn get_ball_count() -> u32 {
    with_runner(|r| r.ball_count())
}

#[wasm_bindgen]
pub fn get_force_count() -> u32 {
    with_runner(|r| r.force_count())
}

/// Name of the force at `index` for the controls panel.
#[wasm_bindgen]
pub fn get_force_name(index: u32) -> String {
    with_runner(|r| {
        r.simulation()
            .forces()
            .get(index as usize)
            .map(|f| f.name().to_string())
            .unwrap_or_default()
    })
}

#[wasm_bindgen]
pub fn get_collision_count() -> u32 {
    with_runner(|r| r.collision_count())
}

#[wasm_bindgen]
pub fn get_world_width() -> f32 {
    with_runner(|r| r.world_width())
}

#[wasm_bindgen]
pub fn get_world_height() -> f32 {
    with_runner(|r| r.world_height())
}

// ---- Inspector read-back (0 for an out-of-range index) ----

#[wasm_bindgen]
pub fn get_ball_position_x(index: u32) -> f32 {
    with_runner(|r| r.ball_position(index as usize).map_or(0.0, |p| p.x))
}

#[wasm_bindgen]
pub fn get_ball_position_y(index: u32) -> f32 {
    with_runner(|r| r.ball_position(index as usize).map_or(0.0, |p| p.y))
}

#[wasm_bindgen]
pub fn get_ball_velocity_x(index: u32) -> f32 {
    with_runner(|r| r.ball_velocity(index as usize).map_or(0.0, |v| v.x))
}

#[wasm_bindgen]
pub fn get_ball_velocity_y(index: u32) -> f32 {
    with_runner(|r| r.ball_velocity(index as usize).map_or(0.0, |v| v.y))
}

#[wasm_bindgen]
pub fn get_ball_speed(index: u32) -> f32 {
    with_runner(|r| r.ball_speed(index as usize).unwrap_or(0.0))
}

#[wasm_bindgen]
pub fn get_force_vector_x(index: u32) -> f32 {
    with_runner(|r| r.force_vector(index as usize).map_or(0.0, |v| v.x))
}

#[wasm_bindgen]
pub fn get_force_vector_y(index: u32) -> f32 {
    with_runner(|r| r.force_vector(index as usize).map_or(0.0, |v| v.y))
}

#[wasm_bindgen]
pub fn get_force_friction_x(index: u32) -> f32 {
    with_runner(|r| r.force_friction(index as usize).map_or(0.0, |f| f.x))
}

#[wasm_bindgen]
pub fn get_force_friction_y(index: u32) -> f32 {
    with_runner(|r| r.force_friction(index as usize).map_or(0.0, |f| f.y))
}
