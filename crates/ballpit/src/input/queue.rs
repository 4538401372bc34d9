/// Input events the sandbox understands.
/// Coordinates are world coordinates (the host maps window pixels 1:1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A click/touch began at (x, y).
    PointerDown { x: f32, y: f32 },
    /// A click/touch ended at (x, y).
    PointerUp { x: f32, y: f32 },
    /// The cursor moved to (x, y). Drags balls only while the pointer is held.
    PointerMove { x: f32, y: f32 },
    /// The host window changed size.
    Resize { width: u32, height: u32 },
    /// The "Add Ball" control was used.
    AddBall,
    /// Speed slider of the ball at `index` (ball order).
    SetBallSpeed { index: usize, speed: f32 },
    /// Position inspector of the ball at `index`.
    SetBallPosition { index: usize, x: f32, y: f32 },
    /// Velocity inspector of the ball at `index`.
    SetBallVelocity { index: usize, x: f32, y: f32 },
    /// Vector slider of the force at `index`.
    SetForce { index: usize, x: f32, y: f32 },
    /// Coefficient slider of the force at `index`.
    SetFriction { index: usize, x: f32, y: f32 },
}

/// A queue of input events.
/// The host pushes events as they arrive; the runner drains them once per frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
