use bytemuck::{Pod, Zeroable};

/// Per-ball render data, laid out for zero-copy reads by a JS or GPU circle
/// renderer. 8 floats = 32 bytes per instance.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BallInstance {
    /// X position in world space.
    pub x: f32,
    /// Y position in world space.
    pub y: f32,
    /// Circle radius in world units.
    pub radius: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// 1.0 while gravity applies to the ball, 0.0 while it is held.
    pub gravity: f32,
    pub _pad: f32,
}

impl BallInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Reusable buffer of ball instances, rebuilt every frame.
pub struct BallBuffer {
    instances: Vec<BallInstance>,
}

impl BallBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: BallInstance) {
        self.instances.push(instance);
    }

    pub fn instances(&self) -> &[BallInstance] {
        &self.instances
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Flat float view of the instances.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Raw pointer to instance data for shared-memory reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for BallBuffer {
    fn default() -> Self {
        Self::new()
    }
}
