//! Seedable pseudo-random number generator (xorshift64).
//! Drives ball radii, spawn positions and colors so a seeded sandbox replays
//! identically.

/// Seedable pseudo-random number generator (xorshift64).
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Random integer in [low, high). Returns `low` when the range is empty.
    pub fn int_in(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        let span = (high as i64 - low as i64) as u64;
        low + (self.next_u64() % span) as i32
    }

    /// Random float in [0, 1).
    pub fn unit(&mut self) -> f32 {
        // Top 24 bits fill the f32 mantissa exactly.
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Random float in [low, high).
    pub fn float_in(&mut self, low: f32, high: f32) -> f32 {
        low + (high - low) * self.unit()
    }
}
