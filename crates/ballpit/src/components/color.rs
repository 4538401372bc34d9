use crate::core::rng::Rng;

/// RGB fill color for a ball, each channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl BallColor {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Draw each channel uniformly from [0, 1).
    pub fn random(rng: &mut Rng) -> Self {
        Self {
            r: rng.unit(),
            g: rng.unit(),
            b: rng.unit(),
        }
    }
}

impl Default for BallColor {
    fn default() -> Self {
        Self {
            r: 0.6,
            g: 0.6,
            b: 0.8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_channels_in_unit_range() {
        let mut rng = Rng::new(5);
        for _ in 0..100 {
            let c = BallColor::random(&mut rng);
            for ch in [c.r, c.g, c.b] {
                assert!((0.0..1.0).contains(&ch), "channel out of range: {}", ch);
            }
        }
    }
}
