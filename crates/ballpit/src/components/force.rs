use glam::Vec2;

/// Number of forces in a canonical triple (Gravity, Wind, Friction).
pub const CANONICAL_FORCE_COUNT: usize = 3;

/// What a force represents. Gravity is the only kind a ball can opt out of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForceKind {
    Gravity,
    Wind,
    Friction,
    Custom { name: String },
}

/// A uniform influence applied to every eligible ball each step.
#[derive(Debug, Clone, PartialEq)]
pub struct Force {
    pub kind: ForceKind,
    /// Added to the velocity of each eligible ball.
    pub vector: Vec2,
    /// Element-wise fraction of velocity removed after `vector` is added.
    pub friction: Vec2,
}

impl Force {
    pub fn new(kind: ForceKind, vector: Vec2) -> Self {
        Self {
            kind,
            vector,
            friction: Vec2::ZERO,
        }
    }

    pub fn gravity(vector: Vec2) -> Self {
        Self::new(ForceKind::Gravity, vector)
    }

    pub fn wind(vector: Vec2) -> Self {
        Self::new(ForceKind::Wind, vector)
    }

    /// A friction force has no push of its own, only a damping coefficient.
    pub fn friction(coefficient: Vec2) -> Self {
        Self::new(ForceKind::Friction, Vec2::ZERO).with_friction(coefficient)
    }

    pub fn custom(name: impl Into<String>, vector: Vec2) -> Self {
        Self::new(ForceKind::Custom { name: name.into() }, vector)
    }

    pub fn with_friction(mut self, coefficient: Vec2) -> Self {
        self.friction = coefficient;
        self
    }

    /// Display name for host UIs.
    pub fn name(&self) -> &str {
        match &self.kind {
            ForceKind::Gravity => "Gravity",
            ForceKind::Wind => "Wind",
            ForceKind::Friction => "Friction",
            ForceKind::Custom { name } => name,
        }
    }

    pub fn is_gravity(&self) -> bool {
        matches!(self.kind, ForceKind::Gravity)
    }

    /// The canonical Gravity, Wind, Friction triple, in that order.
    pub fn canonical_set(
        gravity: Vec2,
        wind: Vec2,
        friction: Vec2,
    ) -> [Force; CANONICAL_FORCE_COUNT] {
        [
            Force::gravity(gravity),
            Force::wind(wind),
            Force::friction(friction),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_set_order_and_names() {
        let set = Force::canonical_set(Vec2::new(0.0, 0.5), Vec2::ZERO, Vec2::ZERO);
        let names: Vec<&str> = set.iter().map(|f| f.name()).collect();
        assert_eq!(names, ["Gravity", "Wind", "Friction"]);
        assert!(set[0].is_gravity());
        assert_eq!(set[0].vector, Vec2::new(0.0, 0.5));
    }

    #[test]
    fn friction_force_carries_only_coefficient() {
        let f = Force::friction(Vec2::new(0.1, 0.2));
        assert_eq!(f.vector, Vec2::ZERO);
        assert_eq!(f.friction, Vec2::new(0.1, 0.2));
    }

    #[test]
    fn custom_force_name() {
        let f = Force::custom("Updraft", Vec2::new(0.0, -0.2));
        assert_eq!(f.name(), "Updraft");
        assert!(!f.is_gravity());
    }
}
