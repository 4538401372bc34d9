pub mod ball;
pub mod color;
pub mod force;
