pub mod rng;
pub mod simulation;
