/// Stable handle to a ball in a `Simulation`. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BallId(pub u32);

/// Two balls whose circles overlapped and exchanged an impulse this step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionPair {
    pub a: BallId,
    pub b: BallId,
}

/// Summary of one `Simulation::step()`.
#[derive(Debug, Clone, Default)]
pub struct StepReport {
    /// Tick number after the step (first step reports 1).
    pub tick: u64,
    /// Pairs resolved during collision handling, in resolution order.
    pub collisions: Vec<CollisionPair>,
}
