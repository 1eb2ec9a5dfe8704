mod simulation;

pub use simulation::{DEFAULT_SEED_COUNT, Engine, NeighborCounts};

// Re-export the substrate types for convenience
pub use life_core::{AgingParams, EngineError, EngineResult, Grid};
