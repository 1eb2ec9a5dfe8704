mod error;
mod grid;
mod params;

pub use error::{EngineError, EngineResult};
pub use grid::Grid;
pub use params::AgingParams;
