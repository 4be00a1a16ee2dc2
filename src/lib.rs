pub mod math;
pub mod core;
pub mod bodies;
pub mod collision;
pub mod integration;
pub mod driver;

/// Re-export common types for easier usage
pub use crate::core::{Simulation, SimulationConfig, BodyStore, Placement};
pub use crate::bodies::Body;
pub use crate::collision::{VelocityExchange, Contact, WallContact};
pub use crate::driver::{FrameDriver, Renderer, EventSource, WindowEvent, Termination, Color};
pub use crate::math::{Vector2, Rect};

/// Error types for the simulation
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum SimulationError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),

        #[error("Collaborator failure: {0}")]
        Collaborator(String),
    }
}

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, error::SimulationError>;

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
