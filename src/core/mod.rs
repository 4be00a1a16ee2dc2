pub mod world;
pub mod config;
pub mod storage;
pub mod events;
pub mod spawn;

pub use self::world::Simulation;
pub use self::config::SimulationConfig;
pub use self::storage::BodyStore;
pub use self::events::{EventQueue, CollisionEvent};
pub use self::spawn::{Placement, spawn_bodies};
