mod collision_pair;
mod pair_resolver;
mod wall;

pub use self::collision_pair::{CollisionPair, scan_order};
pub use self::pair_resolver::{Contact, VelocityExchange, resolve_pair, exchange_velocities};
pub use self::wall::{WallContact, resolve_walls};
