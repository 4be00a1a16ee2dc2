mod body;

pub use self::body::Body;

/// Index of a body inside the ordered body store
pub type BodyIndex = usize;
