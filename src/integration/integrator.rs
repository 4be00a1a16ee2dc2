use crate::bodies::Body;

/// Trait for advancing a body's state by one frame
pub trait Integrator: Send + Sync {
    /// Moves the body by its current velocity
    fn integrate_position(&self, body: &mut Body);

    /// Adds the per-frame gravity increment to the body's velocity
    fn apply_gravity(&self, body: &mut Body, gravity: f32);

    /// Returns the name of the integrator
    fn name(&self) -> &str;
}
