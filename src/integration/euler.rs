use crate::bodies::Body;
use crate::integration::Integrator;
use crate::math::Vector2;

/// Forward Euler integrator with a unit timestep of one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerIntegrator;

impl EulerIntegrator {
    /// Creates a new Euler integrator
    pub fn new() -> Self {
        Self
    }
}

impl Integrator for EulerIntegrator {
    fn integrate_position(&self, body: &mut Body) {
        body.translate(body.get_velocity());
    }

    fn apply_gravity(&self, body: &mut Body, gravity: f32) {
        body.set_velocity(body.get_velocity() + Vector2::new(0.0, gravity));
    }

    fn name(&self) -> &str {
        "Euler"
    }
}
