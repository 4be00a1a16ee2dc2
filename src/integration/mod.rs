mod integrator;
mod euler;

pub use self::integrator::Integrator;
pub use self::euler::EulerIntegrator;
