use crate::collision::VelocityExchange;
use crate::core::Placement;
use crate::driver::Color;
use crate::error::SimulationError;
use crate::math::Rect;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Configuration parameters for the simulation.
///
/// Everything here is fixed once the simulation has been built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Width of the viewport the bodies are confined to
    pub viewport_width: f32,

    /// Height of the viewport the bodies are confined to
    pub viewport_height: f32,

    /// Number of bodies spawned by `Placement::EvenRow`
    pub body_count: usize,

    /// How the initial bodies are laid out
    pub placement: Placement,

    /// Radius given to every spawned body
    pub radius: f32,

    /// Half-open range `[min, max)` each initial velocity component is drawn from
    pub velocity_range: (f32, f32),

    /// Added to every body's vertical velocity once per tick (y points down)
    pub gravity: f32,

    /// How velocities are exchanged between colliding bodies
    pub velocity_exchange: VelocityExchange,

    /// Seed for the placement and velocity RNG
    pub seed: u64,

    /// Identifier passed to the renderer when loading each body's visual
    pub visual_id: String,

    /// Clear colour used at the start of every frame
    pub background: Color,

    /// Stop the frame driver after this many frames
    pub frame_limit: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280.0,
            viewport_height: 720.0,
            body_count: 5,
            placement: Placement::default(),
            radius: 50.0,
            velocity_range: (-5.0, 5.0),
            gravity: 0.1,
            velocity_exchange: VelocityExchange::NormalResolved,
            seed: 42,
            visual_id: String::from("textures/circle.png"),
            background: Color::rgb(96, 128, 255),
            frame_limit: None,
        }
    }
}

impl SimulationConfig {
    /// Returns the viewport as a rectangle anchored at the origin
    pub fn viewport(&self) -> Rect {
        Rect::new(0.0, 0.0, self.viewport_width, self.viewport_height)
    }

    /// Sets the viewport size
    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Sets the number of bodies spawned by the row layout
    pub fn with_body_count(mut self, body_count: usize) -> Self {
        self.body_count = body_count;
        self
    }

    /// Sets the placement rule
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Sets the body radius
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the initial velocity range
    pub fn with_velocity_range(mut self, min: f32, max: f32) -> Self {
        self.velocity_range = (min, max);
        self
    }

    /// Sets the per-tick gravity increment
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Sets the velocity exchange mode
    pub fn with_velocity_exchange(mut self, mode: VelocityExchange) -> Self {
        self.velocity_exchange = mode;
        self
    }

    /// Sets the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the frame limit
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.frame_limit = Some(frames);
        self
    }

    /// Checks that the configuration can produce a well-formed simulation
    pub fn validate(&self) -> Result<()> {
        let positive = |name: &str, value: f32| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SimulationError::InvalidParameter(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )))
            }
        };

        positive("viewport_width", self.viewport_width)?;
        positive("viewport_height", self.viewport_height)?;
        positive("radius", self.radius)?;

        let diameter = 2.0 * self.radius;
        if diameter > self.viewport_width || diameter > self.viewport_height {
            return Err(SimulationError::InvalidParameter(format!(
                "a body of radius {} does not fit in a {}x{} viewport",
                self.radius, self.viewport_width, self.viewport_height
            )));
        }

        let (min, max) = self.velocity_range;
        if !(min.is_finite() && max.is_finite()) || min > max {
            return Err(SimulationError::InvalidParameter(format!(
                "velocity_range must be a finite range with min <= max, got ({}, {})",
                min, max
            )));
        }

        if !self.gravity.is_finite() {
            return Err(SimulationError::InvalidParameter(format!(
                "gravity must be finite, got {}",
                self.gravity
            )));
        }

        self.placement.validate()
    }
}
