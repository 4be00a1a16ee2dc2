use crate::error::SimulationError;
use crate::math::{Rect, Vector2};
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A circular rigid body.
///
/// The body is stored as its screen-space bounding box; the center is always
/// `bounds.origin() + radius` and the box is `2 * radius` on each side.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Body {
    /// Axis-aligned bounding box of the circle
    bounds: Rect,

    /// Radius, fixed at creation
    radius: f32,

    /// Displacement per frame
    velocity: Vector2,
}

impl Body {
    /// Creates a body centered on `center`.
    ///
    /// Fails when the radius is not a positive finite number or when the
    /// center or velocity is not finite.
    pub fn new(center: Vector2, radius: f32, velocity: Vector2) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimulationError::InvalidParameter(format!(
                "body radius must be positive and finite, got {}",
                radius
            )));
        }
        if !center.is_finite() || !velocity.is_finite() {
            return Err(SimulationError::InvalidParameter(format!(
                "body state must be finite, got center {} velocity {}",
                center, velocity
            )));
        }

        Ok(Self {
            bounds: Rect::from_center_half_extents(center, radius, radius),
            radius,
            velocity,
        })
    }

    /// Creates a body at rest
    pub fn at_rest(center: Vector2, radius: f32) -> Result<Self> {
        Self::new(center, radius, Vector2::zero())
    }

    /// Returns the bounding box handed to the renderer
    pub fn get_bounds(&self) -> Rect {
        self.bounds
    }

    /// Returns the top-left corner of the bounding box
    pub fn get_position(&self) -> Vector2 {
        self.bounds.origin()
    }

    /// Sets the top-left corner of the bounding box
    pub fn set_position(&mut self, position: Vector2) {
        self.bounds.x = position.x;
        self.bounds.y = position.y;
    }

    /// Returns the center of the circle
    pub fn get_center(&self) -> Vector2 {
        self.bounds.origin() + Vector2::new(self.radius, self.radius)
    }

    /// Moves the body so that its center lands on `center`
    pub fn set_center(&mut self, center: Vector2) {
        self.set_position(center - Vector2::new(self.radius, self.radius));
    }

    /// Moves the body by `offset`
    pub fn translate(&mut self, offset: Vector2) {
        self.bounds.translate(offset);
    }

    /// Returns the radius
    pub fn get_radius(&self) -> f32 {
        self.radius
    }

    /// Returns the diameter, which is also the bounding box side
    pub fn get_diameter(&self) -> f32 {
        self.bounds.w
    }

    /// Returns the velocity
    pub fn get_velocity(&self) -> Vector2 {
        self.velocity
    }

    /// Sets the velocity
    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Returns true if the circles overlap (strictly closer than touching)
    pub fn overlaps(&self, other: &Body) -> bool {
        self.get_center().distance(&other.get_center()) < self.radius + other.radius
    }

    /// Kinetic energy with unit mass
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.velocity.length_squared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_follow_center() {
        let body = Body::at_rest(Vector2::new(100.0, 60.0), 50.0).unwrap();
        assert_eq!(body.get_bounds(), Rect::new(50.0, 10.0, 100.0, 100.0));
        assert_eq!(body.get_center(), Vector2::new(100.0, 60.0));
    }

    #[test]
    fn rejects_non_positive_radius() {
        assert!(Body::at_rest(Vector2::zero(), 0.0).is_err());
        assert!(Body::at_rest(Vector2::zero(), -3.0).is_err());
        assert!(Body::at_rest(Vector2::zero(), f32::NAN).is_err());
    }

    #[test]
    fn set_center_moves_bounds() {
        let mut body = Body::at_rest(Vector2::new(100.0, 60.0), 50.0).unwrap();
        body.set_center(Vector2::new(75.0, 80.0));
        assert_eq!(body.get_center(), Vector2::new(75.0, 80.0));
        assert_eq!(body.get_position(), Vector2::new(25.0, 30.0));
        assert_eq!(body.get_diameter(), 100.0);
    }
}
