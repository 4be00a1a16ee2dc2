use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Axis-aligned box in screen space: `(x, y)` is the top-left corner and y
/// grows downward
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Creates a new rectangle from its top-left corner and size
    #[inline]
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Creates a rectangle centered on `center` with the given half extents
    #[inline]
    pub fn from_center_half_extents(center: Vector2, half_w: f32, half_h: f32) -> Self {
        Self {
            x: center.x - half_w,
            y: center.y - half_h,
            w: 2.0 * half_w,
            h: 2.0 * half_h,
        }
    }

    /// Returns the top-left corner
    #[inline]
    pub fn origin(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// Returns the center of the rectangle
    #[inline]
    pub fn center(&self) -> Vector2 {
        Vector2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Checks if this rectangle fully contains another one
    #[inline]
    pub fn contains_rect(&self, other: &Self) -> bool {
        self.x <= other.x && other.right() <= self.right() &&
        self.y <= other.y && other.bottom() <= self.bottom()
    }

    /// Translates the rectangle in place
    #[inline]
    pub fn translate(&mut self, offset: Vector2) {
        self.x += offset.x;
        self.y += offset.y;
    }
}
