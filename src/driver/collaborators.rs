use crate::math::Rect;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// An RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Creates a colour from all four channels
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque colour
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }
}

/// Window events the frame driver understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// The user asked to close the window
    Quit,

    /// Anything else; ignored by the driver
    Other,
}

/// Drawing surface the frame driver renders bodies onto.
///
/// Visual handles are owned by the driver for its whole lifetime and dropped
/// with it, so implementations can release GPU or terminal resources in
/// `Drop`.
pub trait Renderer {
    /// Handle to a loaded visual (texture, glyph, sprite)
    type Visual;

    /// Loads the visual identified by `id`
    fn load_visual(&mut self, id: &str) -> Result<Self::Visual>;

    /// Clears the frame to a solid colour
    fn clear(&mut self, color: Color) -> Result<()>;

    /// Draws a visual stretched over `bounds`
    fn draw_visual(&mut self, visual: &Self::Visual, bounds: &Rect) -> Result<()>;

    /// Shows the finished frame. This is where frame pacing happens.
    fn present(&mut self) -> Result<()>;
}

/// Source of window events
pub trait EventSource {
    /// Drains every pending event without blocking
    fn poll_events(&mut self) -> Result<Vec<WindowEvent>>;
}
