//! Frame loop and the narrow interfaces to the windowing and rendering layer.

mod collaborators;
mod frame_driver;

pub use self::collaborators::{Color, EventSource, Renderer, WindowEvent};
pub use self::frame_driver::{FrameDriver, Termination};
