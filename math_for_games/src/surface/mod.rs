//! Render surface module - the seam to the rendering/windowing backend.
//!
//! The engine never talks to a window or GPU directly. Everything it draws
//! goes through the `RenderSurface` trait as transforms and primitive
//! descriptions; backends (raylib bindings, wgpu, a terminal...) live
//! outside this crate. `RecordingSurface` is the headless implementation
//! used by tests and the demo.

mod color;
mod render_surface;
mod recording_surface;

pub use color::Color;
pub use render_surface::{RenderSurface, Shape};
pub use recording_surface::{DrawCommand, RecordingSurface};
