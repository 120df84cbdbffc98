/// RenderSurface trait - the external rendering/windowing collaborator.
///
/// Implementations translate these calls into whatever their backend
/// needs. Transforms are handed over as full `Matrix3` globals so the
/// backend can extract position, rotation and scale as it sees fit.

use math_library::{Matrix3, Vector2};
use crate::camera::Camera;
use crate::config::EngineConfig;
use crate::error::Result;
use super::Color;

/// Primitive an actor can be drawn as when it has no sprite
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Filled circle in the 2D plane
    Circle { radius: f32 },
    /// Filled rectangle centered on the actor
    Rectangle { width: f32, height: f32 },
    /// Sphere (3D surfaces); 2D surfaces draw it as a circle
    Sphere { radius: f32 },
    /// Cube (3D surfaces); 2D surfaces draw it as a square
    Cube { size: f32 },
}

/// Rendering and windowing backend
///
/// Only `open`, `should_close`, `frame_time`, `begin_frame` and `end_frame`
/// are structural; the draw calls are fire-and-forget.
pub trait RenderSurface {
    /// Create the window / context. Called once before the first frame.
    fn open(&mut self, config: &EngineConfig) -> Result<()>;

    /// Whether the user or backend asked to close (window close button...)
    fn should_close(&self) -> bool;

    /// Seconds elapsed during the previous frame
    fn frame_time(&self) -> f32;

    /// Start a frame: clear to `background`, enter 3D mode if a camera is given
    fn begin_frame(&mut self, background: Color, camera: Option<&Camera>);

    /// Draw a texture placed by `transform`, stretched to `width` x `height`
    fn draw_texture(&mut self, texture: &str, transform: &Matrix3, width: u32, height: u32);

    /// Draw a filled primitive placed by `transform`
    fn draw_shape(&mut self, shape: Shape, transform: &Matrix3, color: Color);

    /// Outline a circle (collider debug view)
    fn draw_circle_lines(&mut self, center: Vector2, radius: f32, color: Color);

    /// Outline an axis-aligned rectangle from its minimum corner (collider debug view)
    fn draw_rectangle_lines(&mut self, min: Vector2, width: f32, height: f32, color: Color);

    /// Present the frame
    fn end_frame(&mut self);

    /// Tear down the window / context
    fn close(&mut self);
}
