/// Headless render surface that records draw calls
///
/// No window and no backend, just a faithful log of what the engine
/// asked for. Tests inspect the recorded commands; the demo uses it to
/// run without a display.

use math_library::{Matrix3, Vector2};
use crate::camera::Camera;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::engine_bail;
use super::{Color, RenderSurface, Shape};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Texture {
        texture: String,
        transform: Matrix3,
        width: u32,
        height: u32,
    },
    Shape {
        shape: Shape,
        transform: Matrix3,
        color: Color,
    },
    CircleLines {
        center: Vector2,
        radius: f32,
        color: Color,
    },
    RectangleLines {
        min: Vector2,
        width: f32,
        height: f32,
        color: Color,
    },
}

/// Render surface that keeps the commands of the last presented frame
pub struct RecordingSurface {
    config: Option<EngineConfig>,
    frame_time: f32,
    close_after: Option<u64>,
    frames_presented: u64,
    total_draw_calls: u64,
    in_frame: bool,
    current_frame: Vec<DrawCommand>,
    last_frame: Vec<DrawCommand>,
    last_background: Option<Color>,
    last_camera: Option<Camera>,
    closed: bool,
}

impl RecordingSurface {
    /// Create a surface reporting a constant frame time of 1/60 s
    pub fn new() -> Self {
        Self {
            config: None,
            frame_time: 1.0 / 60.0,
            close_after: None,
            frames_presented: 0,
            total_draw_calls: 0,
            in_frame: false,
            current_frame: Vec::new(),
            last_frame: Vec::new(),
            last_background: None,
            last_camera: None,
            closed: false,
        }
    }

    /// Ask to close once `frames` frames have been presented
    pub fn with_close_after(mut self, frames: u64) -> Self {
        self.close_after = Some(frames);
        self
    }

    /// Frame time reported to the engine
    pub fn with_frame_time(mut self, frame_time: f32) -> Self {
        self.frame_time = frame_time;
        self
    }

    // ===== INSPECTION =====

    /// Config received by `open`, if opened
    pub fn config(&self) -> Option<&EngineConfig> {
        self.config.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.config.is_some() && !self.closed
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn total_draw_calls(&self) -> u64 {
        self.total_draw_calls
    }

    /// Commands of the most recently presented frame
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    pub fn last_background(&self) -> Option<Color> {
        self.last_background
    }

    /// Camera passed to the most recent `begin_frame`
    pub fn last_camera(&self) -> Option<&Camera> {
        self.last_camera.as_ref()
    }

    /// Textures drawn during the last presented frame
    pub fn textures_drawn(&self) -> Vec<&str> {
        self.last_frame
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Texture { texture, .. } => Some(texture.as_str()),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, command: DrawCommand) {
        debug_assert!(self.in_frame, "draw call outside begin_frame/end_frame");
        self.total_draw_calls += 1;
        self.current_frame.push(command);
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for RecordingSurface {
    fn open(&mut self, config: &EngineConfig) -> Result<()> {
        if self.is_open() {
            engine_bail!("mfg::RecordingSurface", SurfaceError, "Surface '{}' is already open", config.title);
        }
        self.config = Some(config.clone());
        self.closed = false;
        crate::engine_debug!(
            "mfg::RecordingSurface",
            "Opened '{}' ({}x{})",
            config.title,
            config.width,
            config.height
        );
        Ok(())
    }

    fn should_close(&self) -> bool {
        self.closed || self.close_after.is_some_and(|limit| self.frames_presented >= limit)
    }

    fn frame_time(&self) -> f32 {
        self.frame_time
    }

    fn begin_frame(&mut self, background: Color, camera: Option<&Camera>) {
        self.in_frame = true;
        self.current_frame.clear();
        self.last_background = Some(background);
        self.last_camera = camera.cloned();
    }

    fn draw_texture(&mut self, texture: &str, transform: &Matrix3, width: u32, height: u32) {
        self.record(DrawCommand::Texture {
            texture: texture.to_string(),
            transform: *transform,
            width,
            height,
        });
    }

    fn draw_shape(&mut self, shape: Shape, transform: &Matrix3, color: Color) {
        self.record(DrawCommand::Shape { shape, transform: *transform, color });
    }

    fn draw_circle_lines(&mut self, center: Vector2, radius: f32, color: Color) {
        self.record(DrawCommand::CircleLines { center, radius, color });
    }

    fn draw_rectangle_lines(&mut self, min: Vector2, width: f32, height: f32, color: Color) {
        self.record(DrawCommand::RectangleLines { min, width, height, color });
    }

    fn end_frame(&mut self) {
        self.in_frame = false;
        self.last_frame = std::mem::take(&mut self.current_frame);
        self.frames_presented += 1;
    }

    fn close(&mut self) {
        self.closed = true;
        crate::engine_debug!(
            "mfg::RecordingSurface",
            "Closed after {} frames, {} draw calls",
            self.frames_presented,
            self.total_draw_calls
        );
    }
}

#[cfg(test)]
#[path = "recording_surface_tests.rs"]
mod tests;
