/// Engine configuration
///
/// Plain data passed to `Engine::new`. Window fields are forwarded to the
/// render surface when the run loop opens it; the rest drive the loop.

use crate::surface::Color;

/// Configuration for the engine run loop and the surface it opens
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Frame pacing hint for the surface (0 = uncapped)
    pub target_fps: u32,
    /// Use this delta every frame instead of the surface's frame time
    pub fixed_delta_time: Option<f32>,
    /// Stop the loop after this many frames
    pub max_frames: Option<u64>,
    /// Outline colliders when drawing
    pub draw_colliders: bool,
    /// Clear color for each frame
    pub background: Color,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title: "Math For Games".to_string(),
            width: 800,
            height: 450,
            target_fps: 60,
            fixed_delta_time: None,
            max_frames: None,
            draw_colliders: false,
            background: Color::BLACK,
        }
    }
}

impl EngineConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_target_fps(mut self, target_fps: u32) -> Self {
        self.target_fps = target_fps;
        self
    }

    pub fn with_fixed_delta_time(mut self, delta_time: f32) -> Self {
        self.fixed_delta_time = Some(delta_time);
        self
    }

    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = Some(max_frames);
        self
    }

    pub fn with_draw_colliders(mut self, draw_colliders: bool) -> Self {
        self.draw_colliders = draw_colliders;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Width / height, used for projection matrices
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            return 1.0;
        }
        self.width as f32 / self.height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 450);
        assert_eq!(config.target_fps, 60);
        assert!(config.fixed_delta_time.is_none());
        assert!(config.max_frames.is_none());
        assert!(!config.draw_colliders);
    }

    #[test]
    fn test_builder_methods() {
        let config = EngineConfig::default()
            .with_title("Solar System")
            .with_size(1280, 720)
            .with_target_fps(30)
            .with_fixed_delta_time(0.5)
            .with_max_frames(10)
            .with_draw_colliders(true)
            .with_background(Color::RAYWHITE);

        assert_eq!(config.title, "Solar System");
        assert_eq!((config.width, config.height), (1280, 720));
        assert_eq!(config.target_fps, 30);
        assert_eq!(config.fixed_delta_time, Some(0.5));
        assert_eq!(config.max_frames, Some(10));
        assert!(config.draw_colliders);
        assert_eq!(config.background, Color::RAYWHITE);
    }

    #[test]
    fn test_aspect_ratio() {
        assert!((EngineConfig::default().with_size(1600, 900).aspect_ratio() - 16.0 / 9.0).abs() < 1e-6);
        assert_eq!(EngineConfig::default().with_size(100, 0).aspect_ratio(), 1.0);
    }
}
