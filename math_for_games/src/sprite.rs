/// Sprite - a texture drawn at an actor's global transform.
///
/// The sprite only records the texture path; loading and caching are the
/// surface's business.

use math_library::Matrix3;
use crate::surface::RenderSurface;

#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    path: String,
    width: u32,
    height: u32,
}

impl Sprite {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            width: 0,
            height: 0,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Width of the last draw, in world units
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the last draw, in world units
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Draw the texture stretched to the scale encoded in `transform`.
    ///
    /// The size is the rounded length of the transform's x and y axes, so
    /// rotation does not change it.
    pub fn draw(&mut self, surface: &mut dyn RenderSurface, transform: &Matrix3) {
        self.width = transform.x_axis().magnitude().round() as u32;
        self.height = transform.y_axis().magnitude().round() as u32;
        surface.draw_texture(&self.path, transform, self.width, self.height);
    }
}

#[cfg(test)]
#[path = "sprite_tests.rs"]
mod tests;
