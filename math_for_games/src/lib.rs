/*!
# MathForGames

A small 2D actor engine built on a hand-written linear algebra library.

Actors form a scene graph: each one owns a translation, rotation and scale,
and its global transform is its parent's global times its local transform.
Scenes update behaviors, propagate transforms, detect collisions and draw
through a pluggable render surface.

## Architecture

- **Engine**: scene registry and the run loop; global logging and close request
- **Scene**: actors stored under stable keys, parent/child links, camera
- **Actor**: transform parts, collider, sprite, shape
- **Behavior**: per-actor hooks (start, update, draw, collision, end)
- **RenderSurface**: the rendering/windowing backend seam
*/

// Internal modules
mod error;
mod engine;
mod config;
pub mod log;
pub mod surface;
pub mod camera;
pub mod collision;
pub mod scene;
pub mod sprite;

pub use error::{Error, Result};
pub use engine::Engine;
pub use config::EngineConfig;

// Re-export the math library at crate root
pub use math_library;
