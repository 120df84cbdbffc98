//! Camera module - 3D viewpoint handed to the render surface.
//!
//! The camera only describes where the viewer is and how it projects;
//! the surface decides what to do with it.

mod camera;

pub use camera::{Camera, Projection};
