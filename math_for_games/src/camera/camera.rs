/// Camera - 3D viewpoint (position, target, up, field of view, projection).
///
/// The scene owns at most one camera and hands it to the surface at the
/// start of each frame. A camera can follow an actor: the scene retargets
/// it on the actor's world position after every update.

use math_library::{angle, Matrix4, Vector3};
use crate::scene::Actor;

/// Projection mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    #[default]
    Perspective,
    Orthographic,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vector3,
    target: Vector3,
    up: Vector3,
    /// Vertical field of view in degrees (perspective) or view height (orthographic)
    fovy: f32,
    projection: Projection,
}

impl Camera {
    pub fn new(position: Vector3, target: Vector3, up: Vector3, fovy: f32, projection: Projection) -> Self {
        Self { position, target, up, fovy, projection }
    }

    /// Camera at `position` looking at an actor's world position.
    ///
    /// Actors live in the z = 0 plane, so the target is `(x, y, 0)`.
    pub fn looking_at_actor(
        position: Vector3,
        target: &Actor,
        up: Vector3,
        fovy: f32,
        projection: Projection,
    ) -> Self {
        Self::new(position, Vector3::from(target.world_position()), up, fovy, projection)
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn target(&self) -> Vector3 {
        self.target
    }

    pub fn up(&self) -> Vector3 {
        self.up
    }

    pub fn fovy(&self) -> f32 {
        self.fovy
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    // ===== SETTERS =====

    pub fn set_position(&mut self, position: Vector3) {
        self.position = position;
    }

    pub fn set_target(&mut self, target: Vector3) {
        self.target = target;
    }

    pub fn set_up(&mut self, up: Vector3) {
        self.up = up;
    }

    pub fn set_fovy(&mut self, fovy: f32) {
        self.fovy = fovy;
    }

    pub fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
    }

    /// Retarget on an actor's current world position
    pub fn follow(&mut self, actor: &Actor) {
        self.target = Vector3::from(actor.world_position());
    }

    // ===== MATRICES =====

    /// View matrix, or `None` if position == target or `up` is parallel
    /// to the viewing direction.
    pub fn view_matrix(&self) -> Option<Matrix4> {
        Matrix4::look_at(self.position, self.target, self.up)
    }

    /// Projection matrix for the given aspect ratio and clip planes
    pub fn projection_matrix(&self, aspect: f32, near: f32, far: f32) -> Matrix4 {
        match self.projection {
            Projection::Perspective => {
                Matrix4::perspective(angle::to_radians(self.fovy), aspect, near, far)
            }
            Projection::Orthographic => {
                let half_height = self.fovy * 0.5;
                let half_width = half_height * aspect;
                Matrix4::orthographic(-half_width, half_width, -half_height, half_height, near, far)
            }
        }
    }

    /// projection * view, or `None` when the view is degenerate
    pub fn view_projection_matrix(&self, aspect: f32, near: f32, far: f32) -> Option<Matrix4> {
        self.view_matrix()
            .map(|view| self.projection_matrix(aspect, near, far) * view)
    }
}

impl Default for Camera {
    /// Looking down -Z at the origin from (0, 0, 10), 45 degree perspective
    fn default() -> Self {
        Self::new(
            Vector3::new(0.0, 0.0, 10.0),
            Vector3::ZERO,
            Vector3::Y,
            45.0,
            Projection::Perspective,
        )
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
