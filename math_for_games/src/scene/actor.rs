/// Actor - a node of the scene graph.
///
/// An actor owns its transform parts (translation, rotation, scale) and
/// caches the derived local and global matrices. The cached global is kept
/// current on every setter using the last parent global the scene handed
/// over, so positions read back correctly between updates.
///
/// Parent/child links are stored as keys; the `Scene` owns the actors and
/// maintains both sides of every link.

use bitflags::bitflags;
use slotmap::new_key_type;
use math_library::{Matrix3, Vector2};
use crate::collision::Collider;
use crate::sprite::Sprite;
use crate::surface::{Color, RenderSurface, Shape};

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for an Actor within a Scene.
    ///
    /// Keys remain valid even after other actors are removed.
    pub struct ActorKey;
}

// ===== FLAGS =====

bitflags! {
    /// Lifecycle and visibility state of an actor
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ActorFlags: u8 {
        /// `start` has run since the actor joined (or re-joined) a running scene
        const STARTED = 1 << 0;
        /// Drawn by the scene
        const VISIBLE = 1 << 1;
        /// Removed at the end of the next scene update
        const PENDING_REMOVAL = 1 << 2;
    }
}

impl Default for ActorFlags {
    fn default() -> Self {
        ActorFlags::VISIBLE
    }
}

// ===== ACTOR =====

#[derive(Debug, Clone)]
pub struct Actor {
    name: String,
    flags: ActorFlags,

    translation: Matrix3,
    rotation: Matrix3,
    scale: Matrix3,
    local_transform: Matrix3,
    global_transform: Matrix3,
    parent_global: Matrix3,

    parent: Option<ActorKey>,
    children: Vec<ActorKey>,

    collider: Option<Collider>,
    sprite: Option<Sprite>,
    shape: Option<(Shape, Color)>,
}

impl Actor {
    /// Create an actor at `position` (parent space), unrotated, unit scale
    pub fn new(position: Vector2, name: impl Into<String>) -> Self {
        let mut actor = Self {
            name: name.into(),
            flags: ActorFlags::default(),
            translation: Matrix3::IDENTITY,
            rotation: Matrix3::IDENTITY,
            scale: Matrix3::IDENTITY,
            local_transform: Matrix3::IDENTITY,
            global_transform: Matrix3::IDENTITY,
            parent_global: Matrix3::IDENTITY,
            parent: None,
            children: Vec::new(),
            collider: None,
            sprite: None,
            shape: None,
        };
        actor.set_local_position(position);
        actor
    }

    /// Attach a sprite loaded from `path`
    pub fn with_sprite(mut self, path: impl Into<String>) -> Self {
        self.sprite = Some(Sprite::new(path));
        self
    }

    pub fn with_collider(mut self, collider: Collider) -> Self {
        self.collider = Some(collider);
        self
    }

    pub fn with_shape(mut self, shape: Shape, color: Color) -> Self {
        self.shape = Some((shape, color));
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.set_scale(width, height);
        self
    }

    // ===== ACCESSORS =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn flags(&self) -> ActorFlags {
        self.flags
    }

    pub fn started(&self) -> bool {
        self.flags.contains(ActorFlags::STARTED)
    }

    pub fn is_visible(&self) -> bool {
        self.flags.contains(ActorFlags::VISIBLE)
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.flags.set(ActorFlags::VISIBLE, visible);
    }

    pub fn is_pending_removal(&self) -> bool {
        self.flags.contains(ActorFlags::PENDING_REMOVAL)
    }

    pub fn parent(&self) -> Option<ActorKey> {
        self.parent
    }

    pub fn children(&self) -> &[ActorKey] {
        &self.children
    }

    pub fn collider(&self) -> Option<&Collider> {
        self.collider.as_ref()
    }

    pub fn set_collider(&mut self, collider: Option<Collider>) {
        self.collider = collider;
    }

    pub fn sprite(&self) -> Option<&Sprite> {
        self.sprite.as_ref()
    }

    pub fn set_sprite(&mut self, sprite: Option<Sprite>) {
        self.sprite = sprite;
    }

    pub fn shape(&self) -> Option<(Shape, Color)> {
        self.shape
    }

    pub fn set_shape(&mut self, shape: Option<(Shape, Color)>) {
        self.shape = shape;
    }

    pub fn local_transform(&self) -> &Matrix3 {
        &self.local_transform
    }

    pub fn global_transform(&self) -> &Matrix3 {
        &self.global_transform
    }

    // ===== POSITION / ORIENTATION =====

    /// Position relative to the parent
    pub fn local_position(&self) -> Vector2 {
        self.translation.translation()
    }

    pub fn set_local_position(&mut self, position: Vector2) {
        self.set_translation(position.x, position.y);
    }

    /// Position in world space, as of the last transform update
    pub fn world_position(&self) -> Vector2 {
        self.global_transform.translation()
    }

    /// Place the actor at `position` in world space.
    ///
    /// The position is brought into parent space through the inverse of
    /// the parent's global transform. A degenerate parent (zero scale)
    /// has no inverse; the actor then stays where it is.
    pub fn set_world_position(&mut self, position: Vector2) {
        match self.parent_global.inverse() {
            Some(inverse) => self.set_local_position(inverse.transform_point(position)),
            None => crate::engine_warn!(
                "mfg::Actor",
                "Cannot place '{}' at {}: parent transform is not invertible",
                self.name,
                position
            ),
        }
    }

    /// Length of the scale matrix's axes
    pub fn size(&self) -> Vector2 {
        Vector2::new(self.scale.x_axis().magnitude(), self.scale.y_axis().magnitude())
    }

    pub fn set_size(&mut self, size: Vector2) {
        self.set_scale(size.x, size.y);
    }

    /// Unit direction of the actor's local +X axis in world space
    pub fn forward(&self) -> Vector2 {
        self.global_transform.x_axis().normalized()
    }

    /// Turn to face `direction` (world space). A zero direction is ignored.
    pub fn set_forward(&mut self, direction: Vector2) {
        let direction = direction.normalized();
        if direction == Vector2::ZERO {
            return;
        }
        self.look_at(self.world_position() + direction);
    }

    /// Rotate so that `forward()` points at `target` (world space).
    ///
    /// The angle is measured in parent space, where the rotation applies,
    /// so a mirrored or stretched parent still ends up facing the target.
    pub fn look_at(&mut self, target: Vector2) {
        let Some(inverse) = self.parent_global.inverse() else {
            crate::engine_warn!(
                "mfg::Actor",
                "'{}' cannot look at {}: parent transform is not invertible",
                self.name,
                target
            );
            return;
        };
        let direction = inverse
            .transform_vector(target - self.world_position())
            .normalized();
        let forward = self.local_transform.x_axis().normalized();
        if direction == Vector2::ZERO || forward == Vector2::ZERO {
            return;
        }
        self.rotate(Vector2::signed_angle(forward, direction));
    }

    // ===== TRANSFORM PARTS =====

    pub fn set_translation(&mut self, x: f32, y: f32) {
        self.translation = Matrix3::create_translation(x, y);
        self.refresh_transforms();
    }

    /// Move by `(x, y)` in parent space
    pub fn translate(&mut self, x: f32, y: f32) {
        self.translation *= Matrix3::create_translation(x, y);
        self.refresh_transforms();
    }

    /// Move by `offset` in world space
    pub fn translate_world(&mut self, offset: Vector2) {
        match self.parent_global.inverse() {
            Some(inverse) => {
                let local = inverse.transform_vector(offset);
                self.translate(local.x, local.y);
            }
            None => crate::engine_warn!(
                "mfg::Actor",
                "Cannot move '{}' by {}: parent transform is not invertible",
                self.name,
                offset
            ),
        }
    }

    pub fn set_rotation(&mut self, radians: f32) {
        self.rotation = Matrix3::create_rotation(radians);
        self.refresh_transforms();
    }

    /// Rotate counter-clockwise by `radians` on top of the current rotation
    pub fn rotate(&mut self, radians: f32) {
        self.rotation = Matrix3::create_rotation(radians) * self.rotation;
        self.refresh_transforms();
    }

    /// Rotation angle in radians, in (-PI, PI]
    pub fn rotation(&self) -> f32 {
        let axis = self.rotation.x_axis();
        axis.y.atan2(axis.x)
    }

    pub fn set_scale(&mut self, x: f32, y: f32) {
        self.scale = Matrix3::create_scale(x, y);
        self.refresh_transforms();
    }

    /// Multiply the current scale by `(x, y)`
    pub fn scale(&mut self, x: f32, y: f32) {
        self.scale *= Matrix3::create_scale(x, y);
        self.refresh_transforms();
    }

    /// Recompute local = T * R * S and global = parent_global * local
    pub fn update_transforms(&mut self, parent_global: &Matrix3) {
        self.parent_global = *parent_global;
        self.refresh_transforms();
    }

    fn refresh_transforms(&mut self) {
        self.local_transform = self.translation * self.rotation * self.scale;
        self.global_transform = self.parent_global * self.local_transform;
    }

    // ===== COLLISION =====

    /// Whether this actor's collider overlaps `other`'s at their world positions.
    ///
    /// False when either actor has no collider.
    pub fn check_collision(&self, other: &Actor) -> bool {
        match (&self.collider, &other.collider) {
            (Some(mine), Some(theirs)) => {
                mine.check(self.world_position(), theirs, other.world_position())
            }
            _ => false,
        }
    }

    // ===== LIFECYCLE =====

    pub fn start(&mut self) {
        self.flags.insert(ActorFlags::STARTED);
    }

    /// Counterpart of `start`; a later `start` runs the actor again
    pub fn end(&mut self) {
        self.flags.remove(ActorFlags::STARTED);
    }

    // ===== DRAWING =====

    /// Draw the sprite, then the shape, at the global transform
    pub fn draw(&mut self, surface: &mut dyn RenderSurface) {
        if let Some(sprite) = &mut self.sprite {
            sprite.draw(surface, &self.global_transform);
        }
        if let Some((shape, color)) = self.shape {
            surface.draw_shape(shape, &self.global_transform, color);
        }
    }

    /// Outline the collider around the world position, if any
    pub fn draw_collider(&self, surface: &mut dyn RenderSurface) {
        if let Some(collider) = &self.collider {
            collider.draw(surface, self.world_position());
        }
    }

    // ===== SCENE-GRAPH BOOKKEEPING (owned by Scene) =====

    pub(crate) fn mark_pending_removal(&mut self) {
        self.flags.insert(ActorFlags::PENDING_REMOVAL);
    }

    pub(crate) fn set_parent(&mut self, parent: Option<ActorKey>) {
        self.parent = parent;
    }

    pub(crate) fn push_child(&mut self, child: ActorKey) {
        self.children.push(child);
    }

    pub(crate) fn remove_child_key(&mut self, child: ActorKey) -> bool {
        let before = self.children.len();
        self.children.retain(|&key| key != child);
        self.children.len() != before
    }

    /// Drop the parent link and bake the current global transform into
    /// the local parts, so the actor stays where it is on screen.
    ///
    /// The rotation takes the angle of the global x axis; whatever is left
    /// of the linear part (mirroring, shear) goes into the scale matrix.
    pub(crate) fn detach_keeping_world(&mut self) {
        let global = self.global_transform;
        let x_axis = global.x_axis();
        let angle = x_axis.y.atan2(x_axis.x);
        let position = global.translation();
        let linear = Matrix3::new(
            global.m00, global.m01, 0.0,
            global.m10, global.m11, 0.0,
            0.0, 0.0, 1.0,
        );

        self.parent = None;
        self.parent_global = Matrix3::IDENTITY;
        self.translation = Matrix3::create_translation(position.x, position.y);
        self.rotation = Matrix3::create_rotation(angle);
        self.scale = Matrix3::create_rotation(-angle) * linear;
        self.refresh_transforms();
    }
}

#[cfg(test)]
#[path = "actor_tests.rs"]
mod tests;
