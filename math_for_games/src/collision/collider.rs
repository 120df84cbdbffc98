/// Collider shapes and the pairwise overlap tests.
///
/// Supported pairs: circle-circle, circle-AABB (either order) and
/// AABB-AABB. Touching shapes count as colliding.

use math_library::Vector2;
use crate::surface::{Color, RenderSurface};

/// Discriminant of a collider, for callers that only need the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColliderType {
    Circle,
    Aabb,
}

/// Circle centered on its owner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleCollider {
    pub radius: f32,
}

/// Axis-aligned box centered on its owner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AabbCollider {
    pub width: f32,
    pub height: f32,
}

impl CircleCollider {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    /// Overlap when the centers are no further apart than the combined radii
    pub fn check_circle(&self, position: Vector2, other: &CircleCollider, other_position: Vector2) -> bool {
        let combined = self.radius + other.radius;
        (other_position - position).magnitude_squared() <= combined * combined
    }

    /// Overlap when the box point closest to the circle center lies within the radius
    pub fn check_aabb(&self, position: Vector2, other: &AabbCollider, other_position: Vector2) -> bool {
        let closest = other.closest_point(other_position, position);
        (position - closest).magnitude_squared() <= self.radius * self.radius
    }
}

impl AabbCollider {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn half_extents(&self) -> Vector2 {
        Vector2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Minimum corner for a box centered on `position`
    pub fn min(&self, position: Vector2) -> Vector2 {
        position - self.half_extents()
    }

    /// Maximum corner for a box centered on `position`
    pub fn max(&self, position: Vector2) -> Vector2 {
        position + self.half_extents()
    }

    /// Point of the box (centered on `position`) closest to `point`
    pub fn closest_point(&self, position: Vector2, point: Vector2) -> Vector2 {
        let half = self.half_extents();
        position + (point - position).clamp(-half, half)
    }

    pub fn check_aabb(&self, position: Vector2, other: &AabbCollider, other_position: Vector2) -> bool {
        let delta = other_position - position;
        let reach = self.half_extents() + other.half_extents();
        delta.x.abs() <= reach.x && delta.y.abs() <= reach.y
    }
}

/// A collider attached to an actor
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collider {
    Circle(CircleCollider),
    Aabb(AabbCollider),
}

impl Collider {
    pub fn circle(radius: f32) -> Self {
        Collider::Circle(CircleCollider::new(radius))
    }

    pub fn aabb(width: f32, height: f32) -> Self {
        Collider::Aabb(AabbCollider::new(width, height))
    }

    pub fn kind(&self) -> ColliderType {
        match self {
            Collider::Circle(_) => ColliderType::Circle,
            Collider::Aabb(_) => ColliderType::Aabb,
        }
    }

    /// Test this collider (at `position`) against `other` (at `other_position`)
    pub fn check(&self, position: Vector2, other: &Collider, other_position: Vector2) -> bool {
        match (self, other) {
            (Collider::Circle(a), Collider::Circle(b)) => a.check_circle(position, b, other_position),
            (Collider::Circle(a), Collider::Aabb(b)) => a.check_aabb(position, b, other_position),
            (Collider::Aabb(a), Collider::Circle(b)) => b.check_aabb(other_position, a, position),
            (Collider::Aabb(a), Collider::Aabb(b)) => a.check_aabb(position, b, other_position),
        }
    }

    /// Outline the collider around `center`
    pub fn draw(&self, surface: &mut dyn RenderSurface, center: Vector2) {
        match self {
            Collider::Circle(circle) => {
                surface.draw_circle_lines(center, circle.radius, Color::RED);
            }
            Collider::Aabb(aabb) => {
                surface.draw_rectangle_lines(aabb.min(center), aabb.width, aabb.height, Color::RED);
            }
        }
    }
}

#[cfg(test)]
#[path = "collider_tests.rs"]
mod tests;
