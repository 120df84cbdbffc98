//! Collision module - shape tests between actor colliders.
//!
//! Colliders are plain shapes with no position of their own; every test
//! takes the owners' world positions.

mod collider;

pub use collider::{AabbCollider, CircleCollider, Collider, ColliderType};
