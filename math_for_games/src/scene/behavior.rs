/// Behavior - per-actor game logic hooks.
///
/// Every hook has a no-op default, so a behavior only implements what it
/// needs. The scene stores behaviors beside the actors and hands each hook
/// the actor it is attached to.

use std::any::Any;
use math_library::Vector2;
use crate::surface::RenderSurface;
use super::actor::{Actor, ActorKey};

/// The other side of a collision, as seen when the contact was detected
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub key: ActorKey,
    pub name: String,
    pub world_position: Vector2,
}

impl Contact {
    pub fn new(key: ActorKey, actor: &Actor) -> Self {
        Self {
            key,
            name: actor.name().to_string(),
            world_position: actor.world_position(),
        }
    }
}

/// Downcast helper, implemented for every `'static` type
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Game logic attached to one actor.
///
/// A scene hands out its behaviors as `&dyn Behavior`; `as_any` gets the
/// concrete type back (see `Scene::behavior_as`).
pub trait Behavior: AsAny + Send {
    /// Called once before the actor's first update
    fn start(&mut self, _actor: &mut Actor) {}

    /// Called every frame with the elapsed time in seconds
    fn update(&mut self, _actor: &mut Actor, _delta_time: f32) {}

    /// Extra drawing after the actor's sprite and shape
    fn draw(&self, _actor: &Actor, _surface: &mut dyn RenderSurface) {}

    /// Called once per frame for every actor overlapping this one
    fn on_collision(&mut self, _actor: &mut Actor, _contact: &Contact) {}

    /// Called when the scene ends or the actor is removed
    fn end(&mut self, _actor: &mut Actor) {}
}

/// Constant rotation around the actor's origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    pub radians_per_second: f32,
}

impl Spin {
    pub fn new(radians_per_second: f32) -> Self {
        Self { radians_per_second }
    }
}

impl Behavior for Spin {
    fn update(&mut self, actor: &mut Actor, delta_time: f32) {
        actor.rotate(self.radians_per_second * delta_time);
    }
}
