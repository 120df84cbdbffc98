/// Player - an actor steered by a movement input.
///
/// Input polling is not the engine's job: the player asks an injected
/// `MoveInput` for a direction each frame. A keyboard-backed input lives
/// with the surface backend; `ScriptedInput` drives tests and the demo.

use math_library::Vector2;
use super::actor::Actor;
use super::behavior::{Behavior, Contact};

/// Source of the desired movement direction
pub trait MoveInput: Send {
    /// Desired direction this frame; any length, zero for "stand still"
    fn direction(&mut self) -> Vector2;
}

/// Input that always reports the same direction
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScriptedInput {
    direction: Vector2,
}

impl ScriptedInput {
    pub fn new(direction: Vector2) -> Self {
        Self { direction }
    }

    pub fn set_direction(&mut self, direction: Vector2) {
        self.direction = direction;
    }
}

impl MoveInput for ScriptedInput {
    fn direction(&mut self) -> Vector2 {
        self.direction
    }
}

pub struct Player {
    speed: f32,
    velocity: Vector2,
    input: Box<dyn MoveInput>,
    last_contact: Option<String>,
}

impl Player {
    /// `speed` is in world units per second
    pub fn new(speed: f32, input: Box<dyn MoveInput>) -> Self {
        Self {
            speed,
            velocity: Vector2::ZERO,
            input,
            last_contact: None,
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// World-space displacement applied during the last update
    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    /// Name of the last actor this player collided with
    pub fn last_contact(&self) -> Option<&str> {
        self.last_contact.as_deref()
    }
}

impl Behavior for Player {
    fn update(&mut self, actor: &mut Actor, delta_time: f32) {
        let direction = self.input.direction().normalized();
        self.velocity = direction * self.speed * delta_time;

        if self.velocity.magnitude_squared() > 0.0 {
            actor.set_forward(self.velocity);
        }

        actor.translate_world(self.velocity);
    }

    fn on_collision(&mut self, actor: &mut Actor, contact: &Contact) {
        crate::engine_trace!(
            "mfg::Player",
            "'{}' touched '{}' at {}",
            actor.name(),
            contact.name,
            contact.world_position
        );
        self.last_contact = Some(contact.name.clone());
    }
}

#[cfg(test)]
#[path = "player_tests.rs"]
mod tests;
