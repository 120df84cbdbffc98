//! Scene module
//!
//! Provides actors, their parent/child hierarchy, per-actor behaviors and
//! the scene that updates, collides and draws them.

mod actor;
mod behavior;
mod player;
mod scene;

pub use actor::{Actor, ActorFlags, ActorKey};
pub use behavior::{AsAny, Behavior, Contact, Spin};
pub use player::{MoveInput, Player, ScriptedInput};
pub use scene::Scene;
