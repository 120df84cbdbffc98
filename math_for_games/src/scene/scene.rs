/// Scene - the actors of one level, their hierarchy and behaviors.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys. Insertion
/// order is tracked separately so updates, collisions and draws visit
/// actors deterministically.

use rustc_hash::FxHashSet;
use slotmap::{SecondaryMap, SlotMap};
use math_library::Matrix3;
use crate::camera::Camera;
use crate::error::Result;
use crate::surface::RenderSurface;
use crate::{engine_bail, engine_err};
use super::actor::{Actor, ActorKey};
use super::behavior::{AsAny, Behavior, Contact};

pub struct Scene {
    name: String,
    /// Actors stored in a slot map for O(1) insert/remove
    actors: SlotMap<ActorKey, Actor>,
    /// Behaviors, keyed like the actor they drive
    behaviors: SecondaryMap<ActorKey, Box<dyn Behavior>>,
    /// Insertion order of live actors
    order: Vec<ActorKey>,
    /// Actors marked by remove_actor, committed at the end of update
    pending_removals: FxHashSet<ActorKey>,
    camera: Option<Camera>,
    camera_follow: Option<ActorKey>,
}

impl Scene {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            actors: SlotMap::with_key(),
            behaviors: SecondaryMap::new(),
            order: Vec::new(),
            pending_removals: FxHashSet::default(),
            camera: None,
            camera_follow: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // ===== ACTORS =====

    pub fn add_actor(&mut self, actor: Actor) -> ActorKey {
        let key = self.actors.insert(actor);
        self.order.push(key);
        crate::engine_trace!("mfg::Scene", "'{}': added actor '{}'", self.name, self.actors[key].name());
        key
    }

    /// Add an actor driven by `behavior`
    pub fn add_actor_with(&mut self, actor: Actor, behavior: impl Behavior + 'static) -> ActorKey {
        let key = self.add_actor(actor);
        self.behaviors.insert(key, Box::new(behavior));
        key
    }

    /// Attach (or replace) the behavior of an existing actor
    pub fn set_behavior(&mut self, key: ActorKey, behavior: Box<dyn Behavior>) -> Result<()> {
        if !self.actors.contains_key(key) {
            engine_bail!("mfg::Scene", InvalidActor, "Cannot attach a behavior to unknown actor {:?}", key);
        }
        self.behaviors.insert(key, behavior);
        Ok(())
    }

    pub fn behavior(&self, key: ActorKey) -> Option<&dyn Behavior> {
        self.behaviors.get(key).map(|behavior| &**behavior)
    }

    /// Behavior of `key` as its concrete type, if it is a `T`
    pub fn behavior_as<T: Behavior + 'static>(&self, key: ActorKey) -> Option<&T> {
        let behavior = &**self.behaviors.get(key)?;
        behavior.as_any().downcast_ref::<T>()
    }

    pub fn behavior_as_mut<T: Behavior + 'static>(&mut self, key: ActorKey) -> Option<&mut T> {
        let behavior = &mut **self.behaviors.get_mut(key)?;
        behavior.as_any_mut().downcast_mut::<T>()
    }

    /// Schedule an actor and its whole subtree for removal.
    ///
    /// The actors stay in the scene until the end of the next `update`,
    /// where their `end` hooks run. Until then none of them collides or
    /// draws. Returns false for an unknown key.
    pub fn remove_actor(&mut self, key: ActorKey) -> bool {
        if !self.actors.contains_key(key) {
            return false;
        }
        self.mark_subtree_pending(key);
        self.pending_removals.insert(key);
        true
    }

    fn mark_subtree_pending(&mut self, root: ActorKey) {
        for key in self.subtree(root) {
            self.actors[key].mark_pending_removal();
        }
    }

    pub fn actor(&self, key: ActorKey) -> Option<&Actor> {
        self.actors.get(key)
    }

    pub fn actor_mut(&mut self, key: ActorKey) -> Option<&mut Actor> {
        self.actors.get_mut(key)
    }

    /// First actor (in insertion order) named `name`
    pub fn find_actor(&self, name: &str) -> Option<ActorKey> {
        self.order.iter().copied().find(|&key| self.actors[key].name() == name)
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Keys of all actors, in insertion order
    pub fn actor_keys(&self) -> impl Iterator<Item = ActorKey> + '_ {
        self.order.iter().copied()
    }

    // ===== HIERARCHY =====

    /// Make `child` a child of `parent`.
    ///
    /// The child's local placement is kept and becomes relative to the
    /// parent. Adding an existing child again does nothing.
    pub fn add_child(&mut self, parent: ActorKey, child: ActorKey) -> Result<()> {
        if !self.actors.contains_key(parent) {
            engine_bail!("mfg::Scene", InvalidActor, "Unknown parent actor {:?}", parent);
        }
        let Some(current_parent) = self.actors.get(child).map(Actor::parent) else {
            engine_bail!("mfg::Scene", InvalidActor, "Unknown child actor {:?}", child);
        };
        if parent == child {
            engine_bail!(
                "mfg::Scene",
                InvalidHierarchy,
                "'{}' cannot be its own child",
                self.actors[child].name()
            );
        }
        match current_parent {
            Some(existing) if existing == parent => return Ok(()),
            Some(existing) => {
                return Err(engine_err!(
                    "mfg::Scene",
                    InvalidHierarchy,
                    "'{}' already has parent '{}'",
                    self.actors[child].name(),
                    self.actors[existing].name()
                ));
            }
            None => {}
        }
        if self.is_ancestor(child, parent) {
            engine_bail!(
                "mfg::Scene",
                InvalidHierarchy,
                "'{}' is an ancestor of '{}'",
                self.actors[child].name(),
                self.actors[parent].name()
            );
        }

        self.actors[parent].push_child(child);
        self.actors[child].set_parent(Some(parent));
        // Joining a subtree scheduled for removal schedules the child too
        if self.actors[parent].is_pending_removal() {
            self.mark_subtree_pending(child);
        }
        self.refresh_subtree(child);
        Ok(())
    }

    /// Detach `child` from `parent`, keeping its world placement.
    ///
    /// Returns false if `child` is not a child of `parent`.
    pub fn remove_child(&mut self, parent: ActorKey, child: ActorKey) -> bool {
        if self.actors.get(child).and_then(Actor::parent) != Some(parent) {
            return false;
        }
        if let Some(parent_actor) = self.actors.get_mut(parent) {
            parent_actor.remove_child_key(child);
        }
        self.actors[child].detach_keeping_world();
        // A subtree scheduled for removal stays scheduled once detached
        if self.actors[child].is_pending_removal() {
            self.pending_removals.insert(child);
        }
        self.refresh_subtree(child);
        true
    }

    /// Whether `ancestor` appears on the parent chain of `key` (or is `key`)
    fn is_ancestor(&self, ancestor: ActorKey, key: ActorKey) -> bool {
        let mut current = Some(key);
        while let Some(k) = current {
            if k == ancestor {
                return true;
            }
            current = self.actors.get(k).and_then(Actor::parent);
        }
        false
    }

    /// Recompute transforms of `root` and everything below it
    fn refresh_subtree(&mut self, root: ActorKey) {
        let parent_global = self.actors[root]
            .parent()
            .and_then(|parent| self.actors.get(parent))
            .map(|parent| *parent.global_transform())
            .unwrap_or(Matrix3::IDENTITY);

        let mut stack = vec![(root, parent_global)];
        while let Some((key, parent_global)) = stack.pop() {
            let Some(actor) = self.actors.get_mut(key) else {
                continue;
            };
            actor.update_transforms(&parent_global);
            let global = *actor.global_transform();
            stack.extend(actor.children().iter().map(|&child| (child, global)));
        }
    }

    /// Keys of `root` and its descendants, parent before children
    fn subtree(&self, root: ActorKey) -> Vec<ActorKey> {
        let mut keys = Vec::new();
        let mut stack = vec![root];
        while let Some(key) = stack.pop() {
            if let Some(actor) = self.actors.get(key) {
                keys.push(key);
                stack.extend(actor.children().iter().rev().copied());
            }
        }
        keys
    }

    // ===== CAMERA =====

    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    pub fn camera_mut(&mut self) -> Option<&mut Camera> {
        self.camera.as_mut()
    }

    pub fn set_camera(&mut self, camera: Option<Camera>) {
        self.camera = camera;
    }

    /// Retarget the camera on `key` after every update (`None` stops following)
    pub fn set_camera_follow(&mut self, key: Option<ActorKey>) -> Result<()> {
        if let Some(key) = key {
            if !self.actors.contains_key(key) {
                engine_bail!("mfg::Scene", InvalidActor, "Camera cannot follow unknown actor {:?}", key);
            }
        }
        self.camera_follow = key;
        Ok(())
    }

    pub fn camera_follow(&self) -> Option<ActorKey> {
        self.camera_follow
    }

    // ===== LIFECYCLE =====

    /// Start every actor that has not started yet
    pub fn start(&mut self) {
        for index in 0..self.order.len() {
            let key = self.order[index];
            self.start_actor(key);
        }
    }

    fn start_actor(&mut self, key: ActorKey) {
        let Some(actor) = self.actors.get_mut(key) else {
            return;
        };
        if actor.started() {
            return;
        }
        actor.start();
        if let Some(behavior) = self.behaviors.get_mut(key) {
            behavior.start(actor);
        }
    }

    /// Advance the scene by `delta_time` seconds
    pub fn update(&mut self, delta_time: f32) {
        self.start();

        for &key in &self.order {
            if let (Some(actor), Some(behavior)) = (self.actors.get_mut(key), self.behaviors.get_mut(key)) {
                behavior.update(actor, delta_time);
            }
        }

        self.update_transforms();

        if let (Some(camera), Some(target)) = (
            self.camera.as_mut(),
            self.camera_follow.and_then(|key| self.actors.get(key)),
        ) {
            camera.follow(target);
        }

        self.dispatch_collisions();
        self.commit_removals();
    }

    /// Recompute every global transform, parents before children
    fn update_transforms(&mut self) {
        let roots: Vec<ActorKey> = self
            .order
            .iter()
            .copied()
            .filter(|&key| self.actors[key].parent().is_none())
            .collect();
        for root in roots {
            self.refresh_subtree(root);
        }
    }

    /// Test each unordered pair once and notify both sides
    fn dispatch_collisions(&mut self) {
        let candidates: Vec<ActorKey> = self
            .order
            .iter()
            .copied()
            .filter(|&key| {
                let actor = &self.actors[key];
                actor.collider().is_some() && !actor.is_pending_removal()
            })
            .collect();

        let mut pairs = Vec::new();
        for (i, &a) in candidates.iter().enumerate() {
            for &b in &candidates[i + 1..] {
                if self.actors[a].check_collision(&self.actors[b]) {
                    pairs.push((a, b));
                }
            }
        }

        for (a, b) in pairs {
            let contact_a = Contact::new(a, &self.actors[a]);
            let contact_b = Contact::new(b, &self.actors[b]);
            self.notify_collision(a, &contact_b);
            self.notify_collision(b, &contact_a);
        }
    }

    fn notify_collision(&mut self, key: ActorKey, contact: &Contact) {
        if let (Some(actor), Some(behavior)) = (self.actors.get_mut(key), self.behaviors.get_mut(key)) {
            behavior.on_collision(actor, contact);
        }
    }

    fn commit_removals(&mut self) {
        if self.pending_removals.is_empty() {
            return;
        }

        let marked: Vec<ActorKey> = self
            .order
            .iter()
            .copied()
            .filter(|key| self.pending_removals.contains(key))
            .collect();
        self.pending_removals.clear();

        for root in marked {
            if !self.actors.contains_key(root) {
                continue;
            }
            if let Some(parent) = self.actors[root].parent() {
                if let Some(parent_actor) = self.actors.get_mut(parent) {
                    parent_actor.remove_child_key(root);
                }
            }
            for key in self.subtree(root) {
                self.end_actor(key);
                if let Some(actor) = self.actors.remove(key) {
                    crate::engine_trace!("mfg::Scene", "'{}': removed actor '{}'", self.name, actor.name());
                }
                self.behaviors.remove(key);
                if self.camera_follow == Some(key) {
                    self.camera_follow = None;
                }
            }
        }

        let actors = &self.actors;
        self.order.retain(|&key| actors.contains_key(key));
    }

    fn end_actor(&mut self, key: ActorKey) {
        let Some(actor) = self.actors.get_mut(key) else {
            return;
        };
        if let Some(behavior) = self.behaviors.get_mut(key) {
            behavior.end(actor);
        }
        actor.end();
    }

    /// Draw every visible actor: sprite, shape, behavior, then collider outline
    pub fn draw(&mut self, surface: &mut dyn RenderSurface, draw_colliders: bool) {
        for &key in &self.order {
            let Some(actor) = self.actors.get_mut(key) else {
                continue;
            };
            if !actor.is_visible() || actor.is_pending_removal() {
                continue;
            }
            actor.draw(surface);
            if let Some(behavior) = self.behaviors.get(key) {
                behavior.draw(actor, surface);
            }
            if draw_colliders {
                actor.draw_collider(surface);
            }
        }
    }

    /// End every actor; a later `start` runs them again
    pub fn end(&mut self) {
        for index in 0..self.order.len() {
            let key = self.order[index];
            self.end_actor(key);
        }
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
