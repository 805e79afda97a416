//! Entity store: a hecs world plus a deferred command buffer.
//!
//! Systems iterate the world and stage structural changes (spawn, despawn)
//! in the command buffer. [`EntityStore::flush`] applies them at a single
//! point at the end of each tick, so no iteration ever sees an entity
//! vanish under it.

use std::collections::BTreeSet;

use hecs::{CommandBuffer, Component, DynamicBundle, Entity, World};

#[derive(Default)]
pub struct EntityStore {
    world: World,
    commands: CommandBuffer,
    pending_destroy: BTreeSet<Entity>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn immediately. Only for use outside system iteration
    /// (setup and arena resets).
    pub fn spawn(&mut self, components: impl DynamicBundle) -> Entity {
        self.world.spawn(components)
    }

    /// Despawn immediately. Only for use outside system iteration, with
    /// the command buffer already flushed. Returns `false` if the entity
    /// was already gone.
    pub fn despawn(&mut self, entity: Entity) -> bool {
        self.world.despawn(entity).is_ok()
    }

    /// Stage a spawn for the next flush.
    pub fn spawn_deferred(&mut self, components: impl DynamicBundle) {
        self.commands.spawn(components);
    }

    /// Stage a despawn for the next flush. Repeated requests for the same
    /// entity collapse into one.
    pub fn destroy(&mut self, entity: Entity) {
        if self.pending_destroy.insert(entity) {
            self.commands.despawn(entity);
        }
    }

    /// Whether a despawn is already staged for `entity`.
    pub fn is_pending_destroy(&self, entity: Entity) -> bool {
        self.pending_destroy.contains(&entity)
    }

    /// Apply every staged command.
    pub fn flush(&mut self) {
        self.commands.run_on(&mut self.world);
        self.pending_destroy.clear();
    }

    /// Copy of a component, or `None` if the entity is gone or does not
    /// carry it.
    pub fn get<T: Component + Clone>(&self, entity: Entity) -> Option<T> {
        self.world.get::<&T>(entity).ok().map(|c| (*c).clone())
    }

    /// Attach or replace a component. Returns `false` if the entity is gone.
    pub fn set<T: Component>(&mut self, entity: Entity, component: T) -> bool {
        self.world.insert_one(entity, component).is_ok()
    }

    /// Mutate a component in place. `None` if it is missing.
    pub fn update<T: Component, R>(
        &mut self,
        entity: Entity,
        f: impl FnOnce(&mut T) -> R,
    ) -> Option<R> {
        let mut component = self.world.get::<&mut T>(entity).ok()?;
        Some(f(&mut component))
    }

    pub fn has<T: Component>(&self, entity: Entity) -> bool {
        self.world
            .entity(entity)
            .map(|e| e.has::<T>())
            .unwrap_or(false)
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.world.contains(entity)
    }

    /// Read-only access to the world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Number of entities of a kind, counted by a marker component.
    pub fn count<T: Component>(&self) -> usize {
        self.world.query::<&T>().iter().count()
    }
}
