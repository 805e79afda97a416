//! Timed destruction of projectiles and impact effects.

use hecs::{Entity, World};

use skirmish_core::components::{ProjectileRuntime, TimedLifetime};
use skirmish_core::constants::LIFETIME_EPSILON_FRACTION;

use crate::store::EntityStore;

/// Count down every `TimedLifetime` and stage a despawn for each one that
/// reached zero. The entity stays in the world until the tick-end flush.
/// Returns the number of entities expired this pass.
pub fn run(store: &mut EntityStore, dt: f32) -> usize {
    let slack = dt * LIFETIME_EPSILON_FRACTION;
    let mut expired = Vec::new();
    for (entity, lifetime) in store.world_mut().query_mut::<&mut TimedLifetime>() {
        lifetime.remaining -= dt;
        if lifetime.remaining <= slack {
            lifetime.remaining = 0.0;
            expired.push(entity);
        }
    }

    let count = expired.len();
    for entity in expired {
        store.destroy(entity);
    }
    count
}

/// Zero the lifetime of every projectile fired by `owner`. They are
/// despawned by the next expiry pass, not here.
pub fn force_expire_owned_by(world: &mut World, owner: Entity) -> usize {
    let mut count = 0;
    for (_entity, (lifetime, projectile)) in
        world.query_mut::<(&mut TimedLifetime, &ProjectileRuntime)>()
    {
        if projectile.parent == owner {
            lifetime.remaining = 0.0;
            count += 1;
        }
    }
    count
}
