//! Cone detection by fanned ray casts.

use hecs::Entity;

use skirmish_core::types::{yaw, Transform};

use crate::physics::{PhysicsWorld, Ray, RayHit};
use crate::store::EntityStore;

/// Result of casting a fan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FanScan {
    /// First accepted hit, in fan order.
    pub target: Option<RayHit>,
    /// Rays actually cast before stopping.
    pub rays_cast: usize,
}

/// Cast one ray per yaw offset from `caster`'s transform, in the given
/// order, and stop at the first hit that `accept` takes. A ray whose first
/// hit is rejected counts as a miss for that ray.
pub fn scan_fan<P: PhysicsWorld + ?Sized>(
    physics: &P,
    store: &EntityStore,
    caster: Entity,
    origin: &Transform,
    offsets: &[f32],
    range: f32,
    mut accept: impl FnMut(Entity) -> bool,
) -> FanScan {
    let forward = origin.forward();
    let mut rays_cast = 0;
    for &offset in offsets {
        rays_cast += 1;
        let ray = Ray {
            origin: origin.position,
            direction: yaw(offset) * forward,
            max_distance: range,
            exclude: Some(caster),
        };
        if let Some(hit) = physics.raycast(store.world(), &ray) {
            if accept(hit.entity) {
                return FanScan {
                    target: Some(hit),
                    rays_cast,
                };
            }
        }
    }
    FanScan {
        target: None,
        rays_cast,
    }
}
