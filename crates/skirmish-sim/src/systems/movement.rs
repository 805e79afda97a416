//! Kinematic integration.
//!
//! Projectiles advance along their forward vector; agents integrate and
//! damp their velocity. No entity reads another, so order within a pass
//! does not matter.

use hecs::World;

use skirmish_core::components::{MoveForward, Velocity};
use skirmish_core::types::Transform;

/// Move every `MoveForward` entity: position += dt * speed * forward.
pub fn run(world: &mut World, dt: f32) {
    for (_entity, (transform, mover)) in world.query_mut::<(&mut Transform, &MoveForward)>() {
        transform.position += transform.forward() * (mover.speed * dt);
    }
}

/// Integrate agent velocity and shed `damping` of it per second.
pub fn integrate_velocity(world: &mut World, dt: f32, damping: f32) {
    let decay = (1.0 - damping * dt).max(0.0);
    for (_entity, (transform, velocity)) in world.query_mut::<(&mut Transform, &mut Velocity)>() {
        transform.position += velocity.linear * dt;
        velocity.linear *= decay;
    }
}
