//! Physics/overlap collaborator.
//!
//! The engine asks its physics backend for the tick's collision pairs and
//! for ray casts. [`SpherePhysics`] is the headless backend used by
//! default: every collider is a sphere, pairs are reported for projectiles
//! overlapping agents, and rays only hit living agents.

use glam::Vec3;
use hecs::{Entity, World};

use skirmish_core::components::{AgentRuntime, Collider, ProjectileRuntime};
use skirmish_core::enums::Team;
use skirmish_core::types::Transform;

/// An overlap between two entities. Order is unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
}

/// A ray query. `exclude` is skipped, so a caster can start inside its
/// own collider.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
    pub max_distance: f32,
    pub exclude: Option<Entity>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub entity: Entity,
    pub point: Vec3,
    pub distance: f32,
}

pub trait PhysicsWorld {
    /// Overlap pairs for this tick, from the world as it stands after
    /// movement.
    fn collision_events(&mut self, world: &World) -> Vec<CollisionEvent>;

    /// First entity along the ray, if any lies within `max_distance`.
    fn raycast(&self, world: &World, ray: &Ray) -> Option<RayHit>;
}

/// Sphere-only overlap detector and ray caster.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpherePhysics;

impl PhysicsWorld for SpherePhysics {
    fn collision_events(&mut self, world: &World) -> Vec<CollisionEvent> {
        let projectiles: Vec<(Entity, Vec3, f32)> = world
            .query::<(&Transform, &Collider, &ProjectileRuntime)>()
            .iter()
            .map(|(e, (t, c, _))| (e, t.position, c.radius))
            .collect();
        if projectiles.is_empty() {
            return Vec::new();
        }

        let agents: Vec<(Entity, Vec3, f32)> = world
            .query::<(&Transform, &Collider, &AgentRuntime)>()
            .iter()
            .map(|(e, (t, c, _))| (e, t.position, c.radius))
            .collect();

        let mut events = Vec::new();
        for &(p, p_pos, p_r) in &projectiles {
            for &(a, a_pos, a_r) in &agents {
                let reach = p_r + a_r;
                if p_pos.distance_squared(a_pos) <= reach * reach {
                    // Report in handle order; consumers must not rely on
                    // the projectile coming first.
                    let (a, b) = if p.to_bits() < a.to_bits() { (p, a) } else { (a, p) };
                    events.push(CollisionEvent { a, b });
                }
            }
        }
        events
    }

    fn raycast(&self, world: &World, ray: &Ray) -> Option<RayHit> {
        let mut best: Option<RayHit> = None;
        for (entity, (transform, collider, runtime)) in world
            .query::<(&Transform, &Collider, &AgentRuntime)>()
            .iter()
        {
            if Some(entity) == ray.exclude || runtime.team == Team::Dead {
                continue;
            }
            let Some(distance) = ray_sphere(ray, transform.position, collider.radius) else {
                continue;
            };
            if distance > ray.max_distance {
                continue;
            }
            if best.map_or(true, |b| distance < b.distance) {
                best = Some(RayHit {
                    entity,
                    point: ray.origin + ray.direction * distance,
                    distance,
                });
            }
        }
        best
    }
}

/// Distance along the ray to the sphere surface, or `None` if missed.
/// A ray starting inside the sphere reports the exit point.
fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let root = disc.sqrt();
    let near = -b - root;
    if near >= 0.0 {
        return Some(near);
    }
    let far = -b + root;
    (far >= 0.0).then_some(far)
}
