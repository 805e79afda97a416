//! Spawn placement geometry.
//!
//! Opposing teams start on separate sides of the arena: either the two
//! halves of a square, or two wedges of a partial donut.

use glam::Vec3;
use rand::Rng;

use skirmish_core::config::{ArenaLayout, SpawnLayout, WedgeSpec};
use skirmish_core::enums::{FighterKind, Team};
use skirmish_core::types::yaw;

/// Spawn position for `team` in an arena centered at `center`.
pub fn spawn_position<R: Rng>(
    rng: &mut R,
    layout: &ArenaLayout,
    team: Team,
    center: Vec3,
) -> Vec3 {
    match layout.layout {
        SpawnLayout::HalfPlane => half_plane_position(
            rng,
            team,
            layout.range,
            layout.pace,
            layout.spawn_height,
            center,
        ),
        SpawnLayout::Wedge { team_one, team_two } => {
            let spec = if team == Team::TeamTwo { team_two } else { team_one };
            let mut pos = wedge_position(rng, center, &spec);
            pos.y = center.y + layout.spawn_height;
            pos
        }
    }
}

/// Uniform point in the team's half of a square arena.
///
/// X spans the full (paced) width. Team One takes Z in `[pace, paced)`,
/// Team Two takes Z in `[-paced, -pace)`. If the arena is too small for the
/// pace margin, the full range is used for the outer bound.
pub fn half_plane_position<R: Rng>(
    rng: &mut R,
    team: Team,
    range: f32,
    pace: f32,
    height: f32,
    center: Vec3,
) -> Vec3 {
    let paced = if range - pace > 0.0 { range - pace } else { range };
    let x = sample(rng, -paced, paced);
    let z = match team {
        Team::TeamTwo => sample(rng, -paced, -pace),
        _ => sample(rng, pace, paced),
    };
    center + Vec3::new(x, height, z)
}

/// Random point on the XZ plane inside a partial donut around `center`.
pub fn wedge_position<R: Rng>(rng: &mut R, center: Vec3, spec: &WedgeSpec) -> Vec3 {
    let radius = sample(rng, spec.min_radius, spec.max_radius);
    let angle = sample(rng, spec.min_angle, spec.max_angle);
    center + yaw(angle) * Vec3::Z * radius
}

/// Initial heading (degrees) for a freshly reset agent.
///
/// Warriors face roughly toward the enemy half; ranged fighters face
/// anywhere.
pub fn spawn_yaw<R: Rng>(rng: &mut R, kind: FighterKind, team: Team) -> f32 {
    match (kind, team) {
        (FighterKind::Ranged, _) => rng.gen_range(0.0..360.0),
        (FighterKind::Warrior, Team::TeamTwo) => rng.gen_range(-60.0..60.0),
        (FighterKind::Warrior, _) => rng.gen_range(120.0..240.0),
    }
}

/// `gen_range` that tolerates an empty interval by returning its start.
fn sample<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}
