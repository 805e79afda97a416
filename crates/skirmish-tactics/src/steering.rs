//! Converts discrete action branches into motion.

use glam::Vec3;

/// Map a discrete branch value in {0, 1, 2} to {-1, 0, +1}.
pub fn branch_axis(value: f32) -> f32 {
    value - 1.0
}

/// Planar movement direction from the vertical and horizontal axes.
/// Zero when both axes are idle or cancel out.
pub fn move_direction(vertical: f32, horizontal: f32, forward: Vec3, right: Vec3) -> Vec3 {
    (vertical * forward + horizontal * right).normalize_or_zero()
}

/// Yaw change in degrees for one tick.
pub fn turn_delta(turn: f32, turn_speed_deg: f32, dt: f32) -> f32 {
    turn * turn_speed_deg * dt
}
