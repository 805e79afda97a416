//! Spread-volley headings for ranged fighters.

/// Yaw offsets (degrees) for one volley: `step * y` for
/// `y in -(spread/2) .. spread/2`.
///
/// An even spread fires exactly `spread` projectiles; an odd spread fires
/// one fewer, because the range is half-open.
pub fn spread_yaw_offsets(spread: u32, step_deg: f32) -> Vec<f32> {
    let max = (spread / 2) as i32;
    (-max..max).map(|y| step_deg * y as f32).collect()
}
