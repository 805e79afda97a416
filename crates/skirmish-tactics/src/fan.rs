//! Cone detection as a fan of rays.
//!
//! One ray straight ahead, then `accuracy` symmetric pairs at growing yaw
//! offsets. Rays are cast in the order returned here and the caller stops
//! at the first hit, so there are never ties.

/// Yaw offsets (degrees) for a detection fan, in cast order:
/// `0, -s, +s, -2s, +2s, ...` with `s = (angle / 2) / accuracy`.
///
/// `accuracy == 0` yields the center ray only.
pub fn ray_fan_offsets(accuracy: u32, angle_deg: f32) -> Vec<f32> {
    let mut offsets = Vec::with_capacity(ray_count(accuracy));
    offsets.push(0.0);
    if accuracy == 0 {
        return offsets;
    }
    let step = (angle_deg / 2.0) / accuracy as f32;
    for i in 1..=accuracy {
        let offset = step * i as f32;
        offsets.push(-offset);
        offsets.push(offset);
    }
    offsets
}

/// Number of rays a fan with this accuracy casts when nothing is hit.
pub fn ray_count(accuracy: u32) -> usize {
    1 + 2 * accuracy as usize
}
