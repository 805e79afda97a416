//! Fundamental geometric and simulation types.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Position and orientation of an entity.
///
/// The arena is Y-up. Yaw rotates about +Y; a yaw of zero faces +Z and a
/// positive yaw turns toward +X.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Transform at `position` facing `yaw_deg` degrees.
    pub fn from_yaw(position: Vec3, yaw_deg: f32) -> Self {
        Self::new(position, yaw(yaw_deg))
    }

    /// Unit forward vector.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Unit right vector.
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Heading in degrees in [0, 360).
    pub fn yaw_degrees(&self) -> f32 {
        let f = self.forward();
        f.x.atan2(f.z).to_degrees().rem_euclid(360.0)
    }
}

/// Rotation of `degrees` about the up axis.
pub fn yaw(degrees: f32) -> Quat {
    Quat::from_rotation_y(degrees.to_radians())
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt as f64;
    }
}

/// Attack or detection timer measured against simulation time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Cooldown {
    /// Seconds between triggers.
    pub period: f64,
    /// Simulation time at which the next trigger is allowed.
    pub ready_at: f64,
}

impl Cooldown {
    /// Slack for comparing accumulated tick time against `ready_at`.
    const SLACK: f64 = 1e-9;

    pub fn new(period: f64) -> Self {
        Self {
            period,
            ready_at: 0.0,
        }
    }

    pub fn is_ready(&self, now: f64) -> bool {
        now + Self::SLACK >= self.ready_at
    }

    /// Start a new period at `now`.
    pub fn trigger(&mut self, now: f64) {
        self.ready_at = now + self.period;
    }

    /// Block triggers for `fraction` of a period, starting at `now`.
    pub fn hold(&mut self, now: f64, fraction: f64) {
        self.ready_at = now + self.period * fraction;
    }
}
