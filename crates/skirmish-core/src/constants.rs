//! Simulation constants and tuning defaults.
//!
//! Values that training runs are expected to tweak live in
//! [`crate::config::ArenaConfig`]; the defaults there are taken from here.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 50;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// Expiry slack as a fraction of the tick length. A lifetime at or below
/// `dt * LIFETIME_EPSILON_FRACTION` counts as expired, which absorbs `f32`
/// subtraction drift while a lifetime `dt * (n + 1e-4)` or longer still
/// lives through tick `n`.
pub const LIFETIME_EPSILON_FRACTION: f32 = 1e-4;

// --- Match statistics ---

/// Decided episodes per rolling win-counter window.
pub const MATCH_WINDOW: u32 = 100;

// --- Terminal rewards ---

pub const TERMINAL_WIN_REWARD: f32 = 1.0;
pub const TERMINAL_LOSS_REWARD: f32 = -1.0;

// --- Arena geometry ---

/// Half-extent of the square arena (units).
pub const ARENA_RANGE: f32 = 19.0;

/// Gap kept between the two spawn regions and the arena center.
pub const ARENA_PACE: f32 = 5.0;

/// Height at which agents spawn.
pub const SPAWN_HEIGHT: f32 = 1.0;

/// Lower bound (inclusive) of the randomized team size.
pub const RANDOM_TEAM_MIN: u32 = 3;

/// Upper bound (exclusive) of the randomized team size.
pub const RANDOM_TEAM_MAX: u32 = 7;

// --- Agent ---

pub const AGENT_MAX_HEALTH: i32 = 100;
pub const AGENT_MOVE_SPEED: f32 = 5.0;
/// Degrees per second.
pub const AGENT_TURN_SPEED: f32 = 90.0;
pub const AGENT_COLLIDER_RADIUS: f32 = 0.5;
/// Fraction of impulse velocity shed per second.
pub const AGENT_VELOCITY_DAMPING: f32 = 4.0;

// --- Rewards ---

/// Reward for a projectile landing on an opponent.
pub const PROJECTILE_HIT_BONUS: f32 = 0.5;

/// Projectile damage is divided by this to get the reward penalty.
pub const DAMAGE_REWARD_SCALE: f32 = 100.0;

pub const MELEE_HIT_BONUS: f32 = 0.5;
pub const MELEE_MISS_PENALTY: f32 = 0.02;
pub const AIM_SHAPING_BONUS: f32 = 0.02;

// --- Melee ---

pub const MELEE_RANGE: f32 = 3.0;
pub const MELEE_DAMAGE: i32 = 40;
pub const MELEE_COOLDOWN_SECS: f64 = 2.0;
pub const MELEE_IMPULSE: f32 = 10.0;
pub const DETECTION_ACCURACY: u32 = 5;
/// Total fan angle in degrees.
pub const DETECTION_ANGLE: f32 = 60.0;
/// Fraction of the cooldown an agent waits for its first attack after a reset.
pub const MELEE_RESET_DELAY_FRACTION: f64 = 0.5;

// --- Ranged ---

/// Ranged attack range; also the projectile speed in units per second.
pub const RANGED_RANGE: f32 = 20.0;
pub const RANGED_DAMAGE: i32 = 20;
pub const RANGED_SPREAD: u32 = 10;
/// Yaw between neighbouring projectiles of a volley (degrees).
pub const RANGED_SPREAD_STEP: f32 = 3.0;
pub const RANGED_COOLDOWN_SECS: f64 = 2.0;
pub const RANGED_DETECTION_CADENCE_SECS: f64 = 0.5;
pub const PROJECTILE_LIFETIME_SECS: f32 = 2.0;
pub const PROJECTILE_RADIUS: f32 = 0.1;
pub const IMPACT_EFFECT_LIFETIME_SECS: f32 = 0.5;
