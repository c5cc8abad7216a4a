//! Simulation constants and tuning parameters.

/// Score earned per polygon side of a destroyed enemy.
pub const SCORE_MULTIPLIER: i64 = 100;

/// Fragments are worth this many times their parent's per-side score.
pub const FRAGMENT_SCORE_FACTOR: i64 = 2;

/// Spawn direction axes are drawn as integers in `[-R, R]` before normalizing.
pub const SPAWN_DIRECTION_RANGE: i32 = 10;

/// Redraws allowed when a spawn direction comes out as `(0, 0)`.
pub const SPAWN_DIRECTION_ATTEMPTS: u32 = 16;

/// Rotation applied to every drawn shape each frame (degrees).
pub const SPIN_DEGREES_PER_FRAME: f32 = 1.0;

/// Maximum value of a color channel; fill alpha is scaled into `[0, MAX]`.
pub const COLOR_CHANNEL_MAX: u8 = 255;

/// Default RNG seed for the simulation.
pub const DEFAULT_SEED: u64 = 42;
