//! Enemy spawner: spawns one randomized enemy every `interval` frames.

use hecs::Entity;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::warn;

use shapestorm_core::config::EnemyConfig;
use shapestorm_core::constants::{SPAWN_DIRECTION_ATTEMPTS, SPAWN_DIRECTION_RANGE};
use shapestorm_core::types::{Rgba, Vec2};

use crate::spawn::{self, EnemyParams};
use crate::store::EntityStore;

/// Interval-based spawn trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnPolicy {
    pub interval: u64,
    pub last_spawn_frame: u64,
}

impl SpawnPolicy {
    pub fn new(interval: u64) -> Self {
        Self {
            interval,
            last_spawn_frame: 0,
        }
    }

    /// True exactly `interval` frames after the previous spawn.
    pub fn should_spawn(&self, current_frame: u64) -> bool {
        current_frame.saturating_sub(self.last_spawn_frame) == self.interval
    }
}

/// Spawn an enemy if one is due this frame.
pub fn run(
    store: &mut EntityStore,
    rng: &mut ChaCha8Rng,
    policy: &mut SpawnPolicy,
    config: &EnemyConfig,
    play_area: Vec2,
    current_frame: u64,
) -> Option<Entity> {
    if !policy.should_spawn(current_frame) {
        return None;
    }
    let params = sample_enemy(rng, config, play_area);
    let enemy = spawn::spawn_enemy(store, config, &params);
    policy.last_spawn_frame = current_frame;
    Some(enemy)
}

/// Draw the randomized parameters of one enemy.
///
/// The position is inset by the shape radius on every side so a new enemy
/// never starts clipped by a boundary.
pub fn sample_enemy(rng: &mut ChaCha8Rng, config: &EnemyConfig, play_area: Vec2) -> EnemyParams {
    let r = config.shape_radius;
    let position = Vec2::new(
        rng.gen_range(r..=play_area.x - r),
        rng.gen_range(r..=play_area.y - r),
    );

    EnemyParams {
        position,
        direction: sample_direction(rng),
        speed: rng.gen_range(config.speed_min..=config.speed_max),
        sides: rng.gen_range(config.vertices_min..=config.vertices_max),
        fill: Rgba::rgb(rng.gen(), rng.gen(), rng.gen()),
    }
}

/// Unit direction from integer axes in `[-R, R]`.
///
/// A `(0, 0)` draw has no direction and is redrawn.
pub fn sample_direction(rng: &mut ChaCha8Rng) -> Vec2 {
    for _ in 0..SPAWN_DIRECTION_ATTEMPTS {
        let x = rng.gen_range(-SPAWN_DIRECTION_RANGE..=SPAWN_DIRECTION_RANGE);
        let y = rng.gen_range(-SPAWN_DIRECTION_RANGE..=SPAWN_DIRECTION_RANGE);
        if let Some(direction) = Vec2::new(x as f32, y as f32).try_normalize() {
            return direction;
        }
    }
    warn!("spawn direction stayed degenerate, defaulting to +x");
    Vec2::X
}
