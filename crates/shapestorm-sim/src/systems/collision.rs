//! Collision system.
//!
//! Resolves three pair kinds with a circle overlap test on collision radii:
//! - enemy × player: player back to center, enemy destroyed and fragmented, score reset
//! - enemy × bullet: both destroyed, enemy fragmented, score += enemy value
//! - small enemy × player: small enemy destroyed
//!
//! All pairs are checked; nothing short-circuits on the first hit. With
//! `HitPolicy::OncePerTick`, an entity destroyed earlier in the pass takes
//! part in no further pair.

use hecs::Entity;
use tracing::{debug, info};

use shapestorm_core::components::{CollisionBody, Score, Transform};
use shapestorm_core::config::EnemyConfig;
use shapestorm_core::enums::{HitPolicy, Tag};
use shapestorm_core::types::Vec2;

use crate::spawn;
use crate::store::EntityStore;

/// What happened during one collision pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionResult {
    pub enemies_destroyed: u32,
    pub bullets_spent: u32,
    pub small_enemies_destroyed: u32,
    pub player_hits: u32,
    pub fragments_spawned: u32,
}

/// Run the collision pass, updating `score` in place.
pub fn run(
    store: &mut EntityStore,
    score: &mut i64,
    enemy_config: &EnemyConfig,
    respawn_point: Vec2,
    policy: HitPolicy,
) -> CollisionResult {
    let mut result = CollisionResult::default();

    let players = store.query_tag(Tag::Player).to_vec();
    let bullets = store.query_tag(Tag::Bullet).to_vec();

    for enemy in store.query_tag(Tag::Enemy).to_vec() {
        for &player in &players {
            if !participates(store, enemy, policy) || !participates(store, player, policy) {
                continue;
            }
            if !overlapping(store, enemy, player) {
                continue;
            }
            if let Some(mut transform) = store.get_mut::<Transform>(player) {
                transform.position = respawn_point;
            }
            store.destroy(enemy);
            result.fragments_spawned += spawn::spawn_fragments(store, enemy_config, enemy);
            *score = 0;
            result.enemies_destroyed += 1;
            result.player_hits += 1;
            info!(
                x = respawn_point.x,
                y = respawn_point.y,
                "player hit, respawning at center"
            );
        }

        for &bullet in &bullets {
            if !participates(store, enemy, policy) || !participates(store, bullet, policy) {
                continue;
            }
            if !overlapping(store, enemy, bullet) {
                continue;
            }
            store.destroy(enemy);
            store.destroy(bullet);
            result.fragments_spawned += spawn::spawn_fragments(store, enemy_config, enemy);
            let value = store.get::<Score>(enemy).map(|s| s.value).unwrap_or(0);
            *score += value;
            result.enemies_destroyed += 1;
            result.bullets_spent += 1;
            debug!(value, score = *score, "enemy shot down");
        }
    }

    for small in store.query_tag(Tag::SmallEnemy).to_vec() {
        for &player in &players {
            if !participates(store, small, policy) || !participates(store, player, policy) {
                continue;
            }
            if overlapping(store, small, player) {
                store.destroy(small);
                result.small_enemies_destroyed += 1;
            }
        }
    }

    result
}

/// Whether `entity` may still collide this pass under `policy`.
fn participates(store: &EntityStore, entity: Entity, policy: HitPolicy) -> bool {
    match policy {
        HitPolicy::OncePerTick => store.is_alive(entity),
        HitPolicy::Repeat => true,
    }
}

/// Circle test: center distance strictly below the sum of collision radii.
fn overlapping(store: &EntityStore, a: Entity, b: Entity) -> bool {
    match (body(store, a), body(store, b)) {
        (Some((pa, ra)), Some((pb, rb))) => pa.distance(pb) < ra + rb,
        _ => false,
    }
}

fn body(store: &EntityStore, entity: Entity) -> Option<(Vec2, f32)> {
    let position = store.get::<Transform>(entity)?.position;
    let radius = store.get::<CollisionBody>(entity)?.radius;
    Some((position, radius))
}
